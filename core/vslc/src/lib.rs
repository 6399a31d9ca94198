#![warn(clippy::pedantic)]
//! Core Orchestration Crate for the VSL Compiler Front End
//!
//! This crate wires the tree-rewriting stage between its neighbours: the
//! parser hands over a raw syntax tree, this stage simplifies it, and symbol
//! resolution picks up the result.
//!
//! ```text
//! raw tree (JSON) → load_tree → simplify → symbol resolution
//!                                   ↓
//!                                 dump (debug)
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use vslc::{dump, load_tree, simplify};
//!
//! let raw = r#"{
//!     "kind": "EXPRESSION",
//!     "payload": { "operator": "*" },
//!     "children": [
//!         { "kind": "NUMBER_DATA", "payload": { "number": 6 } },
//!         { "kind": "NUMBER_DATA", "payload": { "number": 7 } }
//!     ]
//! }"#;
//! let root = simplify(load_tree(raw)?)?;
//! assert_eq!(dump(&root, 1), " NUMBER_DATA(42)\n");
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! ## Error Handling
//!
//! All public functions return `anyhow::Result`. The typed errors of
//! [`vslc_simplifier::errors`] stay reachable through
//! [`anyhow::Error::downcast_ref`].
//!
//! ## Architecture
//!
//! - [`vslc_ast`] - node model and debug printer
//! - [`vslc_simplifier`] - wrapper elision, list flattening, constant folding

use anyhow::Context;
use serde::Deserialize;
use vslc_ast::{nodes::Node, printer::render_tree};
use vslc_simplifier::{Simplifier, SimplifyStats};

/// Decodes a raw syntax tree from its JSON form.
///
/// Node ids are assigned fresh on load and symbol slots start out unset.
/// Nesting depth is unbounded: left-recursive list rules nest one level per
/// list element, so decoding grows the stack on demand instead.
///
/// # Errors
///
/// Returns an error if `json` is not a well-formed tree.
pub fn load_tree(json: &str) -> anyhow::Result<Node> {
    let mut deserializer = serde_json::Deserializer::from_str(json);
    deserializer.disable_recursion_limit();
    let root = Node::deserialize(serde_stacker::Deserializer::new(&mut deserializer))
        .context("failed to decode raw syntax tree")?;
    deserializer
        .end()
        .context("failed to decode raw syntax tree")?;
    Ok(root)
}

/// Runs the simplification pass over a compilation unit.
///
/// # Errors
///
/// Returns an error if constant folding fails.
pub fn simplify(root: Node) -> anyhow::Result<Node> {
    simplify_with_stats(root).map(|(root, _)| root)
}

/// Like [`simplify`], also returning what the pass rewrote.
///
/// # Errors
///
/// Returns an error if constant folding fails.
pub fn simplify_with_stats(root: Node) -> anyhow::Result<(Node, SimplifyStats)> {
    let mut simplifier = Simplifier::new();
    let root = simplifier
        .run(root)
        .context("tree simplification failed")?;
    Ok((root, simplifier.into_stats()))
}

/// Renders the tree for diagnostics, `indent` spaces per level.
#[must_use]
pub fn dump(root: &Node, indent: usize) -> String {
    render_tree(Some(root), indent)
}
