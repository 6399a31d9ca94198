#![warn(clippy::pedantic)]
//! Syntax tree node model for the VSL compiler front end.
//!
//! The parser builds a raw tree of [`nodes::Node`] values; later stages
//! rewrite it in place. Every node exclusively owns its payload and its
//! children, so a tree is dropped exactly once, bottom-up, when its root goes
//! out of scope. The explicit [`Node::release`](nodes::Node::release) and
//! [`Node::destroy_subtree`](nodes::Node::destroy_subtree) operations exist
//! for passes that dismantle nodes while relocating their children.
//!
//! - [`nodes`] - node, kind, payload and symbol slot types
//! - [`printer`] - indented debug dump

pub(crate) mod enums_impl;
pub mod nodes;
pub mod nodes_impl;
pub mod printer;
