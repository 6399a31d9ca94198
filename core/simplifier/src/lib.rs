#![warn(clippy::pedantic)]
//! Tree simplification for the VSL compiler front end.
//!
//! Takes the raw syntax tree built by the parser and rewrites it into a
//! denser AST: purely syntactic wrapper nodes are removed, nested lists are
//! flattened, print statements hold their items directly, and arithmetic on
//! integer literals is folded into a single literal.
//!
//! ```
//! use vslc_ast::nodes::Node;
//! use vslc_simplifier::simplify;
//!
//! let tree = Node::expression('+', vec![Node::number(2), Node::number(3)]);
//! assert_eq!(simplify(tree)?, Node::number(5));
//! # Ok::<(), vslc_simplifier::errors::SimplifyError>(())
//! ```
//!
//! The pass performs no semantic validation. Symbol slots are left unset
//! for symbol resolution to fill in.

pub mod errors;
pub mod evaluator;
pub mod flatten;
pub mod simplify;

use vslc_ast::nodes::Node;

pub use errors::{EvalError, SimplifyError};
pub use simplify::{Simplifier, SimplifyStats};

/// Simplifies a whole compilation unit and returns its new root.
///
/// # Errors
///
/// Returns a [`SimplifyError`] when folding hits an invalid operator or a
/// division by zero.
pub fn simplify(root: Node) -> Result<Node, SimplifyError> {
    Simplifier::new().run(root)
}
