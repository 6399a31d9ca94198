//! Error types for the simplification pass.

use thiserror::Error;
use vslc_ast::nodes::NodeKind;

/// Failures of the integer operator semantics used by constant folding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("invalid unary operator `{0}`")]
    InvalidUnaryOperator(char),

    #[error("invalid binary operator `{0}`")]
    InvalidBinaryOperator(char),

    #[error("division by zero")]
    DivisionByZero,

    /// Only one- and two-operand expressions have a defined meaning.
    #[error("cannot apply an operator to {0} operands")]
    UnsupportedArity(usize),
}

/// Errors that abort simplification of a compilation unit.
///
/// Every variant names the id of the node that caused it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[must_use = "errors must not be silently ignored"]
pub enum SimplifyError {
    /// A constant expression could not be evaluated.
    #[error("node {node}: cannot fold `{operator}` expression: {source}")]
    Fold {
        node: u32,
        operator: char,
        #[source]
        source: EvalError,
    },

    /// A node selected for folding lacks the payload its kind requires.
    #[error("node {node}: malformed {kind}: {reason}")]
    MalformedNode {
        node: u32,
        kind: NodeKind,
        reason: &'static str,
    },
}

impl SimplifyError {
    /// Id of the offending node.
    #[must_use]
    pub fn node(&self) -> u32 {
        match self {
            SimplifyError::Fold { node, .. } | SimplifyError::MalformedNode { node, .. } => *node,
        }
    }
}
