//! Integer semantics of the operators that constant folding understands.
//!
//! All arithmetic is 64-bit two's complement and wraps on overflow. `<` and
//! `>` are left and right shifts, not comparisons; the shift amount is taken
//! modulo 64 and `>` shifts arithmetically.

use crate::errors::EvalError;

/// Applies a prefix operator: `-` negates, `~` complements.
///
/// # Errors
///
/// Returns [`EvalError::InvalidUnaryOperator`] for any other operator.
pub fn apply_unary(op: char, operand: i64) -> Result<i64, EvalError> {
    match op {
        '-' => Ok(operand.wrapping_neg()),
        '~' => Ok(!operand),
        _ => Err(EvalError::InvalidUnaryOperator(op)),
    }
}

/// Applies an infix operator to `lhs` and `rhs`, in that order.
///
/// # Errors
///
/// Returns [`EvalError::DivisionByZero`] for `/` with a zero divisor and
/// [`EvalError::InvalidBinaryOperator`] for operators outside
/// `+ - * / < > | & ^`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn apply_binary(op: char, lhs: i64, rhs: i64) -> Result<i64, EvalError> {
    match op {
        '+' => Ok(lhs.wrapping_add(rhs)),
        '-' => Ok(lhs.wrapping_sub(rhs)),
        '*' => Ok(lhs.wrapping_mul(rhs)),
        '/' => {
            if rhs == 0 {
                Err(EvalError::DivisionByZero)
            } else {
                Ok(lhs.wrapping_div(rhs))
            }
        }
        '<' => Ok(lhs.wrapping_shl(rhs as u32)),
        '>' => Ok(lhs.wrapping_shr(rhs as u32)),
        '|' => Ok(lhs | rhs),
        '&' => Ok(lhs & rhs),
        '^' => Ok(lhs ^ rhs),
        _ => Err(EvalError::InvalidBinaryOperator(op)),
    }
}

/// Dispatches on the operand count.
///
/// # Errors
///
/// Propagates the errors of [`apply_unary`] and [`apply_binary`], and
/// returns [`EvalError::UnsupportedArity`] unless there are one or two
/// operands.
pub fn evaluate(op: char, operands: &[i64]) -> Result<i64, EvalError> {
    match *operands {
        [operand] => apply_unary(op, operand),
        [lhs, rhs] => apply_binary(op, lhs, rhs),
        _ => Err(EvalError::UnsupportedArity(operands.len())),
    }
}
