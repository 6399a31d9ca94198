use vslc_ast::nodes::Node;
use vslc_simplifier::{simplify, EvalError, SimplifyError};

fn fold(op: char, operands: &[i64]) -> Result<Node, SimplifyError> {
    simplify(Node::expression(
        op,
        operands.iter().copied().map(Node::number).collect(),
    ))
}

#[test]
fn test_fold_every_binary_operator() {
    let cases = [
        ('+', 2, 3, 5),
        ('-', 2, 3, -1),
        ('*', 6, 7, 42),
        ('/', 9, 2, 4),
        ('/', -9, 2, -4),
        ('<', 3, 2, 12),
        ('>', 12, 2, 3),
        ('|', 4, 1, 5),
        ('&', 6, 3, 2),
        ('^', 6, 3, 5),
    ];
    for (op, lhs, rhs, expected) in cases {
        assert_eq!(
            fold(op, &[lhs, rhs]).unwrap(),
            Node::number(expected),
            "{lhs} {op} {rhs}"
        );
    }
}

#[test]
fn test_fold_unary_operators() {
    assert_eq!(fold('-', &[7]).unwrap(), Node::number(-7));
    assert_eq!(fold('~', &[0]).unwrap(), Node::number(-1));
}

#[test]
fn test_fold_keeps_operand_order() {
    assert_eq!(fold('-', &[10, 4]).unwrap(), Node::number(6));
    assert_eq!(fold('/', &[4, 10]).unwrap(), Node::number(0));
}

#[test]
fn test_division_by_zero() {
    let err = fold('/', &[4, 0]).unwrap_err();
    assert!(matches!(
        err,
        SimplifyError::Fold {
            operator: '/',
            source: EvalError::DivisionByZero,
            ..
        }
    ));
    assert!(err.to_string().contains("division by zero"));
}

#[test]
fn test_invalid_operators() {
    assert!(matches!(
        fold('!', &[1]).unwrap_err(),
        SimplifyError::Fold {
            source: EvalError::InvalidUnaryOperator('!'),
            ..
        }
    ));
    assert!(matches!(
        fold('%', &[5, 2]).unwrap_err(),
        SimplifyError::Fold {
            source: EvalError::InvalidBinaryOperator('%'),
            ..
        }
    ));
}

#[test]
fn test_error_names_offending_node() {
    let inner = Node::expression('/', vec![Node::number(1), Node::number(0)]);
    let inner_id = inner.id;
    let tree = Node::expression('+', vec![Node::number(1), inner]);
    let err = simplify(tree).unwrap_err();
    assert_eq!(err.node(), inner_id);
}

#[test]
fn test_three_operand_expression_is_left_alone() {
    let tree = Node::expression(
        '+',
        vec![Node::number(1), Node::number(2), Node::number(3)],
    );
    assert_eq!(simplify(tree.clone()).unwrap(), tree);
}
