use crate::utils::{assert_simplified, node};
use vslc_ast::nodes::{Node, NodeKind};
use vslc_simplifier::{simplify, Simplifier};

#[test]
fn test_nested_statement_list_flattens_grandchildren_first() {
    let tree = node(
        NodeKind::StatementList,
        vec![
            node(
                NodeKind::StatementList,
                vec![Node::identifier("a"), Node::identifier("b")],
            ),
            Node::identifier("c"),
        ],
    );
    let expected = node(
        NodeKind::StatementList,
        vec![
            Node::identifier("a"),
            Node::identifier("b"),
            Node::identifier("c"),
        ],
    );
    assert_eq!(simplify(tree).unwrap(), expected);
}

#[test]
fn test_flatten_at_later_index_moves_grandchildren_to_front() {
    let tree = node(
        NodeKind::ExpressionList,
        vec![
            Node::identifier("a"),
            node(
                NodeKind::ExpressionList,
                vec![Node::identifier("b"), Node::identifier("c")],
            ),
        ],
    );
    let result = simplify(tree).unwrap();
    let names: Vec<_> = result.children.iter().filter_map(Node::as_text).collect();
    assert_eq!(names, ["b", "c", "a"]);
}

#[test]
fn test_left_recursive_list_chain() {
    // ((a b) c) d, the way a left-recursive list rule builds it
    let tree = node(
        NodeKind::VariableList,
        vec![
            node(
                NodeKind::VariableList,
                vec![
                    node(
                        NodeKind::VariableList,
                        vec![Node::identifier("a"), Node::identifier("b")],
                    ),
                    Node::identifier("c"),
                ],
            ),
            Node::identifier("d"),
        ],
    );
    let result = simplify(tree).unwrap();
    let names: Vec<_> = result.children.iter().filter_map(Node::as_text).collect();
    assert_eq!(names, ["a", "b", "c", "d"]);
    assert_simplified(&result);
}

#[test]
fn test_empty_nested_list_result_is_stable() {
    let tree = node(
        NodeKind::StatementList,
        vec![node(NodeKind::StatementList, vec![]), Node::identifier("x")],
    );
    let once = simplify(tree).unwrap();
    assert_simplified(&once);
    assert_eq!(once, Node::identifier("x"));
    assert_eq!(simplify(once.clone()).unwrap(), once);
}

#[test]
fn test_different_list_kinds_are_not_merged() {
    let tree = node(
        NodeKind::GlobalList,
        vec![
            node(
                NodeKind::DeclarationList,
                vec![Node::identifier("x"), Node::identifier("y")],
            ),
            Node::identifier("f"),
        ],
    );
    assert_eq!(simplify(tree.clone()).unwrap(), tree);
}

#[test]
fn test_print_statement_holds_items_directly() {
    let tree = node(
        NodeKind::PrintStatement,
        vec![node(
            NodeKind::PrintList,
            vec![Node::identifier("x"), Node::identifier("y")],
        )],
    );
    let expected = node(
        NodeKind::PrintStatement,
        vec![Node::identifier("x"), Node::identifier("y")],
    );
    assert_eq!(simplify(tree).unwrap(), expected);
}

#[test]
fn test_print_statement_with_single_item_keeps_wrapper() {
    let tree = node(
        NodeKind::PrintStatement,
        vec![node(NodeKind::PrintItem, vec![Node::string("hi")])],
    );
    let expected = node(NodeKind::PrintStatement, vec![Node::string("hi")]);
    assert_eq!(simplify(tree).unwrap(), expected);
}

#[test]
fn test_wrapper_elision_replaces_root() {
    let tree = node(
        NodeKind::Program,
        vec![node(
            NodeKind::GlobalList,
            vec![Node::identifier("f"), Node::identifier("g")],
        )],
    );
    let result = simplify(tree).unwrap();
    assert_eq!(result.kind, NodeKind::GlobalList);
    assert_eq!(result.child_count(), 2);
}

#[test]
fn test_chain_of_wrappers_collapses_to_leaf() {
    let tree = node(
        NodeKind::Statement,
        vec![node(
            NodeKind::Block,
            vec![node(NodeKind::Expression, vec![Node::identifier("z")])],
        )],
    );
    let mut simplifier = Simplifier::new();
    assert_eq!(simplifier.run(tree).unwrap(), Node::identifier("z"));
    assert_eq!(simplifier.stats().elided, 3);
}

#[test]
fn test_declaration_and_return_are_kept() {
    for kind in [
        NodeKind::Declaration,
        NodeKind::ReturnStatement,
        NodeKind::PrintStatement,
    ] {
        let tree = node(kind, vec![Node::identifier("v")]);
        assert_eq!(simplify(tree.clone()).unwrap(), tree, "{kind}");
    }
}

#[test]
fn test_nodes_with_payload_are_not_elided() {
    let tree = Node::expression('-', vec![Node::identifier("n")]);
    assert_eq!(simplify(tree.clone()).unwrap(), tree);
}

#[test]
fn test_folding_after_elision() {
    // -(1 + 2), with the parentheses as a payload-less EXPRESSION
    let tree = Node::expression(
        '-',
        vec![node(
            NodeKind::Expression,
            vec![Node::expression('+', vec![Node::number(1), Node::number(2)])],
        )],
    );
    assert_eq!(simplify(tree).unwrap(), Node::number(-3));
}

#[test]
fn test_relation_is_never_folded() {
    let tree = Node::relation('>', vec![Node::number(1), Node::number(2)]);
    assert_eq!(simplify(tree.clone()).unwrap(), tree);
}

#[test]
fn test_folded_node_has_unset_symbol() {
    let result = simplify(Node::expression('*', vec![Node::number(2), Node::number(2)])).unwrap();
    assert!(result.symbol.is_none());
    assert_eq!(result.as_number(), Some(4));
}
