use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU32, Ordering};

/// The closed set of node categories produced by the VSL grammar.
///
/// Leaf kinds (`IdentifierData`, `NumberData`, `StringData`) carry a payload,
/// list kinds hold homogeneous sequences and are subject to flattening, and
/// the remaining kinds are structural.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NodeKind {
    Program,
    GlobalList,
    Global,
    StatementList,
    PrintList,
    ExpressionList,
    VariableList,
    ArgumentList,
    ParameterList,
    DeclarationList,
    Function,
    Statement,
    Block,
    AssignmentStatement,
    ReturnStatement,
    PrintStatement,
    NullStatement,
    IfStatement,
    WhileStatement,
    Expression,
    Relation,
    Declaration,
    PrintItem,
    IdentifierData,
    NumberData,
    StringData,
}

/// Data exclusively owned by a node.
///
/// Which variant a node carries depends on its kind: `Number` for
/// `NUMBER_DATA`, `Text` for `IDENTIFIER_DATA` and `STRING_DATA`, and
/// `Operator` for `EXPRESSION` and `RELATION`.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Payload {
    Number(i64),
    Text(String),
    Operator(char),
}

/// Handle into the symbol table, filled in by symbol resolution.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct SymbolRef(pub usize);

/// A syntax tree vertex. Each node exclusively owns its payload and children.
///
/// Equality is structural: `id` and `symbol` do not take part in it.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Node {
    #[serde(skip, default = "Node::next_id")]
    pub id: u32,
    pub kind: NodeKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<Payload>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
    #[serde(skip)]
    pub symbol: Option<SymbolRef>,
}

impl Node {
    /// Builds a node, taking ownership of `payload` and every child.
    ///
    /// The symbol slot starts out unset and the node receives a fresh id.
    #[must_use]
    pub fn new(kind: NodeKind, payload: Option<Payload>, mut children: Vec<Node>) -> Self {
        children.shrink_to_fit();
        Node {
            id: Self::next_id(),
            kind,
            payload,
            children,
            symbol: None,
        }
    }

    #[must_use]
    pub fn leaf(kind: NodeKind, payload: Option<Payload>) -> Self {
        Self::new(kind, payload, Vec::new())
    }

    #[must_use]
    pub fn number(value: i64) -> Self {
        Self::leaf(NodeKind::NumberData, Some(Payload::Number(value)))
    }

    #[must_use]
    pub fn identifier(name: impl Into<String>) -> Self {
        Self::leaf(NodeKind::IdentifierData, Some(Payload::Text(name.into())))
    }

    #[must_use]
    pub fn string(text: impl Into<String>) -> Self {
        Self::leaf(NodeKind::StringData, Some(Payload::Text(text.into())))
    }

    /// An `EXPRESSION` node with operator `op` over `operands`.
    #[must_use]
    pub fn expression(op: char, operands: Vec<Node>) -> Self {
        Self::new(NodeKind::Expression, Some(Payload::Operator(op)), operands)
    }

    #[must_use]
    pub fn relation(op: char, operands: Vec<Node>) -> Self {
        Self::new(NodeKind::Relation, Some(Payload::Operator(op)), operands)
    }

    /// Generate a unique node ID using an atomic counter.
    ///
    /// Starts from 1; 0 is never handed out.
    fn next_id() -> u32 {
        static COUNTER: AtomicU32 = AtomicU32::new(1);
        COUNTER.fetch_add(1, Ordering::Relaxed)
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.payload == other.payload && self.children == other.children
    }
}

impl Eq for Node {}
