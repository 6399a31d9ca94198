//! Implementation methods for the node kind and payload enums.
//!
//! This module provides the display names used by the tree printer and the
//! kind classifications the simplifier keys its rewriting rules on.

use std::fmt::{self, Display, Formatter};

use crate::nodes::{NodeKind, Payload};

impl NodeKind {
    /// Every kind, in declaration order.
    pub const ALL: [NodeKind; 26] = [
        NodeKind::Program,
        NodeKind::GlobalList,
        NodeKind::Global,
        NodeKind::StatementList,
        NodeKind::PrintList,
        NodeKind::ExpressionList,
        NodeKind::VariableList,
        NodeKind::ArgumentList,
        NodeKind::ParameterList,
        NodeKind::DeclarationList,
        NodeKind::Function,
        NodeKind::Statement,
        NodeKind::Block,
        NodeKind::AssignmentStatement,
        NodeKind::ReturnStatement,
        NodeKind::PrintStatement,
        NodeKind::NullStatement,
        NodeKind::IfStatement,
        NodeKind::WhileStatement,
        NodeKind::Expression,
        NodeKind::Relation,
        NodeKind::Declaration,
        NodeKind::PrintItem,
        NodeKind::IdentifierData,
        NodeKind::NumberData,
        NodeKind::StringData,
    ];

    /// The upper-case tag printed in tree dumps, e.g. `STATEMENT_LIST`.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            NodeKind::Program => "PROGRAM",
            NodeKind::GlobalList => "GLOBAL_LIST",
            NodeKind::Global => "GLOBAL",
            NodeKind::StatementList => "STATEMENT_LIST",
            NodeKind::PrintList => "PRINT_LIST",
            NodeKind::ExpressionList => "EXPRESSION_LIST",
            NodeKind::VariableList => "VARIABLE_LIST",
            NodeKind::ArgumentList => "ARGUMENT_LIST",
            NodeKind::ParameterList => "PARAMETER_LIST",
            NodeKind::DeclarationList => "DECLARATION_LIST",
            NodeKind::Function => "FUNCTION",
            NodeKind::Statement => "STATEMENT",
            NodeKind::Block => "BLOCK",
            NodeKind::AssignmentStatement => "ASSIGNMENT_STATEMENT",
            NodeKind::ReturnStatement => "RETURN_STATEMENT",
            NodeKind::PrintStatement => "PRINT_STATEMENT",
            NodeKind::NullStatement => "NULL_STATEMENT",
            NodeKind::IfStatement => "IF_STATEMENT",
            NodeKind::WhileStatement => "WHILE_STATEMENT",
            NodeKind::Expression => "EXPRESSION",
            NodeKind::Relation => "RELATION",
            NodeKind::Declaration => "DECLARATION",
            NodeKind::PrintItem => "PRINT_ITEM",
            NodeKind::IdentifierData => "IDENTIFIER_DATA",
            NodeKind::NumberData => "NUMBER_DATA",
            NodeKind::StringData => "STRING_DATA",
        }
    }

    /// Returns `true` for kinds that represent a homogeneous sequence.
    ///
    /// A list node whose child has the same list kind gets that child
    /// flattened into it during simplification.
    #[must_use]
    pub fn is_list(self) -> bool {
        matches!(
            self,
            NodeKind::GlobalList
                | NodeKind::StatementList
                | NodeKind::PrintList
                | NodeKind::ExpressionList
                | NodeKind::VariableList
                | NodeKind::ArgumentList
                | NodeKind::ParameterList
                | NodeKind::DeclarationList
        )
    }

    /// Returns `true` for kinds that stay in the tree even when they wrap a
    /// single child and carry no payload.
    #[must_use]
    pub fn keeps_single_child(self) -> bool {
        matches!(
            self,
            NodeKind::Declaration | NodeKind::PrintStatement | NodeKind::ReturnStatement
        )
    }

    /// Returns `true` for the leaf kinds that always carry a payload.
    #[must_use]
    pub fn is_leaf_data(self) -> bool {
        matches!(
            self,
            NodeKind::IdentifierData | NodeKind::NumberData | NodeKind::StringData
        )
    }
}

impl Display for NodeKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Display for Payload {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Payload::Number(value) => write!(f, "{value}"),
            Payload::Text(text) => f.write_str(text),
            Payload::Operator(op) => write!(f, "{op}"),
        }
    }
}
