//! The post-order simplification driver.
//!
//! Children are simplified first. Then, at the current node, four rules run
//! in a fixed order:
//!
//! 1. **Wrapper elision**: a node with no payload and exactly one child is
//!    replaced by that child, unless it is a `DECLARATION`, `PRINT_STATEMENT`
//!    or `RETURN_STATEMENT`.
//! 2. **List flattening**: every child of a list node that has the same list
//!    kind is spliced into it (see [`flatten_child_at`]).
//! 3. **Print-list splice**: a `PRINT_STATEMENT` whose first child is a
//!    `PRINT_LIST` takes over that list's children.
//! 4. **Constant folding**: an `EXPRESSION` whose one or two children are all
//!    `NUMBER_DATA` becomes a single `NUMBER_DATA` holding the result.
//!
//! Each rule consumes the node it rewrites and returns its replacement, so
//! every child is either relocated into exactly one new owner or destroyed.

use rustc_hash::FxHashMap;
use tracing::{debug, trace};
use vslc_ast::nodes::{Node, NodeKind};

use crate::errors::SimplifyError;
use crate::evaluator::evaluate;
use crate::flatten::flatten_child_at;

/// Counters describing what a simplification run rewrote.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SimplifyStats {
    pub elided: usize,
    pub flattened: usize,
    pub folded: usize,
    /// Elided wrappers, grouped by the kind of the removed node.
    pub elided_by_kind: FxHashMap<NodeKind, usize>,
}

impl SimplifyStats {
    /// `true` when the run changed nothing.
    #[must_use]
    pub fn is_unchanged(&self) -> bool {
        self.elided == 0 && self.flattened == 0 && self.folded == 0
    }
}

/// Rewrites a raw syntax tree into its simplified form.
#[derive(Debug, Default)]
pub struct Simplifier {
    stats: SimplifyStats,
}

impl Simplifier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Simplifies the tree rooted at `root` and returns the new root.
    ///
    /// # Errors
    ///
    /// Returns a [`SimplifyError`] if a constant expression cannot be
    /// evaluated. The partially rewritten tree is dropped.
    pub fn run(&mut self, root: Node) -> Result<Node, SimplifyError> {
        self.simplify_node(root)
    }

    #[must_use]
    pub fn stats(&self) -> &SimplifyStats {
        &self.stats
    }

    #[must_use]
    pub fn into_stats(self) -> SimplifyStats {
        self.stats
    }

    fn simplify_node(&mut self, mut node: Node) -> Result<Node, SimplifyError> {
        trace!(node = node.id, kind = %node.kind, "simplifying");
        node.children = std::mem::take(&mut node.children)
            .into_iter()
            .map(|child| self.simplify_node(child))
            .collect::<Result<Vec<_>, _>>()?;

        let mut node = self.elide_wrapper(node);
        if self.flatten_nested_lists(&mut node) {
            // Absorbing an empty nested list can leave a single child behind.
            node = self.elide_wrapper(node);
        }
        self.splice_print_list(&mut node);
        self.fold_constants(node)
    }

    fn elide_wrapper(&mut self, mut node: Node) -> Node {
        if node.payload.is_some() || node.children.len() != 1 || node.kind.keeps_single_child() {
            return node;
        }
        let Some(child) = node.children.pop() else {
            return node;
        };
        debug!(
            node = node.id,
            kind = %node.kind,
            child = child.id,
            "elided syntactic wrapper"
        );
        self.stats.elided += 1;
        *self.stats.elided_by_kind.entry(node.kind).or_default() += 1;
        let orphans = node.release();
        debug_assert!(orphans.is_empty());
        child
    }

    /// Returns `true` if any child was flattened.
    fn flatten_nested_lists(&mut self, node: &mut Node) -> bool {
        if !node.kind.is_list() {
            return false;
        }
        let mut flattened = false;
        let mut index = 0;
        while index < node.children.len() {
            // The slot is re-checked after a splice: an empty nested list
            // shifts its next sibling into the same position.
            if node.children[index].kind == node.kind {
                debug!(
                    node = node.id,
                    kind = %node.kind,
                    absorbed = node.children[index].id,
                    index,
                    "flattened nested list"
                );
                flatten_child_at(node, index);
                self.stats.flattened += 1;
                flattened = true;
            } else {
                index += 1;
            }
        }
        flattened
    }

    fn splice_print_list(&mut self, node: &mut Node) {
        if node.kind != NodeKind::PrintStatement {
            return;
        }
        if node
            .children
            .first()
            .is_some_and(|first| first.kind == NodeKind::PrintList)
        {
            debug!(node = node.id, "spliced print list into print statement");
            flatten_child_at(node, 0);
            self.stats.flattened += 1;
        }
    }

    fn fold_constants(&mut self, node: Node) -> Result<Node, SimplifyError> {
        if node.kind != NodeKind::Expression
            || !matches!(node.children.len(), 1 | 2)
            || node
                .children
                .iter()
                .any(|child| child.kind != NodeKind::NumberData)
        {
            return Ok(node);
        }

        let value = evaluate_constant(&node)?;
        let id = node.id;
        let released = node.destroy_subtree();
        let folded = Node::number(value);
        debug!(node = id, folded = folded.id, value, released, "folded constant expression");
        self.stats.folded += 1;
        Ok(folded)
    }
}

fn evaluate_constant(node: &Node) -> Result<i64, SimplifyError> {
    let operator = node.operator().ok_or(SimplifyError::MalformedNode {
        node: node.id,
        kind: node.kind,
        reason: "expression has no operator",
    })?;
    let operands = node
        .children
        .iter()
        .map(|child| {
            child.as_number().ok_or(SimplifyError::MalformedNode {
                node: child.id,
                kind: child.kind,
                reason: "number literal has no integer value",
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    evaluate(operator, &operands).map_err(|source| SimplifyError::Fold {
        node: node.id,
        operator,
        source,
    })
}
