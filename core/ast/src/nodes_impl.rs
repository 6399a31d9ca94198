use crate::nodes::{Node, Payload};

impl Node {
    /// Releases this node's payload and child container, handing the
    /// children back to the caller.
    ///
    /// The children are not destroyed: the caller becomes their owner and
    /// must either relocate them into another node or drop them. Use
    /// [`Node::destroy_subtree`] to tear down a node together with
    /// everything below it.
    #[must_use = "the released children must be relocated or destroyed"]
    pub fn release(self) -> Vec<Node> {
        let Node {
            payload, children, ..
        } = self;
        drop(payload);
        children
    }

    /// Destroys every child subtree, then this node. Returns the number of
    /// nodes released.
    pub fn destroy_subtree(self) -> usize {
        self.release()
            .into_iter()
            .map(Node::destroy_subtree)
            .sum::<usize>()
            + 1
    }

    /// Number of nodes in the subtree rooted here, this node included.
    #[must_use]
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(Node::node_count).sum::<usize>()
    }

    #[must_use]
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// The integer carried by a `NUMBER_DATA` node.
    #[must_use]
    pub fn as_number(&self) -> Option<i64> {
        match self.payload {
            Some(Payload::Number(value)) => Some(value),
            _ => None,
        }
    }

    /// The text carried by an `IDENTIFIER_DATA` or `STRING_DATA` node.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match &self.payload {
            Some(Payload::Text(text)) => Some(text),
            _ => None,
        }
    }

    /// The operator carried by an `EXPRESSION` or `RELATION` node.
    #[must_use]
    pub fn operator(&self) -> Option<char> {
        match self.payload {
            Some(Payload::Operator(op)) => Some(op),
            _ => None,
        }
    }
}

/// Releases a single node without its children. No-op on `None`.
///
/// Returns the orphaned children; see [`Node::release`].
#[must_use = "the released children must be relocated or destroyed"]
pub fn destroy_one(node: Option<Node>) -> Vec<Node> {
    node.map(Node::release).unwrap_or_default()
}

/// Recursively destroys a subtree. No-op on `None`.
///
/// Returns the number of nodes released.
pub fn destroy_subtree(node: Option<Node>) -> usize {
    node.map_or(0, Node::destroy_subtree)
}
