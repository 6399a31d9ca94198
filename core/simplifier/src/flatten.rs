//! Splicing a nested list's children into its parent.

use vslc_ast::nodes::Node;

/// Replaces `node.children[index]` with that child's own children.
///
/// The absorbed child's children come first, followed by the remaining
/// original children in their original order. The absorbed node itself is
/// released; its children are relocated, not destroyed. The child count
/// becomes `old_count + absorbed_count - 1`.
///
/// # Panics
///
/// Panics if `index` is out of bounds.
pub fn flatten_child_at(node: &mut Node, index: usize) {
    assert!(
        index < node.children.len(),
        "flatten index {index} out of bounds for node {} with {} children",
        node.id,
        node.children.len()
    );
    let absorbed = node.children.remove(index);
    let mut spliced = absorbed.release();
    spliced.reserve_exact(node.children.len());
    spliced.append(&mut node.children);
    node.children = spliced;
}
