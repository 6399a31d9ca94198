//! Debug dump of a syntax tree.
//!
//! Each node is written on its own line, indented by `indent` spaces per
//! level of depth, followed by its kind name and, for data-bearing kinds,
//! the payload in parentheses:
//!
//! ```text
//!  STATEMENT_LIST
//!   ASSIGNMENT_STATEMENT
//!    IDENTIFIER_DATA(x)
//!    NUMBER_DATA(5)
//! ```
//!
//! The first column is always a space, so the root line starts with one
//! space even at depth zero. An absent node prints as `(nil)`.

use std::fmt::{self, Display, Formatter};
use std::io;

use crate::nodes::{Node, NodeKind};

pub const NULL_MARKER: &str = "(nil)";

/// Writes the tree rooted at `root` to `out`.
///
/// # Errors
///
/// Returns any error produced by the underlying writer.
pub fn print_tree<W: io::Write>(
    out: &mut W,
    root: Option<&Node>,
    indent: usize,
) -> io::Result<()> {
    out.write_all(render_tree(root, indent).as_bytes())
}

/// Renders the tree rooted at `root` into a string.
#[must_use]
pub fn render_tree(root: Option<&Node>, indent: usize) -> String {
    let mut buffer = String::new();
    render_into(&mut buffer, root, indent, 0);
    buffer
}

fn render_into(buffer: &mut String, node: Option<&Node>, indent: usize, depth: usize) {
    let width = (indent * depth).max(1);
    buffer.extend(std::iter::repeat_n(' ', width));
    let Some(node) = node else {
        buffer.push_str(NULL_MARKER);
        buffer.push('\n');
        return;
    };
    buffer.push_str(node.kind.name());
    if let Some(label) = payload_label(node) {
        buffer.push('(');
        buffer.push_str(&label);
        buffer.push(')');
    }
    buffer.push('\n');
    for child in &node.children {
        render_into(buffer, Some(child), indent, depth + 1);
    }
}

fn payload_label(node: &Node) -> Option<String> {
    let labelled = node.kind.is_leaf_data()
        || matches!(node.kind, NodeKind::Relation | NodeKind::Expression);
    if labelled {
        node.payload.as_ref().map(ToString::to_string)
    } else {
        None
    }
}

impl Display for Node {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&render_tree(Some(self), 1))
    }
}
