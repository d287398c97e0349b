//! Plain-text rendering of an outline forest.
//!
//! One node per line, indented two spaces per depth, using each node's
//! tooltip so line numbers stay visible:
//!
//! ```text
//! class Foo: 1
//!   function bar: 2
//!     if x: 3
//! ```

use crate::node::OutlineNode;
use std::fmt::Write;

/// Render a forest as an indented text tree.
pub fn to_tree_string(forest: &[OutlineNode]) -> String {
    let mut out = String::new();
    for node in forest {
        write_node(&mut out, node, 0);
    }
    out
}

fn write_node(out: &mut String, node: &OutlineNode, depth: usize) {
    let _ = writeln!(out, "{}{}", "  ".repeat(depth), node.tooltip());
    for child in node.children().unwrap_or_default() {
        write_node(out, child, depth + 1);
    }
}

/// Render an ancestor path as `outer > ... > inner`.
pub fn to_breadcrumb(path: &[&OutlineNode]) -> String {
    path.iter()
        .map(|node| node.tooltip())
        .collect::<Vec<_>>()
        .join(" > ")
}
