//! Treeviz formatter for parse trees
//!
//! One line per node, with connector glyphs encoding the structure:
//!
//!     E
//!     ├─ T
//!     │  ├─ F
//!     │  │  └─ 2
//!     │  └─ T'
//!     │     └─ ε
//!     └─ E'
//!        └─ ε
//!
//! This is a plain data-to-text transform for terminals and test output; it
//! carries no styling or animation concerns.

use crate::expr::tree::{NodeId, ParseTree};

/// Render a parse tree as connector-drawn text, one node per line.
pub fn to_treeviz_str(tree: &ParseTree) -> String {
    let mut out = String::new();
    out.push_str(&tree.root().label);
    out.push('\n');
    let children = &tree.root().children;
    for (i, &child) in children.iter().enumerate() {
        append_node(tree, child, "", i == children.len() - 1, &mut out);
    }
    out
}

fn append_node(tree: &ParseTree, id: NodeId, prefix: &str, is_last: bool, out: &mut String) {
    let connector = if is_last { "└─" } else { "├─" };
    let node = tree.get(id);
    out.push_str(&format!("{}{} {}\n", prefix, connector, node.label));

    let child_prefix = format!("{}{}", prefix, if is_last { "   " } else { "│  " });
    for (i, &child) in node.children.iter().enumerate() {
        append_node(
            tree,
            child,
            &child_prefix,
            i == node.children.len() - 1,
            out,
        );
    }
}
