//! Arena-backed parse tree
//!
//! A parse tree owns all of its nodes in a single growable vector; children
//! are index relationships into that arena rather than free-floating
//! references. Node ids are assigned in creation order starting at 0 for
//! each parse call, so two parses of the same input produce trees whose ids
//! line up position by position.

use serde::Serialize;

/// Label of epsilon leaves.
pub const EPSILON: &str = "ε";

/// Index of a node within its tree's arena.
pub type NodeId = usize;

/// A single parse tree node.
///
/// The label is a nonterminal name, a terminal value, an operator glyph, or
/// the epsilon marker. A node with no children is a leaf.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Node {
    pub id: NodeId,
    pub label: String,
    pub children: Vec<NodeId>,
}

impl Node {
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    pub fn is_epsilon(&self) -> bool {
        self.label == EPSILON
    }
}

/// A parse tree: the node arena plus the root id.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParseTree {
    nodes: Vec<Node>,
    root: NodeId,
}

impl ParseTree {
    pub(crate) fn new(nodes: Vec<Node>, root: NodeId) -> Self {
        debug_assert!(root < nodes.len());
        ParseTree { nodes, root }
    }

    pub fn root_id(&self) -> NodeId {
        self.root
    }

    pub fn root(&self) -> &Node {
        &self.nodes[self.root]
    }

    pub fn get(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Structural equality: same labels and same child-count shape at every
    /// position, ignoring ids.
    pub fn same_shape(&self, other: &ParseTree) -> bool {
        fn go(a: &ParseTree, ai: NodeId, b: &ParseTree, bi: NodeId) -> bool {
            let (na, nb) = (a.get(ai), b.get(bi));
            na.label == nb.label
                && na.children.len() == nb.children.len()
                && na
                    .children
                    .iter()
                    .zip(&nb.children)
                    .all(|(&ca, &cb)| go(a, ca, b, cb))
        }
        go(self, self.root, other, other.root)
    }

    /// Compact one-line shape string, e.g. `E(T(F(2) T'(ε)) E'(ε))`.
    ///
    /// Used by tests to assert the full tree shape in one comparison.
    pub fn shape(&self) -> String {
        fn go(tree: &ParseTree, id: NodeId, out: &mut String) {
            let node = tree.get(id);
            out.push_str(&node.label);
            if !node.children.is_empty() {
                out.push('(');
                for (i, &child) in node.children.iter().enumerate() {
                    if i > 0 {
                        out.push(' ');
                    }
                    go(tree, child, out);
                }
                out.push(')');
            }
        }
        let mut out = String::new();
        go(self, self.root, &mut out);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(id: NodeId, label: &str) -> Node {
        Node {
            id,
            label: label.to_string(),
            children: vec![],
        }
    }

    fn tiny_tree() -> ParseTree {
        // F wrapping a number leaf
        let nodes = vec![
            Node {
                id: 0,
                label: "F".to_string(),
                children: vec![1],
            },
            leaf(1, "2"),
        ];
        ParseTree::new(nodes, 0)
    }

    #[test]
    fn test_leaf_and_epsilon_predicates() {
        assert!(leaf(0, "2").is_leaf());
        assert!(leaf(0, EPSILON).is_epsilon());
        assert!(!leaf(0, "2").is_epsilon());
        assert!(!tiny_tree().root().is_leaf());
    }

    #[test]
    fn test_shape_string() {
        assert_eq!(tiny_tree().shape(), "F(2)");
    }

    #[test]
    fn test_same_shape_ignores_ids() {
        let a = tiny_tree();
        // Same shape but ids shifted by an extra unreferenced node ordering
        let b = ParseTree::new(
            vec![
                leaf(0, "2"),
                Node {
                    id: 1,
                    label: "F".to_string(),
                    children: vec![0],
                },
            ],
            1,
        );
        assert!(a.same_shape(&b));
    }

    #[test]
    fn test_same_shape_detects_label_difference() {
        let a = tiny_tree();
        let b = ParseTree::new(
            vec![
                Node {
                    id: 0,
                    label: "F".to_string(),
                    children: vec![1],
                },
                leaf(1, "3"),
            ],
            0,
        );
        assert!(!a.same_shape(&b));
    }
}
