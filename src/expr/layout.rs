//! Tree-layout geometry
//!
//! Derives 2-D coordinates for rendering a parse tree. Two passes:
//!
//! 1. Pre-order depth assignment: each node's depth is its parent's depth
//!    plus one, root at 0.
//! 2. Post-order x assignment: leaves take strictly increasing x positions
//!    at a fixed pitch; an internal node sits at the midpoint of its first
//!    and last child.
//!
//! The midpoint rule is deliberately first/last-child, not the mean of all
//! children. The grammar only produces nodes with 1-3 children, where the
//! two rules are visually near identical, and downstream geometry depends on
//! this exact rule.
//!
//! Everything here is derived data, recomputed in full on every call.

use crate::expr::tree::{NodeId, ParseTree, EPSILON};
use serde::Serialize;

pub const NODE_WIDTH: f64 = 44.0;
/// Half the node height; also the edge anchor offset.
pub const NODE_RADIUS: f64 = 18.0;
pub const SIBLING_GAP: f64 = 16.0;
pub const LEVEL_HEIGHT: f64 = 72.0;
pub const TOP_PADDING: f64 = 20.0;
pub const MARGIN: f64 = 24.0;

const OPERATOR_GLYPHS: [&str; 6] = ["+", "-", "*", "/", "(", ")"];
const NONTERMINALS: [&str; 5] = ["E", "E'", "T", "T'", "F"];

/// Rendering classification of a node, by priority:
/// epsilon > operator > terminal > nonterminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeRole {
    Epsilon,
    Operator,
    Terminal,
    NonTerminal,
}

impl NodeRole {
    pub fn is_epsilon(self) -> bool {
        self == NodeRole::Epsilon
    }

    pub fn is_operator(self) -> bool {
        self == NodeRole::Operator
    }

    pub fn is_terminal(self) -> bool {
        self == NodeRole::Terminal
    }

    pub fn is_nonterminal(self) -> bool {
        self == NodeRole::NonTerminal
    }
}

fn classify(label: &str, is_leaf: bool) -> NodeRole {
    if label == EPSILON {
        NodeRole::Epsilon
    } else if OPERATOR_GLYPHS.contains(&label) {
        NodeRole::Operator
    } else if is_leaf && !NONTERMINALS.contains(&label) {
        NodeRole::Terminal
    } else {
        NodeRole::NonTerminal
    }
}

/// A positioned node ready for rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutNode {
    pub id: NodeId,
    pub label: String,
    pub x: f64,
    pub y: f64,
    pub depth: usize,
    pub role: NodeRole,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// A parent-to-child edge, anchored at node boundaries (center offset by
/// [NODE_RADIUS] along the vertical axis), not centers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Edge {
    pub from_id: NodeId,
    pub to_id: NodeId,
    pub from: Point,
    pub to: Point,
}

/// Full layout of a tree: positioned nodes, boundary-anchored edges, and
/// margin-padded bounding dimensions.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct TreeLayout {
    pub nodes: Vec<LayoutNode>,
    pub edges: Vec<Edge>,
    pub width: f64,
    pub height: f64,
}

/// Compute layout geometry for a parse tree.
///
/// Returns empty structures for `None`. Nodes appear in arena (id) order;
/// edges in parent-major, child-order within each parent.
pub fn compute_tree_layout(tree: Option<&ParseTree>) -> TreeLayout {
    let Some(tree) = tree else {
        return TreeLayout::default();
    };

    let mut depths = vec![0usize; tree.len()];
    assign_depths(tree, tree.root_id(), 0, &mut depths);

    let mut xs = vec![0f64; tree.len()];
    let mut next_leaf_x = MARGIN + NODE_WIDTH / 2.0;
    assign_x(tree, tree.root_id(), &mut xs, &mut next_leaf_x);

    let y_of = |id: NodeId| depths[id] as f64 * LEVEL_HEIGHT + NODE_RADIUS + TOP_PADDING;

    let nodes: Vec<LayoutNode> = tree
        .nodes()
        .iter()
        .map(|node| LayoutNode {
            id: node.id,
            label: node.label.clone(),
            x: xs[node.id],
            y: y_of(node.id),
            depth: depths[node.id],
            role: classify(&node.label, node.is_leaf()),
        })
        .collect();

    let mut edges = Vec::new();
    for node in tree.nodes() {
        for &child in &node.children {
            edges.push(Edge {
                from_id: node.id,
                to_id: child,
                from: Point {
                    x: xs[node.id],
                    y: y_of(node.id) + NODE_RADIUS,
                },
                to: Point {
                    x: xs[child],
                    y: y_of(child) - NODE_RADIUS,
                },
            });
        }
    }

    let max_x = xs.iter().cloned().fold(0f64, f64::max);
    let max_y = nodes.iter().map(|n| n.y).fold(0f64, f64::max);

    TreeLayout {
        nodes,
        edges,
        width: max_x + NODE_WIDTH / 2.0 + MARGIN,
        height: max_y + NODE_RADIUS + MARGIN,
    }
}

fn assign_depths(tree: &ParseTree, id: NodeId, depth: usize, depths: &mut [usize]) {
    depths[id] = depth;
    for &child in &tree.get(id).children {
        assign_depths(tree, child, depth + 1, depths);
    }
}

fn assign_x(tree: &ParseTree, id: NodeId, xs: &mut [f64], next_leaf_x: &mut f64) {
    let node = tree.get(id);
    if node.children.is_empty() {
        xs[id] = *next_leaf_x;
        *next_leaf_x += NODE_WIDTH + SIBLING_GAP;
        return;
    }
    for &child in &node.children {
        assign_x(tree, child, xs, next_leaf_x);
    }
    let first = xs[node.children[0]];
    let last = xs[node.children[node.children.len() - 1]];
    xs[id] = (first + last) / 2.0;
}
