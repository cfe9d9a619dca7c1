//! Expression pipeline: tokens, parse tree, step trace, and layout.
//!
//! The pipeline is strictly linear and every stage is a pure function of its
//! input:
//!
//!     text --tokenize--> tokens --parse--> (tree, steps)
//!                                             --compute_tree_layout--> layout
//!
//! Stages:
//!
//!     Tokenizer:
//!         Scans a source string into a positioned token stream, terminated by
//!         a single EOF token, or fails with a lexical error. See [lexer].
//!
//!     Parser:
//!         One-token-lookahead recursive descent over the fixed five-rule
//!         arithmetic grammar. Builds an arena-backed parse tree and an
//!         ordered trace of parsing actions, or fails with a syntax error
//!         while preserving the partial trace. See [parser].
//!
//!     TreeLayout:
//!         Derives 2-D node and edge coordinates plus bounding dimensions
//!         from a parse tree. Recomputed in full on every call; no layout
//!         state persists. See [layout].
//!
//! No stage performs I/O, suspends, or shares mutable state across calls.
//! Two back-to-back calls with the same input produce identical output.

pub mod layout;
pub mod lexer;
pub mod parser;
pub mod steps;
pub mod testing;
pub mod tokens;
pub mod tree;
pub mod treeviz;

pub use layout::{compute_tree_layout, Edge, LayoutNode, NodeRole, Point, TreeLayout};
pub use lexer::{tokenize, LexError};
pub use parser::{parse, ParseError, ParseOutcome};
pub use steps::Step;
pub use tokens::{Token, TokenKind};
pub use tree::{Node, NodeId, ParseTree, EPSILON};
pub use treeviz::to_treeviz_str;
