//! Step trace records
//!
//! A step is one logged parsing action: entering or exiting a nonterminal,
//! matching a terminal, taking an epsilon alternative, accepting the input,
//! or failing. The parser appends steps in emission order; `index` equals a
//! step's position in the trace.

use crate::expr::tokens::TokenKind;
use serde::Serialize;

/// One logged parsing action.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Step {
    /// The grammar production being applied, e.g. `E' → + T E'`.
    pub rule: String,
    /// Human-readable action description, e.g. `Match number '3'`.
    pub action: String,
    /// Value of the lookahead token at the time of logging.
    pub token: String,
    /// Kind of the lookahead token at the time of logging.
    pub token_kind: TokenKind,
    /// Recursion depth at the time of logging.
    pub depth: usize,
    /// Position of this step in the trace.
    pub index: usize,
}
