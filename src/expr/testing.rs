//! Testing utilities for expression pipeline assertions
//!
//! Parser tests must assert on tree shape, not on node counts: a count says
//! nothing about which production built which subtree. The helpers here make
//! shape assertions one-liners.
//!
//! - [parsed] tokenizes and parses a source string that is known to be a
//!   valid expression, panicking (with the stage error) otherwise.
//! - [assert_shape] compares a tree against the compact shape notation from
//!   [ParseTree::shape], e.g. `E(T(F(2) T'(ε)) E'(ε))`.

use crate::expr::lexer::tokenize;
use crate::expr::parser::{parse, ParseOutcome};
use crate::expr::tokens::Token;
use crate::expr::tree::ParseTree;

/// Tokenize a known-valid source string, panicking on lexical errors.
pub fn tokens_of(source: &str) -> Vec<Token> {
    match tokenize(source) {
        Ok(tokens) => tokens,
        Err(err) => panic!("test source {:?} failed to tokenize: {}", source, err),
    }
}

/// Run the full tokenize + parse pipeline on a source string.
pub fn outcome_of(source: &str) -> ParseOutcome {
    parse(&tokens_of(source))
}

/// Parse a known-valid source string into its tree, panicking on any error.
pub fn parsed(source: &str) -> ParseTree {
    let outcome = outcome_of(source);
    match (outcome.tree, outcome.error) {
        (Some(tree), None) => tree,
        (_, Some(err)) => panic!("test source {:?} failed to parse: {}", source, err),
        (None, None) => unreachable!("parse returned neither tree nor error"),
    }
}

/// Assert that a tree has exactly the given compact shape.
pub fn assert_shape(tree: &ParseTree, expected: &str) {
    let shape = tree.shape();
    assert_eq!(
        shape, expected,
        "tree shape mismatch\n  actual:   {}\n  expected: {}",
        shape, expected
    );
}
