//! Recursive-descent parser for arithmetic expressions
//!
//! Implements strict LL(1) recursive descent over the grammar:
//!
//!     E  → T E'
//!     E' → + T E' | - T E' | ε
//!     T  → F T'
//!     T' → * F T' | / F T' | ε
//!     F  → ( E ) | id | number
//!
//! One method per nonterminal. At each choice point the current lookahead
//! token selects the production whose leading terminal matches; if none
//! matches and an epsilon alternative exists, epsilon is taken; otherwise the
//! parse aborts with a syntax error naming the expected symbols and the
//! token found.
//!
//! All scratch state (cursor, node arena, step log, depth counter) lives in
//! a [ParseContext] created fresh per call, so calls are independent and
//! node ids restart at 0 every time. Errors short-circuit through the call
//! chain as `Result` values; the step trace accumulated up to the failure
//! point is preserved in the returned [ParseOutcome].

use crate::expr::steps::Step;
use crate::expr::tokens::{Token, TokenKind};
use crate::expr::tree::{Node, NodeId, ParseTree, EPSILON};
use serde::Serialize;
use std::fmt;

const RULE_E: &str = "E → T E'";
const RULE_E_TAIL_PLUS: &str = "E' → + T E'";
const RULE_E_TAIL_MINUS: &str = "E' → - T E'";
const RULE_E_TAIL_EPSILON: &str = "E' → ε";
const RULE_T: &str = "T → F T'";
const RULE_T_TAIL_STAR: &str = "T' → * F T'";
const RULE_T_TAIL_SLASH: &str = "T' → / F T'";
const RULE_T_TAIL_EPSILON: &str = "T' → ε";
const RULE_F_PAREN: &str = "F → ( E )";
const RULE_F_ID: &str = "F → id";
const RULE_F_NUMBER: &str = "F → number";
const RULE_ACCEPT: &str = "Accept";
const RULE_ERROR: &str = "Error";

/// Errors detected during parsing.
///
/// The position is the offending token's start offset; `None` when no
/// position is known.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ParseError {
    /// The lookahead matches no production alternative.
    UnexpectedToken {
        expected: String,
        found: String,
        pos: Option<usize>,
    },
    /// A full expression was parsed but input remains.
    TrailingInput { found: String, pos: Option<usize> },
}

impl ParseError {
    pub fn pos(&self) -> Option<usize> {
        match self {
            ParseError::UnexpectedToken { pos, .. } => *pos,
            ParseError::TrailingInput { pos, .. } => *pos,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::UnexpectedToken {
                expected,
                found,
                pos,
            } => {
                write!(f, "Expected {} but found {}", expected, found)?;
                if let Some(p) = pos {
                    write!(f, " at position {}", p)?;
                }
                Ok(())
            }
            ParseError::TrailingInput { found, pos } => {
                write!(f, "Expected end of expression but found {}", found)?;
                if let Some(p) = pos {
                    write!(f, " at position {}", p)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// Result of one `parse` call.
///
/// On failure `tree` is `None` and `steps` still holds the trace up to and
/// including the failure step, to show how far parsing got.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParseOutcome {
    pub tree: Option<ParseTree>,
    pub steps: Vec<Step>,
    pub error: Option<ParseError>,
}

impl ParseOutcome {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// Parse a token stream into a parse tree and step trace.
///
/// The stream is expected to end with the EOF token the lexer appends; a
/// stream that runs out early is treated as ending at the last token's end
/// offset. After the top-level expression, the lookahead must be EOF:
/// trailing tokens are a hard error, not ignored.
pub fn parse(tokens: &[Token]) -> ParseOutcome {
    let mut ctx = ParseContext::new(tokens);
    match ctx.run() {
        Ok(root) => ParseOutcome {
            tree: Some(ParseTree::new(ctx.nodes, root)),
            steps: ctx.steps,
            error: None,
        },
        Err(error) => {
            ctx.log(RULE_ERROR, &error.to_string());
            ParseOutcome {
                tree: None,
                steps: ctx.steps,
                error: Some(error),
            }
        }
    }
}

/// Per-call scratch state threaded through the descent.
struct ParseContext<'a> {
    tokens: &'a [Token],
    cursor: usize,
    /// Lookahead stand-in when the slice has no EOF terminator.
    eof: Token,
    nodes: Vec<Node>,
    steps: Vec<Step>,
    depth: usize,
}

impl<'a> ParseContext<'a> {
    fn new(tokens: &'a [Token]) -> Self {
        let eof = Token::eof(tokens.last().map(|t| t.end).unwrap_or(0));
        ParseContext {
            tokens,
            cursor: 0,
            eof,
            nodes: Vec::new(),
            steps: Vec::new(),
            depth: 0,
        }
    }

    fn current(&self) -> &Token {
        self.tokens.get(self.cursor).unwrap_or(&self.eof)
    }

    fn log(&mut self, rule: &str, action: &str) {
        let lookahead = self.current();
        let step = Step {
            rule: rule.to_string(),
            action: action.to_string(),
            token: lookahead.text.clone(),
            token_kind: lookahead.kind,
            depth: self.depth,
            index: self.steps.len(),
        };
        self.steps.push(step);
    }

    fn node(&mut self, label: &str) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(Node {
            id,
            label: label.to_string(),
            children: Vec::new(),
        });
        id
    }

    fn attach(&mut self, parent: NodeId, child: NodeId) {
        self.nodes[parent].children.push(child);
    }

    /// Consume the lookahead if it has the given kind; leaf node for it.
    fn consume(&mut self, kind: TokenKind, rule: &str) -> Result<NodeId, ParseError> {
        let tok = self.current().clone();
        if tok.kind != kind {
            return Err(self.mismatch(kind.describe(), &tok));
        }
        let action = match tok.kind {
            TokenKind::Number => format!("Match number '{}'", tok.text),
            TokenKind::Ident => format!("Match identifier '{}'", tok.text),
            _ => format!("Match '{}'", tok.text),
        };
        self.log(rule, &action);
        self.cursor += 1;
        Ok(self.node(&tok.text))
    }

    fn mismatch(&self, expected: &str, found: &Token) -> ParseError {
        ParseError::UnexpectedToken {
            expected: expected.to_string(),
            found: found.describe(),
            pos: Some(found.start),
        }
    }

    fn run(&mut self) -> Result<NodeId, ParseError> {
        let root = self.expression()?;
        let tok = self.current().clone();
        if tok.kind != TokenKind::Eof {
            return Err(ParseError::TrailingInput {
                found: tok.describe(),
                pos: Some(tok.start),
            });
        }
        self.log(RULE_ACCEPT, "Input fully consumed: expression parsed successfully");
        Ok(root)
    }

    /// E → T E'
    fn expression(&mut self) -> Result<NodeId, ParseError> {
        self.depth += 1;
        self.log(RULE_E, "Enter E");
        let node = self.node("E");
        let term = self.term()?;
        self.attach(node, term);
        let tail = self.expression_tail()?;
        self.attach(node, tail);
        self.log(RULE_E, "Exit E");
        self.depth -= 1;
        Ok(node)
    }

    /// E' → + T E' | - T E' | ε
    fn expression_tail(&mut self) -> Result<NodeId, ParseError> {
        self.depth += 1;
        let node = self.node("E'");
        match self.current().kind {
            TokenKind::Plus => {
                let op = self.consume(TokenKind::Plus, RULE_E_TAIL_PLUS)?;
                self.attach(node, op);
                let term = self.term()?;
                self.attach(node, term);
                let tail = self.expression_tail()?;
                self.attach(node, tail);
            }
            TokenKind::Minus => {
                let op = self.consume(TokenKind::Minus, RULE_E_TAIL_MINUS)?;
                self.attach(node, op);
                let term = self.term()?;
                self.attach(node, term);
                let tail = self.expression_tail()?;
                self.attach(node, tail);
            }
            _ => {
                self.log(RULE_E_TAIL_EPSILON, "Take ε");
                let eps = self.node(EPSILON);
                self.attach(node, eps);
            }
        }
        self.depth -= 1;
        Ok(node)
    }

    /// T → F T'
    fn term(&mut self) -> Result<NodeId, ParseError> {
        self.depth += 1;
        self.log(RULE_T, "Enter T");
        let node = self.node("T");
        let factor = self.factor()?;
        self.attach(node, factor);
        let tail = self.term_tail()?;
        self.attach(node, tail);
        self.log(RULE_T, "Exit T");
        self.depth -= 1;
        Ok(node)
    }

    /// T' → * F T' | / F T' | ε
    fn term_tail(&mut self) -> Result<NodeId, ParseError> {
        self.depth += 1;
        let node = self.node("T'");
        match self.current().kind {
            TokenKind::Star => {
                let op = self.consume(TokenKind::Star, RULE_T_TAIL_STAR)?;
                self.attach(node, op);
                let factor = self.factor()?;
                self.attach(node, factor);
                let tail = self.term_tail()?;
                self.attach(node, tail);
            }
            TokenKind::Slash => {
                let op = self.consume(TokenKind::Slash, RULE_T_TAIL_SLASH)?;
                self.attach(node, op);
                let factor = self.factor()?;
                self.attach(node, factor);
                let tail = self.term_tail()?;
                self.attach(node, tail);
            }
            _ => {
                self.log(RULE_T_TAIL_EPSILON, "Take ε");
                let eps = self.node(EPSILON);
                self.attach(node, eps);
            }
        }
        self.depth -= 1;
        Ok(node)
    }

    /// F → ( E ) | id | number
    fn factor(&mut self) -> Result<NodeId, ParseError> {
        self.depth += 1;
        let node = self.node("F");
        match self.current().kind {
            TokenKind::OpenParen => {
                let open = self.consume(TokenKind::OpenParen, RULE_F_PAREN)?;
                self.attach(node, open);
                let inner = self.expression()?;
                self.attach(node, inner);
                let close = self.consume(TokenKind::CloseParen, RULE_F_PAREN)?;
                self.attach(node, close);
            }
            TokenKind::Ident => {
                let leaf = self.consume(TokenKind::Ident, RULE_F_ID)?;
                self.attach(node, leaf);
            }
            TokenKind::Number => {
                let leaf = self.consume(TokenKind::Number, RULE_F_NUMBER)?;
                self.attach(node, leaf);
            }
            _ => {
                let tok = self.current().clone();
                return Err(self.mismatch("'(', identifier or number", &tok));
            }
        }
        self.depth -= 1;
        Ok(node)
    }
}
