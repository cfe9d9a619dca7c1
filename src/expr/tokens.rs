//! Token definitions for arithmetic expressions
//!
//! This module defines the tokens produced by the expression lexer. The token
//! kinds are defined using the logos derive macro for efficient tokenization;
//! the positioned [Token] record pairs a kind with its source text and byte
//! offsets.
//!
//! The `Eof` kind carries no pattern: it is never produced by logos and is
//! appended once by the lexer at the end of every successful scan.

use logos::Logos;
use serde::Serialize;

/// All token kinds in the expression grammar.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[logos(skip r"[ \t\r\n]+")]
pub enum TokenKind {
    /// Digits with at most one decimal point. Maximal munch stops at a
    /// second `.`, leaving it for the next scan step (where it errors).
    #[regex(r"[0-9]+(\.[0-9]*)?")]
    Number,

    /// Identifier: letter or underscore, then letters, digits, underscores.
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Ident,

    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("(")]
    OpenParen,
    #[token(")")]
    CloseParen,

    /// End-of-input marker; no source pattern, appended by the lexer.
    Eof,
}

impl TokenKind {
    /// Human-readable name used in syntax error messages.
    pub fn describe(self) -> &'static str {
        match self {
            TokenKind::Number => "number",
            TokenKind::Ident => "identifier",
            TokenKind::Plus => "'+'",
            TokenKind::Minus => "'-'",
            TokenKind::Star => "'*'",
            TokenKind::Slash => "'/'",
            TokenKind::OpenParen => "'('",
            TokenKind::CloseParen => "')'",
            TokenKind::Eof => "end of input",
        }
    }

    /// Check if this kind is a binary operator or parenthesis.
    pub fn is_operator(self) -> bool {
        matches!(
            self,
            TokenKind::Plus
                | TokenKind::Minus
                | TokenKind::Star
                | TokenKind::Slash
                | TokenKind::OpenParen
                | TokenKind::CloseParen
        )
    }
}

/// A token with its source text and byte span.
///
/// Tokens are produced in non-decreasing `start` order; every successful
/// tokenization ends with exactly one `Eof` token spanning `[len, len)`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub start: usize,
    pub end: usize,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, start: usize, end: usize) -> Self {
        Token {
            kind,
            text: text.into(),
            start,
            end,
        }
    }

    /// The end-of-input token at the given position.
    pub fn eof(pos: usize) -> Self {
        Token::new(TokenKind::Eof, "EOF", pos, pos)
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }

    /// The token value as shown to users: its text, or "end of input" for EOF.
    pub fn describe(&self) -> String {
        if self.is_eof() {
            "end of input".to_string()
        } else {
            format!("'{}'", self.text)
        }
    }
}
