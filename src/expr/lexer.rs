//! Lexer for arithmetic expressions
//!
//! This module drives the logos lexer over a source string and produces the
//! positioned token stream consumed by the parser. The tokenization is done
//! entirely by logos; this module pairs each match with its span and text,
//! appends the terminating EOF token, and maps match failures to a
//! [LexError].
//!
//! All outcomes are returned as data; nothing panics and no error escapes as
//! a control-flow exit. The whole scan is a pure function of the input.

use crate::expr::tokens::{Token, TokenKind};
use logos::Logos;
use serde::Serialize;
use std::fmt;

/// A character that begins no valid token.
///
/// Tokenization stops at the first such character; no tokens are returned
/// alongside the error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LexError {
    /// The offending character.
    pub ch: char,
    /// Byte offset of the offending character.
    pub pos: usize,
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unexpected character '{}' at position {}",
            self.ch, self.pos
        )
    }
}

impl std::error::Error for LexError {}

/// Tokenize a source string into a positioned token stream.
///
/// On success the stream ends with exactly one EOF token whose span is
/// `[len, len)` and whose text is the literal `EOF`. Whitespace is skipped
/// and never emitted. The first character that begins no token aborts the
/// scan with a [LexError] carrying that character and its position.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let mut lexer = TokenKind::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        match result {
            Ok(kind) => tokens.push(Token::new(kind, lexer.slice(), span.start, span.end)),
            Err(()) => {
                let ch = source[span.start..].chars().next().unwrap_or('\u{fffd}');
                return Err(LexError {
                    ch,
                    pos: span.start,
                });
            }
        }
    }

    tokens.push(Token::eof(source.len()));
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(tokens: &[Token]) -> Vec<TokenKind> {
        tokens.iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_simple_expression() {
        let tokens = tokenize("(3+5)*2").unwrap();
        assert_eq!(
            kinds(&tokens),
            vec![
                TokenKind::OpenParen,
                TokenKind::Number,
                TokenKind::Plus,
                TokenKind::Number,
                TokenKind::CloseParen,
                TokenKind::Star,
                TokenKind::Number,
                TokenKind::Eof,
            ]
        );
        // Spans match character offsets exactly
        let spans: Vec<(usize, usize)> = tokens.iter().map(|t| (t.start, t.end)).collect();
        assert_eq!(
            spans,
            vec![
                (0, 1),
                (1, 2),
                (2, 3),
                (3, 4),
                (4, 5),
                (5, 6),
                (6, 7),
                (7, 7)
            ]
        );
    }

    #[test]
    fn test_empty_input_yields_only_eof() {
        let tokens = tokenize("").unwrap();
        assert_eq!(tokens, vec![Token::eof(0)]);
    }

    #[test]
    fn test_whitespace_only_yields_only_eof() {
        let tokens = tokenize("  \t \n ").unwrap();
        assert_eq!(tokens.len(), 1);
        assert!(tokens[0].is_eof());
        assert_eq!(tokens[0].start, 6);
    }

    #[test]
    fn test_second_dot_aborts_scan() {
        let err = tokenize("1.2.3").unwrap_err();
        assert_eq!(err, LexError { ch: '.', pos: 3 });
        assert_eq!(
            err.to_string(),
            "Unexpected character '.' at position 3"
        );
    }

    #[test]
    fn test_unexpected_character() {
        let err = tokenize("1$2").unwrap_err();
        assert_eq!(err, LexError { ch: '$', pos: 1 });
        assert_eq!(
            err.to_string(),
            "Unexpected character '$' at position 1"
        );
    }

    #[test]
    fn test_token_text_is_preserved() {
        let tokens = tokenize("rate * 1.5").unwrap();
        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["rate", "*", "1.5", "EOF"]);
    }

    #[test]
    fn test_starts_are_non_decreasing() {
        let tokens = tokenize("a + b*(c - 12)").unwrap();
        for pair in tokens.windows(2) {
            assert!(pair[0].start <= pair[1].start);
        }
    }
}
