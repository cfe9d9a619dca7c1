//! Tokenizer integration tests over whole expressions
//!
//! These exercise the public `tokenize` surface: full token streams with
//! exact offsets, the EOF terminator, and the lexical error contract.

use descent::expr::{tokenize, LexError, Token, TokenKind};
use rstest::rstest;

#[test]
fn full_stream_with_exact_offsets() {
    let tokens = tokenize("(3+5)*2").unwrap();
    assert_eq!(
        tokens,
        vec![
            Token::new(TokenKind::OpenParen, "(", 0, 1),
            Token::new(TokenKind::Number, "3", 1, 2),
            Token::new(TokenKind::Plus, "+", 2, 3),
            Token::new(TokenKind::Number, "5", 3, 4),
            Token::new(TokenKind::CloseParen, ")", 4, 5),
            Token::new(TokenKind::Star, "*", 5, 6),
            Token::new(TokenKind::Number, "2", 6, 7),
            Token::eof(7),
        ]
    );
}

#[test]
fn empty_input_is_just_eof() {
    // Rejecting empty input is the caller's concern, not the tokenizer's
    assert_eq!(tokenize("").unwrap(), vec![Token::eof(0)]);
}

#[rstest]
#[case("+", TokenKind::Plus)]
#[case("-", TokenKind::Minus)]
#[case("*", TokenKind::Star)]
#[case("/", TokenKind::Slash)]
#[case("(", TokenKind::OpenParen)]
#[case(")", TokenKind::CloseParen)]
#[case("42", TokenKind::Number)]
#[case("3.25", TokenKind::Number)]
#[case("value_2", TokenKind::Ident)]
#[case("_x", TokenKind::Ident)]
fn single_token_kinds(#[case] source: &str, #[case] expected: TokenKind) {
    let tokens = tokenize(source).unwrap();
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].kind, expected);
    assert_eq!(tokens[0].text, source);
    assert_eq!((tokens[0].start, tokens[0].end), (0, source.len()));
    assert!(tokens[1].is_eof());
}

#[rstest]
#[case("1.2.3", '.', 3)]
#[case("1$2", '$', 1)]
#[case("#", '#', 0)]
#[case("a @ b", '@', 2)]
fn lexical_errors_report_character_and_position(
    #[case] source: &str,
    #[case] ch: char,
    #[case] pos: usize,
) {
    assert_eq!(tokenize(source).unwrap_err(), LexError { ch, pos });
}

#[test]
fn lexical_error_message_format() {
    assert_eq!(
        tokenize("1.2.3").unwrap_err().to_string(),
        "Unexpected character '.' at position 3"
    );
}

#[test]
fn number_keeps_digits_and_single_dot_prefix() {
    // The second dot stops the number; it is the character that then errors
    let err = tokenize("1.2.3").unwrap_err();
    assert_eq!(err.pos, 3);
    // The prefix itself tokenizes cleanly
    let tokens = tokenize("1.2").unwrap();
    assert_eq!(tokens[0].text, "1.2");
    assert_eq!(tokens[0].kind, TokenKind::Number);
}

#[test]
fn whitespace_never_produces_tokens() {
    let tokens = tokenize(" 1 +\t2 ").unwrap();
    let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, vec!["1", "+", "2", "EOF"]);
}
