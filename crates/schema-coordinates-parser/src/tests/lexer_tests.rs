//! Tests for the lexer: token kinds, positions, and literal edge cases.

use crate::Lexer;
use crate::ParseError;
use crate::TokenKind;

/// Lexes the whole input, including the trailing `Eof` token.
fn lex_all(source: &str) -> Vec<TokenKind<'_>> {
    let mut lexer = Lexer::new(source);
    let mut kinds = vec![];
    loop {
        let token = lexer.next_token().expect("lexing should succeed");
        let is_eof = token.kind == TokenKind::Eof;
        kinds.push(token.kind);
        if is_eof {
            break;
        }
    }
    kinds
}

fn lex_err(source: &str) -> ParseError {
    let mut lexer = Lexer::new(source);
    loop {
        match lexer.next_token() {
            Ok(token) if token.kind == TokenKind::Eof => {
                panic!("expected a lex error in {source:?}")
            }
            Ok(_) => {}
            Err(error) => return error,
        }
    }
}

#[test]
fn punctuators_and_names() {
    assert_eq!(
        lex_all("{ name } ... & | ! $ @ ( ) [ ] : ="),
        vec![
            TokenKind::CurlyBraceOpen,
            TokenKind::Name("name"),
            TokenKind::CurlyBraceClose,
            TokenKind::Ellipsis,
            TokenKind::Ampersand,
            TokenKind::Pipe,
            TokenKind::Bang,
            TokenKind::Dollar,
            TokenKind::At,
            TokenKind::ParenOpen,
            TokenKind::ParenClose,
            TokenKind::SquareBracketOpen,
            TokenKind::SquareBracketClose,
            TokenKind::Colon,
            TokenKind::Equals,
            TokenKind::Eof,
        ],
    );
}

#[test]
fn commas_comments_and_bom_are_insignificant() {
    assert_eq!(
        lex_all("\u{feff}a, b # trailing comment\n# full-line comment\r\nc"),
        vec![
            TokenKind::Name("a"),
            TokenKind::Name("b"),
            TokenKind::Name("c"),
            TokenKind::Eof,
        ],
    );
}

#[test]
fn token_positions_track_lines_and_columns() {
    let mut lexer = Lexer::new("first\n  second");

    let first = lexer.next_token().expect("should lex");
    assert_eq!(first.position.line(), 0);
    assert_eq!(first.position.col(), 0);

    let second = lexer.next_token().expect("should lex");
    assert_eq!(second.position.line(), 1);
    assert_eq!(second.position.col(), 2);
    assert_eq!(second.position.byte_offset(), 8);
}

#[test]
fn crlf_counts_as_a_single_line_terminator() {
    let mut lexer = Lexer::new("a\r\nb");
    lexer.next_token().expect("should lex");
    let second = lexer.next_token().expect("should lex");
    assert_eq!(second.position.line(), 1);
    assert_eq!(second.position.col(), 0);
}

#[test]
fn int_and_float_literals_keep_raw_text() {
    assert_eq!(
        lex_all("0 -123 4.5 -0.5 1e10 6.02e-23"),
        vec![
            TokenKind::IntValue("0"),
            TokenKind::IntValue("-123"),
            TokenKind::FloatValue("4.5"),
            TokenKind::FloatValue("-0.5"),
            TokenKind::FloatValue("1e10"),
            TokenKind::FloatValue("6.02e-23"),
            TokenKind::Eof,
        ],
    );
}

#[test]
fn numeric_literal_with_leading_zero_is_an_error() {
    let error = lex_err("012");
    assert!(error.message.contains("leading zero"), "{}", error.message);
}

#[test]
fn bare_minus_is_an_error() {
    let error = lex_err("-");
    assert_eq!(error.message, "Expected digit after `-`");
}

#[test]
fn numeric_literal_running_into_a_name_is_an_error() {
    let error = lex_err("123abc");
    assert!(
        error.message.contains("after numeric literal"),
        "{}",
        error.message,
    );
}

#[test]
fn lone_dot_is_an_error() {
    assert_eq!(lex_err("a . b").message, "Unexpected `.`");
}

#[test]
fn string_literals_keep_raw_inner_text() {
    assert_eq!(
        lex_all(r#""hello" "" "esc\n\"quote\"" "é""#),
        vec![
            TokenKind::StringValue("hello"),
            TokenKind::StringValue(""),
            TokenKind::StringValue(r#"esc\n\"quote\""#),
            TokenKind::StringValue("é"),
            TokenKind::Eof,
        ],
    );
}

#[test]
fn block_string_spans_lines_and_keeps_inner_text() {
    let source = "\"\"\"one\n\"two\"\n\"\"\" after";
    assert_eq!(
        lex_all(source),
        vec![
            TokenKind::StringValue("one\n\"two\"\n"),
            TokenKind::Name("after"),
            TokenKind::Eof,
        ],
    );
}

#[test]
fn block_string_position_tracking_survives_newlines() {
    let mut lexer = Lexer::new("\"\"\"a\nb\"\"\" tail");
    lexer.next_token().expect("should lex block string");
    let tail = lexer.next_token().expect("should lex");
    assert_eq!(tail.position.line(), 1);
    assert_eq!(tail.position.col(), 5);
}

#[test]
fn unterminated_string_is_an_error() {
    assert_eq!(lex_err("\"abc").message, "Unterminated string");
    assert_eq!(lex_err("\"abc\ndef\"").message, "Unterminated string");
    assert_eq!(lex_err("\"\"\"abc").message, "Unterminated block string");
}

#[test]
fn invalid_escape_sequence_is_an_error() {
    assert_eq!(lex_err(r#""\q""#).message, "Invalid escape sequence `\\q`");
    assert_eq!(
        lex_err(r#""\u12g4""#).message,
        "Expected 4 hex digits after `\\u`",
    );
}

#[test]
fn unexpected_character_reports_the_character() {
    assert_eq!(lex_err("a ; b").message, "Unexpected character `;`");
    assert_eq!(lex_err("é").message, "Unexpected character `é`");
}

#[test]
fn error_positions_point_at_the_offending_character() {
    let error = lex_err("ab ;");
    assert_eq!(error.position.line(), 0);
    assert_eq!(error.position.col(), 3);
    assert_eq!(error.position.byte_offset(), 3);
}

#[test]
fn eof_is_repeatable() {
    let mut lexer = Lexer::new("x");
    lexer.next_token().expect("should lex");
    assert_eq!(lexer.next_token().expect("should lex").kind, TokenKind::Eof);
    assert_eq!(lexer.next_token().expect("should lex").kind, TokenKind::Eof);
}
