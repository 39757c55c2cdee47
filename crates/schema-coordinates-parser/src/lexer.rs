//! A single-pass lexer over `&str` input.
//!
//! Token values borrow directly from the source string, so lexing itself
//! never allocates. Whitespace, commas, comments, and a leading BOM are
//! skipped as insignificant; line/column/byte positions are tracked for
//! every emitted token.

use crate::ParseError;
use crate::SourcePosition;
use crate::Token;
use crate::TokenKind;

type Result<T> = std::result::Result<T, ParseError>;

/// Lexes GraphQL tokens from a string slice.
///
/// The lexer is fail-fast: the first invalid character or malformed literal
/// aborts lexing with a [`ParseError`]. After the end of input is reached,
/// [`Lexer::next_token`] keeps returning [`TokenKind::Eof`] tokens.
pub struct Lexer<'src> {
    source: &'src str,

    /// Current byte offset from the start of `source`. Always lands on a
    /// UTF-8 character boundary.
    offset: usize,

    /// Current 0-based line number.
    line: usize,

    /// Current 0-based character column within the line.
    col: usize,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Self {
        let mut lexer = Self {
            source,
            offset: 0,
            line: 0,
            col: 0,
        };
        // A leading UTF-8 byte-order mark is insignificant.
        if source.as_bytes().starts_with(&[0xEF, 0xBB, 0xBF]) {
            lexer.offset = 3;
        }
        lexer
    }

    /// Lexes and returns the next significant token.
    pub fn next_token(&mut self) -> Result<Token<'src>> {
        self.skip_ignored();
        let position = self.position();

        let Some(byte) = self.peek_byte() else {
            return Ok(Token {
                kind: TokenKind::Eof,
                position,
            });
        };

        let kind = match byte {
            b'&' => self.punctuator(TokenKind::Ampersand),
            b'@' => self.punctuator(TokenKind::At),
            b'!' => self.punctuator(TokenKind::Bang),
            b':' => self.punctuator(TokenKind::Colon),
            b'}' => self.punctuator(TokenKind::CurlyBraceClose),
            b'{' => self.punctuator(TokenKind::CurlyBraceOpen),
            b'$' => self.punctuator(TokenKind::Dollar),
            b'=' => self.punctuator(TokenKind::Equals),
            b')' => self.punctuator(TokenKind::ParenClose),
            b'(' => self.punctuator(TokenKind::ParenOpen),
            b'|' => self.punctuator(TokenKind::Pipe),
            b']' => self.punctuator(TokenKind::SquareBracketClose),
            b'[' => self.punctuator(TokenKind::SquareBracketOpen),
            b'.' => self.lex_ellipsis(position)?,
            b'"' => self.lex_string(position)?,
            b'-' | b'0'..=b'9' => self.lex_number(position)?,
            b'_' | b'A'..=b'Z' | b'a'..=b'z' => self.lex_name(),
            _ => {
                // Decode the full character for the error message.
                let ch = self.peek_char().unwrap_or(char::REPLACEMENT_CHARACTER);
                return Err(ParseError::new(
                    format!("Unexpected character `{ch}`"),
                    position,
                ));
            }
        };

        Ok(Token { kind, position })
    }

    fn position(&self) -> SourcePosition {
        SourcePosition::new(self.line, self.col, self.offset)
    }

    fn peek_byte(&self) -> Option<u8> {
        self.source.as_bytes().get(self.offset).copied()
    }

    fn peek_char(&self) -> Option<char> {
        self.source[self.offset..].chars().next()
    }

    fn remaining(&self) -> &'src str {
        &self.source[self.offset..]
    }

    /// Advances past one ASCII character.
    fn advance_ascii(&mut self) {
        self.offset += 1;
        self.col += 1;
    }

    fn punctuator(&mut self, kind: TokenKind<'src>) -> TokenKind<'src> {
        self.advance_ascii();
        kind
    }

    /// Skips whitespace, commas, line terminators, and comments.
    fn skip_ignored(&mut self) {
        while let Some(byte) = self.peek_byte() {
            match byte {
                b' ' | b'\t' | b',' => self.advance_ascii(),
                b'\n' => {
                    self.offset += 1;
                    self.line += 1;
                    self.col = 0;
                }
                b'\r' => {
                    self.offset += 1;
                    // `\r\n` counts as a single line terminator.
                    if self.peek_byte() == Some(b'\n') {
                        self.offset += 1;
                    }
                    self.line += 1;
                    self.col = 0;
                }
                b'#' => {
                    // A comment runs to the next line terminator (or EOF);
                    // the terminator itself is handled by the next loop turn.
                    let rest = self.remaining();
                    let end = memchr::memchr2(b'\n', b'\r', rest.as_bytes())
                        .unwrap_or(rest.len());
                    self.col += rest[..end].chars().count();
                    self.offset += end;
                }
                _ => break,
            }
        }
    }

    /// Lexes `...`. A lone or doubled `.` is an error.
    fn lex_ellipsis(&mut self, position: SourcePosition) -> Result<TokenKind<'src>> {
        if self.remaining().starts_with("...") {
            self.offset += 3;
            self.col += 3;
            Ok(TokenKind::Ellipsis)
        } else {
            Err(ParseError::new("Unexpected `.`", position))
        }
    }

    /// Lexes a name: `[_A-Za-z][_0-9A-Za-z]*`.
    fn lex_name(&mut self) -> TokenKind<'src> {
        let start = self.offset;
        let bytes = self.source.as_bytes();
        while let Some(&byte) = bytes.get(self.offset) {
            match byte {
                b'_' | b'0'..=b'9' | b'A'..=b'Z' | b'a'..=b'z' => self.advance_ascii(),
                _ => break,
            }
        }
        TokenKind::Name(&self.source[start..self.offset])
    }

    /// Lexes an int or float literal, keeping the raw source text.
    fn lex_number(&mut self, position: SourcePosition) -> Result<TokenKind<'src>> {
        let start = self.offset;
        let mut is_float = false;

        if self.peek_byte() == Some(b'-') {
            self.advance_ascii();
        }

        let integer_digits = self.take_digits();
        if integer_digits == 0 {
            return Err(ParseError::new("Expected digit after `-`", position));
        }
        // No leading zeros: `0` is fine, `012` is not.
        let integer_part = &self.source[start..self.offset];
        let unsigned = integer_part.strip_prefix('-').unwrap_or(integer_part);
        if unsigned.len() > 1 && unsigned.starts_with('0') {
            return Err(ParseError::new(
                format!("Invalid numeric literal `{integer_part}` (leading zero)"),
                position,
            ));
        }

        if self.peek_byte() == Some(b'.')
            && matches!(self.source.as_bytes().get(self.offset + 1), Some(b'0'..=b'9'))
        {
            is_float = true;
            self.advance_ascii();
            self.take_digits();
        }

        if matches!(self.peek_byte(), Some(b'e' | b'E')) {
            is_float = true;
            self.advance_ascii();
            if matches!(self.peek_byte(), Some(b'+' | b'-')) {
                self.advance_ascii();
            }
            if self.take_digits() == 0 {
                return Err(ParseError::new(
                    "Expected digit in exponent of numeric literal",
                    position,
                ));
            }
        }

        // A numeric literal must not run directly into a name.
        if matches!(self.peek_byte(), Some(b'_' | b'A'..=b'Z' | b'a'..=b'z')) {
            return Err(ParseError::new(
                format!(
                    "Unexpected character after numeric literal `{}`",
                    &self.source[start..self.offset],
                ),
                position,
            ));
        }

        let text = &self.source[start..self.offset];
        Ok(if is_float {
            TokenKind::FloatValue(text)
        } else {
            TokenKind::IntValue(text)
        })
    }

    fn take_digits(&mut self) -> usize {
        let start = self.offset;
        while matches!(self.peek_byte(), Some(b'0'..=b'9')) {
            self.advance_ascii();
        }
        self.offset - start
    }

    /// Lexes a `"…"` or `"""…"""` literal, returning the raw inner text.
    fn lex_string(&mut self, position: SourcePosition) -> Result<TokenKind<'src>> {
        if self.remaining().starts_with("\"\"\"") {
            return self.lex_block_string(position);
        }

        // Opening quote.
        self.advance_ascii();
        let content_start = self.offset;

        while let Some(ch) = self.peek_char() {
            match ch {
                '"' => {
                    let value = &self.source[content_start..self.offset];
                    self.advance_ascii();
                    return Ok(TokenKind::StringValue(value));
                }
                '\n' | '\r' => break,
                '\\' => {
                    self.advance_ascii();
                    self.lex_escape_sequence(position)?;
                }
                _ => {
                    self.offset += ch.len_utf8();
                    self.col += 1;
                }
            }
        }

        Err(ParseError::new("Unterminated string", position))
    }

    /// Validates the escape sequence following a consumed backslash.
    fn lex_escape_sequence(&mut self, string_position: SourcePosition) -> Result<()> {
        let position = self.position();
        match self.peek_char() {
            Some('"' | '\\' | '/' | 'b' | 'f' | 'n' | 'r' | 't') => {
                self.advance_ascii();
                Ok(())
            }
            Some('u') => {
                self.advance_ascii();
                for _ in 0..4 {
                    if matches!(
                        self.peek_byte(),
                        Some(b'0'..=b'9' | b'a'..=b'f' | b'A'..=b'F'),
                    ) {
                        self.advance_ascii();
                    } else {
                        return Err(ParseError::new(
                            "Expected 4 hex digits after `\\u`",
                            position,
                        ));
                    }
                }
                Ok(())
            }
            Some(ch) => Err(ParseError::new(
                format!("Invalid escape sequence `\\{ch}`"),
                position,
            )),
            None => Err(ParseError::new("Unterminated string", string_position)),
        }
    }

    fn lex_block_string(&mut self, position: SourcePosition) -> Result<TokenKind<'src>> {
        // Opening `"""`.
        self.offset += 3;
        self.col += 3;
        let content_start = self.offset;

        loop {
            let rest = self.remaining();
            if rest.starts_with("\"\"\"") {
                let value = &self.source[content_start..self.offset];
                self.offset += 3;
                self.col += 3;
                return Ok(TokenKind::StringValue(value));
            }
            if rest.starts_with("\\\"\"\"") {
                self.offset += 4;
                self.col += 4;
                continue;
            }
            match self.peek_char() {
                Some('\n') => {
                    self.offset += 1;
                    self.line += 1;
                    self.col = 0;
                }
                Some('\r') => {
                    self.offset += 1;
                    if self.peek_byte() == Some(b'\n') {
                        self.offset += 1;
                    }
                    self.line += 1;
                    self.col = 0;
                }
                Some(ch) => {
                    self.offset += ch.len_utf8();
                    self.col += 1;
                }
                None => {
                    return Err(ParseError::new("Unterminated block string", position));
                }
            }
        }
    }
}
