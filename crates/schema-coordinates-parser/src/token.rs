use crate::SourcePosition;

/// A single lexed token plus the position of its first character.
#[derive(Clone, Debug, PartialEq)]
pub struct Token<'src> {
    pub kind: TokenKind<'src>,
    pub position: SourcePosition,
}

/// The kind of a GraphQL token.
///
/// Literal values (`IntValue`, `FloatValue`, `StringValue`) store only the
/// raw source text, borrowed from the input. Numeric literals keep their
/// sign and exponent unparsed; string literals store the text between the
/// quotes with escape sequences unprocessed, since this parser's consumers
/// discard all input values.
///
/// `true`, `false`, and `null` lex as ordinary [`Name`](TokenKind::Name)
/// tokens; the parser decides their meaning from grammar context.
#[derive(Clone, Debug, PartialEq)]
pub enum TokenKind<'src> {
    /// `&`
    Ampersand,
    /// `@`
    At,
    /// `!`
    Bang,
    /// `:`
    Colon,
    /// `}`
    CurlyBraceClose,
    /// `{`
    CurlyBraceOpen,
    /// `$`
    Dollar,
    /// `...`
    Ellipsis,
    /// `=`
    Equals,
    /// `)`
    ParenClose,
    /// `(`
    ParenOpen,
    /// `|`
    Pipe,
    /// `]`
    SquareBracketClose,
    /// `[`
    SquareBracketOpen,

    /// A GraphQL name/identifier.
    Name(&'src str),

    /// Raw source text of an integer literal, including any negative sign
    /// (e.g. `"-123"`, `"0"`).
    IntValue(&'src str),

    /// Raw source text of a float literal, including any negative sign
    /// (e.g. `"-1.23e-4"`, `"0.5"`).
    FloatValue(&'src str),

    /// The content of a string or block-string literal, without the
    /// enclosing quotes and with escape sequences left unprocessed.
    StringValue(&'src str),

    /// End of input.
    Eof,
}

impl TokenKind<'_> {
    /// Describes this token for "expected X, found Y" error messages.
    pub fn describe(&self) -> String {
        match self {
            TokenKind::Ampersand => "`&`".to_string(),
            TokenKind::At => "`@`".to_string(),
            TokenKind::Bang => "`!`".to_string(),
            TokenKind::Colon => "`:`".to_string(),
            TokenKind::CurlyBraceClose => "`}`".to_string(),
            TokenKind::CurlyBraceOpen => "`{`".to_string(),
            TokenKind::Dollar => "`$`".to_string(),
            TokenKind::Ellipsis => "`...`".to_string(),
            TokenKind::Equals => "`=`".to_string(),
            TokenKind::ParenClose => "`)`".to_string(),
            TokenKind::ParenOpen => "`(`".to_string(),
            TokenKind::Pipe => "`|`".to_string(),
            TokenKind::SquareBracketClose => "`]`".to_string(),
            TokenKind::SquareBracketOpen => "`[`".to_string(),
            TokenKind::Name(name) => format!("`{name}`"),
            TokenKind::IntValue(text) => format!("integer `{text}`"),
            TokenKind::FloatValue(text) => format!("float `{text}`"),
            TokenKind::StringValue(_) => "string value".to_string(),
            TokenKind::Eof => "end of input".to_string(),
        }
    }
}
