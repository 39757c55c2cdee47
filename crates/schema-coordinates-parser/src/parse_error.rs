use crate::SourcePosition;

/// A syntax error produced while lexing or parsing a GraphQL document.
///
/// A `ParseError` is always fatal to the parse that produced it: no partial
/// AST is ever returned alongside one.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("{position}: {message}")]
pub struct ParseError {
    /// Human-readable description of the violation.
    pub message: String,

    /// Where in the source text the violation was detected.
    pub position: SourcePosition,
}

impl ParseError {
    pub(crate) fn new(message: impl Into<String>, position: SourcePosition) -> Self {
        Self {
            message: message.into(),
            position,
        }
    }
}
