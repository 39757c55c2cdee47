use schema_coordinates_parser::ParseError;
use schema_coordinates_parser::ast::OperationKind;
use thiserror::Error;

/// Errors raised while extracting schema coordinates from a document.
///
/// Extraction is all-or-nothing: one invalid reference invalidates the
/// whole call rather than silently dropping a coordinate, since a partial
/// report would under-report usage.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum ExtractError {
    #[error("Failed to parse document: {0}")]
    Parse(#[from] ParseError),

    /// The schema defines no root type for this operation kind.
    #[error("Schema has no `{operation}` root operation type")]
    RootTypeMissing { operation: OperationKind },

    /// The document selects a field the current type does not declare —
    /// the document and schema have diverged.
    #[error("Field `{field_name}` is not defined on type `{type_name}`")]
    FieldNotFound {
        type_name: String,
        field_name: String,
    },

    /// A `...Name` spread references a fragment the document never defines.
    #[error("Unknown fragment `{fragment_name}`")]
    UndefinedFragment { fragment_name: String },

    /// A fragment spreads itself, directly or transitively.
    #[error("Cannot spread fragment `{fragment_name}` within itself")]
    CyclicFragment { fragment_name: String },
}
