//! Static extraction of *schema coordinates* — `TypeName.fieldName` strings
//! identifying exactly which typed fields a GraphQL operation document
//! touches, computed against a schema without executing anything.
//!
//! The intended shape is "build once, query many": constructing a
//! [`ParsedSchema`] parses and validates the whole SDL text (the expensive
//! step); each subsequent [`ParsedSchema::extract_schema_coordinates`] call
//! parses only the document and walks it against the prebuilt index. A
//! `ParsedSchema` is immutable after construction and can be shared
//! read-only across threads.
//!
//! ```
//! use schema_coordinates::ParsedSchema;
//!
//! let schema = ParsedSchema::new(
//!     "type Query { user: User }
//!      type User { name: String }",
//! )?;
//!
//! let coordinates = schema.extract_schema_coordinates("{ user { name } }")?;
//! assert!(coordinates.contains("Query.user"));
//! assert!(coordinates.contains("User.name"));
//! assert!(schema.has_field("User.name"));
//! assert!(!schema.has_field("User.nope"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Extraction is strict and all-or-nothing: a field the schema does not
//! declare, an undefined fragment, or a cyclic fragment spread fails the
//! whole call rather than silently under-reporting usage.

pub mod extract;
pub mod schema;
pub mod types;

pub use extract::ExtractError;
pub use extract::ExtractionReport;
pub use schema::ParsedSchema;
pub use schema::RootTypeNames;
pub use schema::SchemaBuildError;
pub use schema_coordinates_parser::ast::OperationKind;
pub use schema_coordinates_parser::ParseError;
pub use types::FieldDefinition;
pub use types::TypeAnnotation;
pub use types::TypeDefinition;
pub use types::TypeKind;
