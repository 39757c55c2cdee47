//! Schema indexing: SDL text in, an immutable, validated [`ParsedSchema`]
//! out.

mod parsed_schema;
mod root_type_names;
mod schema_build_error;
mod schema_builder;

pub use parsed_schema::ParsedSchema;
pub use root_type_names::RootTypeNames;
pub use schema_build_error::SchemaBuildError;

#[cfg(test)]
mod tests;
