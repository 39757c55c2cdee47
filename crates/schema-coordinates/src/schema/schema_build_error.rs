use crate::types::TypeKind;
use schema_coordinates_parser::ParseError;
use thiserror::Error;

/// Errors raised while building a [`ParsedSchema`](crate::ParsedSchema)
/// from SDL text.
///
/// Every internal type reference is checked at construction time, so
/// extraction never encounters a dangling schema-side reference.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum SchemaBuildError {
    #[error("Failed to parse schema: {0}")]
    Parse(#[from] ParseError),

    #[error("Duplicate definition of type `{type_name}`")]
    DuplicateTypeDefinition { type_name: String },

    #[error("Duplicate `schema` definition")]
    DuplicateSchemaDefinition,

    #[error("Field `{type_name}.{field_name}` is declared more than once")]
    DuplicateFieldDefinition {
        type_name: String,
        field_name: String,
    },

    #[error("Extension targets undefined type `{type_name}`")]
    ExtensionOfUndefinedType { type_name: String },

    #[error("{extension_kind} extension cannot extend {target_kind} type `{type_name}`")]
    ExtensionKindMismatch {
        type_name: String,
        extension_kind: TypeKind,
        target_kind: TypeKind,
    },

    #[error("Field `{type_name}.{field_name}` references undefined type `{undefined_type_name}`")]
    UndefinedFieldType {
        type_name: String,
        field_name: String,
        undefined_type_name: String,
    },

    #[error(
        "Argument `{argument_name}` of `{type_name}.{field_name}` references undefined type \
         `{undefined_type_name}`"
    )]
    UndefinedArgumentType {
        type_name: String,
        field_name: String,
        argument_name: String,
        undefined_type_name: String,
    },

    #[error("Type `{type_name}` implements undefined interface `{undefined_interface_name}`")]
    ImplementsUndefinedInterface {
        type_name: String,
        undefined_interface_name: String,
    },

    #[error("Union `{union_name}` includes undefined member type `{undefined_member_name}`")]
    UndefinedUnionMember {
        union_name: String,
        undefined_member_name: String,
    },

    #[error("Schema declares `{operation}` root type `{type_name}`, which is not defined")]
    UndefinedRootType {
        operation: String,
        type_name: String,
    },
}
