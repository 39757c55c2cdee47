//! The type-system model a schema is indexed into.
//!
//! [`TypeDefinition`] is a closed sum over the six GraphQL type kinds;
//! selection resolution dispatches on its variants by `match`, so every
//! kind is handled exhaustively. All structures here are immutable once
//! the containing [`ParsedSchema`](crate::ParsedSchema) is built, and all
//! field maps are insertion-ordered.

mod argument_definition;
mod enum_type;
mod field_definition;
mod input_object_type;
mod interface_type;
mod object_type;
mod scalar_type;
mod type_annotation;
mod type_definition;
mod type_kind;
mod union_type;

pub use argument_definition::ArgumentDefinition;
pub use enum_type::EnumType;
pub use field_definition::FieldDefinition;
pub use input_object_type::InputObjectType;
pub use interface_type::InterfaceType;
pub use object_type::ObjectType;
pub use scalar_type::ScalarType;
pub use type_annotation::TypeAnnotation;
pub use type_definition::TypeDefinition;
pub use type_kind::TypeKind;
pub use union_type::UnionType;
