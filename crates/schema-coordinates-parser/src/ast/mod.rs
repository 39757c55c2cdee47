//! AST types for parsed GraphQL documents.
//!
//! Nodes carry semantic content only — names, type references, values,
//! directives, selections — and borrow string slices from the source text
//! via a `'src` lifetime. Descriptions and comments are consumed as syntax
//! by the parsers and never reach the AST.

mod executable;
mod type_annotation;
mod type_system;
mod value;

pub use executable::Argument;
pub use executable::DirectiveAnnotation;
pub use executable::ExecutableDefinition;
pub use executable::ExecutableDocument;
pub use executable::Field;
pub use executable::FragmentDefinition;
pub use executable::FragmentSpread;
pub use executable::InlineFragment;
pub use executable::OperationDefinition;
pub use executable::OperationKind;
pub use executable::Selection;
pub use executable::SelectionSet;
pub use executable::VariableDefinition;
pub use type_annotation::TypeAnnotation;
pub use type_system::DirectiveDefinition;
pub use type_system::EnumTypeDefinition;
pub use type_system::FieldDefinition;
pub use type_system::InputObjectTypeDefinition;
pub use type_system::InputValueDefinition;
pub use type_system::InterfaceTypeDefinition;
pub use type_system::ObjectTypeDefinition;
pub use type_system::ScalarTypeDefinition;
pub use type_system::SchemaDefinition;
pub use type_system::SchemaDocument;
pub use type_system::TypeDefinition;
pub use type_system::TypeExtension;
pub use type_system::TypeSystemDefinition;
pub use type_system::UnionTypeDefinition;
pub use value::Value;
