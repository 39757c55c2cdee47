use crate::types::TypeAnnotation;
use schema_coordinates_parser::ast;

/// An argument declared on a field.
///
/// Coordinate extraction cares about arguments only by existence, so no
/// default value is kept.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ArgumentDefinition {
    pub(crate) name: String,
    pub(crate) argument_type: TypeAnnotation,
}

impl ArgumentDefinition {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn argument_type(&self) -> &TypeAnnotation {
        &self.argument_type
    }

    pub(crate) fn from_ast(argument: &ast::InputValueDefinition<'_>) -> Self {
        Self {
            name: argument.name.to_string(),
            argument_type: TypeAnnotation::from_ast(&argument.value_type),
        }
    }
}
