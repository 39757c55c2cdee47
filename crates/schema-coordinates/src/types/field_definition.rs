use crate::types::ArgumentDefinition;
use crate::types::TypeAnnotation;
use schema_coordinates_parser::ast;

/// A field declared on an object, interface, or input object type.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct FieldDefinition {
    pub(crate) name: String,
    pub(crate) field_type: TypeAnnotation,
    pub(crate) arguments: Vec<ArgumentDefinition>,
}

impl FieldDefinition {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The declared return type, including its List/NonNull wrapping.
    pub fn field_type(&self) -> &TypeAnnotation {
        &self.field_type
    }

    pub fn arguments(&self) -> &[ArgumentDefinition] {
        &self.arguments
    }

    pub(crate) fn from_ast(field: &ast::FieldDefinition<'_>) -> Self {
        Self {
            name: field.name.to_string(),
            field_type: TypeAnnotation::from_ast(&field.field_type),
            arguments: field
                .arguments
                .iter()
                .map(ArgumentDefinition::from_ast)
                .collect(),
        }
    }

    /// Builds an input-object field from its AST form. Input fields take no
    /// arguments.
    pub(crate) fn from_input_value_ast(field: &ast::InputValueDefinition<'_>) -> Self {
        Self {
            name: field.name.to_string(),
            field_type: TypeAnnotation::from_ast(&field.value_type),
            arguments: vec![],
        }
    }
}
