use crate::types::FieldDefinition;
use indexmap::IndexMap;

/// An input object type and its input fields.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct InputObjectType {
    pub(crate) name: String,
    pub(crate) fields: IndexMap<String, FieldDefinition>,
}

impl InputObjectType {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fields(&self) -> &IndexMap<String, FieldDefinition> {
        &self.fields
    }
}
