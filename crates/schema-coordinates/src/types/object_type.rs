use crate::types::FieldDefinition;
use indexmap::IndexMap;

/// An object type: named, fielded, and possibly implementing interfaces.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ObjectType {
    pub(crate) name: String,
    pub(crate) fields: IndexMap<String, FieldDefinition>,
    pub(crate) interfaces: Vec<String>,
}

impl ObjectType {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fields(&self) -> &IndexMap<String, FieldDefinition> {
        &self.fields
    }

    /// Names of the interfaces this type declares it implements.
    pub fn interfaces(&self) -> &[String] {
        &self.interfaces
    }
}
