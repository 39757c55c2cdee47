use crate::types::FieldDefinition;
use indexmap::IndexMap;

/// An interface type. Interfaces may themselves implement other interfaces.
///
/// Selecting one of an interface's own fields yields a coordinate under the
/// interface's name; concrete-type coordinates only arise from explicit
/// inline-fragment or fragment narrowing in the document.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct InterfaceType {
    pub(crate) name: String,
    pub(crate) fields: IndexMap<String, FieldDefinition>,
    pub(crate) interfaces: Vec<String>,
}

impl InterfaceType {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fields(&self) -> &IndexMap<String, FieldDefinition> {
        &self.fields
    }

    pub fn interfaces(&self) -> &[String] {
        &self.interfaces
    }
}
