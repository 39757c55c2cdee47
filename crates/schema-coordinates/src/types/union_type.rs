/// A union type: a name plus its member type names.
///
/// Unions declare no fields of their own, so the only selection valid
/// directly on a union is the `__typename` meta-field.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct UnionType {
    pub(crate) name: String,
    pub(crate) members: Vec<String>,
}

impl UnionType {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn members(&self) -> &[String] {
        &self.members
    }
}
