/// An enum type and its value names.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct EnumType {
    pub(crate) name: String,
    pub(crate) values: Vec<String>,
}

impl EnumType {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }
}
