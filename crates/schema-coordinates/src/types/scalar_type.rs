/// A scalar type. The five built-ins (`Int`, `Float`, `String`, `Boolean`,
/// `ID`) are pre-registered at index construction; everything else comes
/// from `scalar` declarations.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ScalarType {
    pub(crate) name: String,
}

impl ScalarType {
    pub fn name(&self) -> &str {
        &self.name
    }
}
