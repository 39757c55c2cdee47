/// The kind of a [`TypeDefinition`](crate::TypeDefinition).
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum TypeKind {
    Enum,
    InputObject,
    Interface,
    Object,
    Scalar,
    Union,
}

impl TypeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeKind::Enum => "enum",
            TypeKind::InputObject => "input object",
            TypeKind::Interface => "interface",
            TypeKind::Object => "object",
            TypeKind::Scalar => "scalar",
            TypeKind::Union => "union",
        }
    }
}

impl std::fmt::Display for TypeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
