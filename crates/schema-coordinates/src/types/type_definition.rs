use crate::types::EnumType;
use crate::types::FieldDefinition;
use crate::types::InputObjectType;
use crate::types::InterfaceType;
use crate::types::ObjectType;
use crate::types::ScalarType;
use crate::types::TypeKind;
use crate::types::UnionType;
use indexmap::IndexMap;

/// A named type in the schema index.
///
/// Closed sum over the six GraphQL type kinds.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum TypeDefinition {
    Enum(EnumType),
    InputObject(InputObjectType),
    Interface(InterfaceType),
    Object(ObjectType),
    Scalar(ScalarType),
    Union(UnionType),
}

impl TypeDefinition {
    pub fn name(&self) -> &str {
        match self {
            TypeDefinition::Enum(enum_type) => enum_type.name(),
            TypeDefinition::InputObject(input_type) => input_type.name(),
            TypeDefinition::Interface(interface_type) => interface_type.name(),
            TypeDefinition::Object(object_type) => object_type.name(),
            TypeDefinition::Scalar(scalar_type) => scalar_type.name(),
            TypeDefinition::Union(union_type) => union_type.name(),
        }
    }

    pub fn kind(&self) -> TypeKind {
        match self {
            TypeDefinition::Enum(_) => TypeKind::Enum,
            TypeDefinition::InputObject(_) => TypeKind::InputObject,
            TypeDefinition::Interface(_) => TypeKind::Interface,
            TypeDefinition::Object(_) => TypeKind::Object,
            TypeDefinition::Scalar(_) => TypeKind::Scalar,
            TypeDefinition::Union(_) => TypeKind::Union,
        }
    }

    /// The fields declared directly on this type, for the kinds that carry
    /// any. Unions, scalars, and enums have none.
    pub fn fields(&self) -> Option<&IndexMap<String, FieldDefinition>> {
        match self {
            TypeDefinition::Interface(interface_type) => Some(interface_type.fields()),
            TypeDefinition::Object(object_type) => Some(object_type.fields()),
            TypeDefinition::InputObject(input_type) => Some(input_type.fields()),
            TypeDefinition::Enum(_) | TypeDefinition::Scalar(_) | TypeDefinition::Union(_) => None,
        }
    }

    /// Looks up a field declared directly on this type. No interface or
    /// union narrowing happens here.
    pub fn field(&self, field_name: &str) -> Option<&FieldDefinition> {
        self.fields()?.get(field_name)
    }
}
