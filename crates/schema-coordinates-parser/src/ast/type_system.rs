use crate::ast::DirectiveAnnotation;
use crate::ast::TypeAnnotation;
use crate::ast::Value;

/// A parsed SDL document.
#[derive(Clone, Debug, PartialEq)]
pub struct SchemaDocument<'src> {
    pub definitions: Vec<TypeSystemDefinition<'src>>,
}

/// A single top-level definition in an SDL document.
#[derive(Clone, Debug, PartialEq)]
pub enum TypeSystemDefinition<'src> {
    Schema(SchemaDefinition<'src>),
    Type(TypeDefinition<'src>),
    TypeExtension(TypeExtension<'src>),
    Directive(DirectiveDefinition<'src>),
}

/// A `schema { query: X mutation: Y subscription: Z }` block.
///
/// See [Schema](https://spec.graphql.org/October2021/#sec-Schema) in the
/// spec.
#[derive(Clone, Debug, PartialEq)]
pub struct SchemaDefinition<'src> {
    pub directives: Vec<DirectiveAnnotation<'src>>,
    pub query: Option<&'src str>,
    pub mutation: Option<&'src str>,
    pub subscription: Option<&'src str>,
}

/// A type definition in a GraphQL schema.
#[derive(Clone, Debug, PartialEq)]
pub enum TypeDefinition<'src> {
    Enum(EnumTypeDefinition<'src>),
    InputObject(InputObjectTypeDefinition<'src>),
    Interface(InterfaceTypeDefinition<'src>),
    Object(ObjectTypeDefinition<'src>),
    Scalar(ScalarTypeDefinition<'src>),
    Union(UnionTypeDefinition<'src>),
}

impl<'src> TypeDefinition<'src> {
    pub fn name(&self) -> &'src str {
        match self {
            TypeDefinition::Enum(def) => def.name,
            TypeDefinition::InputObject(def) => def.name,
            TypeDefinition::Interface(def) => def.name,
            TypeDefinition::Object(def) => def.name,
            TypeDefinition::Scalar(def) => def.name,
            TypeDefinition::Union(def) => def.name,
        }
    }
}

/// An object type definition.
///
/// See [Objects](https://spec.graphql.org/October2021/#sec-Objects) in the
/// spec.
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectTypeDefinition<'src> {
    pub name: &'src str,
    pub implements: Vec<&'src str>,
    pub directives: Vec<DirectiveAnnotation<'src>>,
    pub fields: Vec<FieldDefinition<'src>>,
}

/// An interface type definition. Interfaces may themselves implement other
/// interfaces.
#[derive(Clone, Debug, PartialEq)]
pub struct InterfaceTypeDefinition<'src> {
    pub name: &'src str,
    pub implements: Vec<&'src str>,
    pub directives: Vec<DirectiveAnnotation<'src>>,
    pub fields: Vec<FieldDefinition<'src>>,
}

/// A union type definition: `union U = A | B`.
#[derive(Clone, Debug, PartialEq)]
pub struct UnionTypeDefinition<'src> {
    pub name: &'src str,
    pub directives: Vec<DirectiveAnnotation<'src>>,
    pub members: Vec<&'src str>,
}

/// A scalar type definition.
#[derive(Clone, Debug, PartialEq)]
pub struct ScalarTypeDefinition<'src> {
    pub name: &'src str,
    pub directives: Vec<DirectiveAnnotation<'src>>,
}

/// An enum type definition. Only the value names are kept.
#[derive(Clone, Debug, PartialEq)]
pub struct EnumTypeDefinition<'src> {
    pub name: &'src str,
    pub directives: Vec<DirectiveAnnotation<'src>>,
    pub values: Vec<&'src str>,
}

/// An input object type definition.
#[derive(Clone, Debug, PartialEq)]
pub struct InputObjectTypeDefinition<'src> {
    pub name: &'src str,
    pub directives: Vec<DirectiveAnnotation<'src>>,
    pub fields: Vec<InputValueDefinition<'src>>,
}

/// A field definition on an object or interface type.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldDefinition<'src> {
    pub name: &'src str,
    pub arguments: Vec<InputValueDefinition<'src>>,
    pub field_type: TypeAnnotation<'src>,
    pub directives: Vec<DirectiveAnnotation<'src>>,
}

/// An argument definition or input-object field definition.
#[derive(Clone, Debug, PartialEq)]
pub struct InputValueDefinition<'src> {
    pub name: &'src str,
    pub value_type: TypeAnnotation<'src>,
    pub default_value: Option<Value<'src>>,
    pub directives: Vec<DirectiveAnnotation<'src>>,
}

/// An `extend` clause contributing fields or members to a type declared
/// elsewhere in the document.
///
/// See [Type Extensions](https://spec.graphql.org/October2021/#sec-Type-Extensions)
/// in the spec.
#[derive(Clone, Debug, PartialEq)]
pub enum TypeExtension<'src> {
    Enum(EnumTypeDefinition<'src>),
    InputObject(InputObjectTypeDefinition<'src>),
    Interface(InterfaceTypeDefinition<'src>),
    Object(ObjectTypeDefinition<'src>),
    Scalar(ScalarTypeDefinition<'src>),
    Union(UnionTypeDefinition<'src>),
}

impl<'src> TypeExtension<'src> {
    pub fn name(&self) -> &'src str {
        match self {
            TypeExtension::Enum(def) => def.name,
            TypeExtension::InputObject(def) => def.name,
            TypeExtension::Interface(def) => def.name,
            TypeExtension::Object(def) => def.name,
            TypeExtension::Scalar(def) => def.name,
            TypeExtension::Union(def) => def.name,
        }
    }
}

/// A directive declaration: `directive @name(args) repeatable? on LOC | …`.
///
/// Parsed for grammar completeness; directive declarations carry no
/// semantic weight for any consumer of this crate.
#[derive(Clone, Debug, PartialEq)]
pub struct DirectiveDefinition<'src> {
    pub name: &'src str,
    pub arguments: Vec<InputValueDefinition<'src>>,
    pub repeatable: bool,
    pub locations: Vec<&'src str>,
}
