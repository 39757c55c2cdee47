use crate::schema::ParsedSchema;
use crate::schema::RootTypeNames;
use crate::schema::SchemaBuildError;
use crate::types::EnumType;
use crate::types::FieldDefinition;
use crate::types::InputObjectType;
use crate::types::InterfaceType;
use crate::types::ObjectType;
use crate::types::ScalarType;
use crate::types::TypeDefinition;
use crate::types::TypeKind;
use crate::types::UnionType;
use indexmap::IndexMap;
use schema_coordinates_parser::ast;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// The five scalars every schema carries implicitly.
const BUILTIN_SCALARS: [&str; 5] = ["Int", "Float", "String", "Boolean", "ID"];

/// Builds a validated [`ParsedSchema`] from a parsed SDL document.
///
/// The build runs in passes: collect declarations (rejecting duplicates),
/// merge extensions (order-independent within the document), resolve root
/// operation types, then check every internal type reference. Any failure
/// aborts the build; no partial index is ever produced.
pub(crate) struct SchemaBuilder {
    types: IndexMap<String, TypeDefinition>,
}

impl SchemaBuilder {
    pub(crate) fn build(document: &ast::SchemaDocument<'_>) -> Result<ParsedSchema> {
        let mut builder = Self::new();

        let mut schema_definition: Option<&ast::SchemaDefinition<'_>> = None;
        let mut extensions = vec![];
        for definition in &document.definitions {
            match definition {
                ast::TypeSystemDefinition::Schema(definition) => {
                    if schema_definition.is_some() {
                        return Err(SchemaBuildError::DuplicateSchemaDefinition);
                    }
                    schema_definition = Some(definition);
                }
                ast::TypeSystemDefinition::Type(type_def) => builder.add_type(type_def)?,
                ast::TypeSystemDefinition::TypeExtension(extension) => extensions.push(extension),
                // Directive declarations carry no semantic weight for
                // coordinate extraction.
                ast::TypeSystemDefinition::Directive(_) => {}
            }
        }

        for extension in extensions {
            builder.apply_extension(extension)?;
        }

        let root_type_names = builder.resolve_root_types(schema_definition)?;
        builder.validate_references()?;
        let interface_implementers = builder.collect_interface_implementers();

        Ok(ParsedSchema {
            types_by_name: builder.types,
            interface_implementers,
            root_type_names,
        })
    }

    fn new() -> Self {
        let mut types = IndexMap::new();
        for name in BUILTIN_SCALARS {
            types.insert(
                name.to_string(),
                TypeDefinition::Scalar(ScalarType {
                    name: name.to_string(),
                }),
            );
        }
        Self { types }
    }

    fn add_type(&mut self, type_def: &ast::TypeDefinition<'_>) -> Result<()> {
        let name = type_def.name();
        if self.types.contains_key(name) {
            return Err(SchemaBuildError::DuplicateTypeDefinition {
                type_name: name.to_string(),
            });
        }

        let definition = match type_def {
            ast::TypeDefinition::Object(def) => TypeDefinition::Object(ObjectType {
                name: def.name.to_string(),
                fields: build_field_map(def.name, &def.fields)?,
                interfaces: def.implements.iter().map(|s| (*s).to_string()).collect(),
            }),
            ast::TypeDefinition::Interface(def) => TypeDefinition::Interface(InterfaceType {
                name: def.name.to_string(),
                fields: build_field_map(def.name, &def.fields)?,
                interfaces: def.implements.iter().map(|s| (*s).to_string()).collect(),
            }),
            ast::TypeDefinition::Union(def) => TypeDefinition::Union(UnionType {
                name: def.name.to_string(),
                members: def.members.iter().map(|s| (*s).to_string()).collect(),
            }),
            ast::TypeDefinition::Scalar(def) => TypeDefinition::Scalar(ScalarType {
                name: def.name.to_string(),
            }),
            ast::TypeDefinition::Enum(def) => TypeDefinition::Enum(EnumType {
                name: def.name.to_string(),
                values: def.values.iter().map(|s| (*s).to_string()).collect(),
            }),
            ast::TypeDefinition::InputObject(def) => TypeDefinition::InputObject(InputObjectType {
                name: def.name.to_string(),
                fields: build_input_field_map(def.name, &def.fields)?,
            }),
        };

        self.types.insert(name.to_string(), definition);
        Ok(())
    }

    /// Merges one `extend` clause into its target declaration. A field name
    /// colliding between the base type and an extension is a hard error,
    /// never a silent overwrite.
    fn apply_extension(&mut self, extension: &ast::TypeExtension<'_>) -> Result<()> {
        let name = extension.name();
        let Some(target) = self.types.get_mut(name) else {
            return Err(SchemaBuildError::ExtensionOfUndefinedType {
                type_name: name.to_string(),
            });
        };

        match (extension, target) {
            (ast::TypeExtension::Object(ext), TypeDefinition::Object(object)) => {
                extend_interfaces(&mut object.interfaces, &ext.implements);
                merge_fields(name, &mut object.fields, &ext.fields)?;
            }
            (ast::TypeExtension::Interface(ext), TypeDefinition::Interface(interface)) => {
                extend_interfaces(&mut interface.interfaces, &ext.implements);
                merge_fields(name, &mut interface.fields, &ext.fields)?;
            }
            (ast::TypeExtension::Union(ext), TypeDefinition::Union(union_type)) => {
                union_type
                    .members
                    .extend(ext.members.iter().map(|s| (*s).to_string()));
            }
            (ast::TypeExtension::Enum(ext), TypeDefinition::Enum(enum_type)) => {
                enum_type
                    .values
                    .extend(ext.values.iter().map(|s| (*s).to_string()));
            }
            (ast::TypeExtension::InputObject(ext), TypeDefinition::InputObject(input)) => {
                merge_input_fields(name, &mut input.fields, &ext.fields)?;
            }
            // A scalar extension can only attach directives, which carry no
            // semantic weight here.
            (ast::TypeExtension::Scalar(_), TypeDefinition::Scalar(_)) => {}
            (extension, target) => {
                return Err(SchemaBuildError::ExtensionKindMismatch {
                    type_name: name.to_string(),
                    extension_kind: extension_kind(extension),
                    target_kind: target.kind(),
                });
            }
        }
        Ok(())
    }

    fn resolve_root_types(
        &self,
        schema_definition: Option<&ast::SchemaDefinition<'_>>,
    ) -> Result<RootTypeNames> {
        match schema_definition {
            Some(definition) => {
                // With an explicit schema block, exactly the listed roots
                // exist, and each listed name must resolve.
                for (operation, type_name) in [
                    ("query", definition.query),
                    ("mutation", definition.mutation),
                    ("subscription", definition.subscription),
                ] {
                    if let Some(type_name) = type_name
                        && !self.types.contains_key(type_name)
                    {
                        return Err(SchemaBuildError::UndefinedRootType {
                            operation: operation.to_string(),
                            type_name: type_name.to_string(),
                        });
                    }
                }
                Ok(RootTypeNames {
                    query: definition.query.map(str::to_string),
                    mutation: definition.mutation.map(str::to_string),
                    subscription: definition.subscription.map(str::to_string),
                })
            }
            // Without a schema block, a root exists iff a type with the
            // conventional name does.
            None => Ok(RootTypeNames {
                query: self.defaulted_root("Query"),
                mutation: self.defaulted_root("Mutation"),
                subscription: self.defaulted_root("Subscription"),
            }),
        }
    }

    fn defaulted_root(&self, conventional_name: &str) -> Option<String> {
        self.types
            .contains_key(conventional_name)
            .then(|| conventional_name.to_string())
    }

    /// Checks that every type name referenced anywhere inside the schema
    /// resolves to a declared type, so extraction never has to handle a
    /// dangling schema-side reference.
    fn validate_references(&self) -> Result<()> {
        for type_def in self.types.values() {
            match type_def {
                TypeDefinition::Object(object) => {
                    self.validate_fielded_type(&object.name, &object.fields, &object.interfaces)?;
                }
                TypeDefinition::Interface(interface) => {
                    self.validate_fielded_type(
                        &interface.name,
                        &interface.fields,
                        &interface.interfaces,
                    )?;
                }
                TypeDefinition::Union(union_type) => {
                    for member in &union_type.members {
                        if !self.types.contains_key(member) {
                            return Err(SchemaBuildError::UndefinedUnionMember {
                                union_name: union_type.name.clone(),
                                undefined_member_name: member.clone(),
                            });
                        }
                    }
                }
                TypeDefinition::InputObject(input) => {
                    self.validate_fielded_type(&input.name, &input.fields, &[])?;
                }
                TypeDefinition::Enum(_) | TypeDefinition::Scalar(_) => {}
            }
        }
        Ok(())
    }

    fn validate_fielded_type(
        &self,
        type_name: &str,
        fields: &IndexMap<String, FieldDefinition>,
        interfaces: &[String],
    ) -> Result<()> {
        for interface_name in interfaces {
            if !self.types.contains_key(interface_name) {
                return Err(SchemaBuildError::ImplementsUndefinedInterface {
                    type_name: type_name.to_string(),
                    undefined_interface_name: interface_name.clone(),
                });
            }
        }

        for field in fields.values() {
            let return_type = field.field_type.innermost_named_type();
            if !self.types.contains_key(return_type) {
                return Err(SchemaBuildError::UndefinedFieldType {
                    type_name: type_name.to_string(),
                    field_name: field.name.clone(),
                    undefined_type_name: return_type.to_string(),
                });
            }
            for argument in &field.arguments {
                let argument_type = argument.argument_type.innermost_named_type();
                if !self.types.contains_key(argument_type) {
                    return Err(SchemaBuildError::UndefinedArgumentType {
                        type_name: type_name.to_string(),
                        field_name: field.name.clone(),
                        argument_name: argument.name.clone(),
                        undefined_type_name: argument_type.to_string(),
                    });
                }
            }
        }
        Ok(())
    }

    fn collect_interface_implementers(&self) -> IndexMap<String, Vec<String>> {
        let mut implementers: IndexMap<String, Vec<String>> = IndexMap::new();
        for type_def in self.types.values() {
            let (name, interfaces) = match type_def {
                TypeDefinition::Object(object) => (&object.name, &object.interfaces),
                TypeDefinition::Interface(interface) => (&interface.name, &interface.interfaces),
                _ => continue,
            };
            for interface_name in interfaces {
                let entry = implementers.entry(interface_name.clone()).or_default();
                if !entry.contains(name) {
                    entry.push(name.clone());
                }
            }
        }
        implementers
    }
}

fn build_field_map(
    type_name: &str,
    fields: &[ast::FieldDefinition<'_>],
) -> Result<IndexMap<String, FieldDefinition>> {
    let mut map = IndexMap::new();
    merge_fields(type_name, &mut map, fields)?;
    Ok(map)
}

fn build_input_field_map(
    type_name: &str,
    fields: &[ast::InputValueDefinition<'_>],
) -> Result<IndexMap<String, FieldDefinition>> {
    let mut map = IndexMap::new();
    merge_input_fields(type_name, &mut map, fields)?;
    Ok(map)
}

fn merge_fields(
    type_name: &str,
    map: &mut IndexMap<String, FieldDefinition>,
    fields: &[ast::FieldDefinition<'_>],
) -> Result<()> {
    for field in fields {
        let previous = map.insert(field.name.to_string(), FieldDefinition::from_ast(field));
        if previous.is_some() {
            return Err(SchemaBuildError::DuplicateFieldDefinition {
                type_name: type_name.to_string(),
                field_name: field.name.to_string(),
            });
        }
    }
    Ok(())
}

fn merge_input_fields(
    type_name: &str,
    map: &mut IndexMap<String, FieldDefinition>,
    fields: &[ast::InputValueDefinition<'_>],
) -> Result<()> {
    for field in fields {
        let previous = map.insert(
            field.name.to_string(),
            FieldDefinition::from_input_value_ast(field),
        );
        if previous.is_some() {
            return Err(SchemaBuildError::DuplicateFieldDefinition {
                type_name: type_name.to_string(),
                field_name: field.name.to_string(),
            });
        }
    }
    Ok(())
}

fn extend_interfaces(interfaces: &mut Vec<String>, additional: &[&str]) {
    for interface_name in additional {
        if !interfaces.iter().any(|existing| existing == interface_name) {
            interfaces.push((*interface_name).to_string());
        }
    }
}

fn extension_kind(extension: &ast::TypeExtension<'_>) -> TypeKind {
    match extension {
        ast::TypeExtension::Enum(_) => TypeKind::Enum,
        ast::TypeExtension::InputObject(_) => TypeKind::InputObject,
        ast::TypeExtension::Interface(_) => TypeKind::Interface,
        ast::TypeExtension::Object(_) => TypeKind::Object,
        ast::TypeExtension::Scalar(_) => TypeKind::Scalar,
        ast::TypeExtension::Union(_) => TypeKind::Union,
    }
}
