//! The SDL (type-system document) grammar.

use crate::ast::DirectiveDefinition;
use crate::ast::EnumTypeDefinition;
use crate::ast::FieldDefinition;
use crate::ast::InputObjectTypeDefinition;
use crate::ast::InterfaceTypeDefinition;
use crate::ast::ObjectTypeDefinition;
use crate::ast::ScalarTypeDefinition;
use crate::ast::SchemaDefinition;
use crate::ast::SchemaDocument;
use crate::ast::TypeDefinition;
use crate::ast::TypeExtension;
use crate::ast::TypeSystemDefinition;
use crate::ast::UnionTypeDefinition;
use crate::parser::Parser;
use crate::ParseError;
use crate::TokenKind;

type Result<T> = std::result::Result<T, ParseError>;

/// Parses SDL text into a [`SchemaDocument`].
///
/// Fail-fast: any syntax violation aborts the whole parse; no partial
/// document is ever returned.
pub fn parse_schema_document(source: &str) -> Result<SchemaDocument<'_>> {
    let mut parser = Parser::new(source)?;
    let mut definitions = vec![];
    while !parser.at_eof() {
        definitions.push(parser.parse_type_system_definition()?);
    }
    Ok(SchemaDocument { definitions })
}

impl<'src> Parser<'src> {
    fn parse_type_system_definition(&mut self) -> Result<TypeSystemDefinition<'src>> {
        self.eat_description()?;
        let Some(keyword) = self.peek_name() else {
            return Err(self.error_expected("a type system definition"));
        };
        match keyword {
            "schema" => self
                .parse_schema_definition()
                .map(TypeSystemDefinition::Schema),
            "scalar" => self
                .parse_scalar_type()
                .map(|def| TypeSystemDefinition::Type(TypeDefinition::Scalar(def))),
            "type" => self
                .parse_object_type()
                .map(|def| TypeSystemDefinition::Type(TypeDefinition::Object(def))),
            "interface" => self
                .parse_interface_type()
                .map(|def| TypeSystemDefinition::Type(TypeDefinition::Interface(def))),
            "union" => self
                .parse_union_type()
                .map(|def| TypeSystemDefinition::Type(TypeDefinition::Union(def))),
            "enum" => self
                .parse_enum_type()
                .map(|def| TypeSystemDefinition::Type(TypeDefinition::Enum(def))),
            "input" => self
                .parse_input_object_type()
                .map(|def| TypeSystemDefinition::Type(TypeDefinition::InputObject(def))),
            "directive" => self
                .parse_directive_definition()
                .map(TypeSystemDefinition::Directive),
            "extend" => self
                .parse_type_extension()
                .map(TypeSystemDefinition::TypeExtension),
            _ => Err(self.error_expected("a type system definition")),
        }
    }

    /// `schema Directives? { (query|mutation|subscription): Name … }`
    fn parse_schema_definition(&mut self) -> Result<SchemaDefinition<'src>> {
        self.expect_keyword("schema")?;
        let directives = self.parse_directive_annotations(true)?;
        self.expect(&TokenKind::CurlyBraceOpen)?;

        let mut query = None;
        let mut mutation = None;
        let mut subscription = None;
        loop {
            let position = self.current_position();
            let operation =
                self.expect_name("an operation type (`query`, `mutation`, or `subscription`)")?;
            self.expect(&TokenKind::Colon)?;
            let type_name = self.expect_name("a type name")?;

            let slot = match operation {
                "query" => &mut query,
                "mutation" => &mut mutation,
                "subscription" => &mut subscription,
                _ => {
                    return Err(ParseError::new(
                        format!("Unknown operation type `{operation}` in schema definition"),
                        position,
                    ));
                }
            };
            if slot.is_some() {
                return Err(ParseError::new(
                    format!("Duplicate `{operation}` root operation type"),
                    position,
                ));
            }
            *slot = Some(type_name);

            if self.eat(&TokenKind::CurlyBraceClose)? {
                break;
            }
        }

        Ok(SchemaDefinition {
            directives,
            query,
            mutation,
            subscription,
        })
    }

    fn parse_scalar_type(&mut self) -> Result<ScalarTypeDefinition<'src>> {
        self.expect_keyword("scalar")?;
        let name = self.expect_name("a type name")?;
        let directives = self.parse_directive_annotations(true)?;
        Ok(ScalarTypeDefinition { name, directives })
    }

    fn parse_object_type(&mut self) -> Result<ObjectTypeDefinition<'src>> {
        self.expect_keyword("type")?;
        let name = self.expect_name("a type name")?;
        let implements = self.parse_implements_interfaces()?;
        let directives = self.parse_directive_annotations(true)?;
        let fields = self.parse_field_definitions()?;
        Ok(ObjectTypeDefinition {
            name,
            implements,
            directives,
            fields,
        })
    }

    fn parse_interface_type(&mut self) -> Result<InterfaceTypeDefinition<'src>> {
        self.expect_keyword("interface")?;
        let name = self.expect_name("a type name")?;
        let implements = self.parse_implements_interfaces()?;
        let directives = self.parse_directive_annotations(true)?;
        let fields = self.parse_field_definitions()?;
        Ok(InterfaceTypeDefinition {
            name,
            implements,
            directives,
            fields,
        })
    }

    fn parse_union_type(&mut self) -> Result<UnionTypeDefinition<'src>> {
        self.expect_keyword("union")?;
        let name = self.expect_name("a type name")?;
        let directives = self.parse_directive_annotations(true)?;

        let mut members = vec![];
        if self.eat(&TokenKind::Equals)? {
            // Optional leading `|`.
            self.eat(&TokenKind::Pipe)?;
            members.push(self.expect_name("a member type name")?);
            while self.eat(&TokenKind::Pipe)? {
                members.push(self.expect_name("a member type name")?);
            }
        }
        Ok(UnionTypeDefinition {
            name,
            directives,
            members,
        })
    }

    fn parse_enum_type(&mut self) -> Result<EnumTypeDefinition<'src>> {
        self.expect_keyword("enum")?;
        let name = self.expect_name("a type name")?;
        let directives = self.parse_directive_annotations(true)?;

        let mut values = vec![];
        if self.eat(&TokenKind::CurlyBraceOpen)? {
            loop {
                self.eat_description()?;
                values.push(self.expect_name("an enum value")?);
                // Per-value directives (e.g. @deprecated) are syntax only.
                self.parse_directive_annotations(true)?;
                if self.eat(&TokenKind::CurlyBraceClose)? {
                    break;
                }
            }
        }
        Ok(EnumTypeDefinition {
            name,
            directives,
            values,
        })
    }

    fn parse_input_object_type(&mut self) -> Result<InputObjectTypeDefinition<'src>> {
        self.expect_keyword("input")?;
        let name = self.expect_name("a type name")?;
        let directives = self.parse_directive_annotations(true)?;

        let mut fields = vec![];
        if self.eat(&TokenKind::CurlyBraceOpen)? {
            loop {
                fields.push(self.parse_input_value_definition("an input field name")?);
                if self.eat(&TokenKind::CurlyBraceClose)? {
                    break;
                }
            }
        }
        Ok(InputObjectTypeDefinition {
            name,
            directives,
            fields,
        })
    }

    /// `directive @Name ArgumentDefinitions? repeatable? on LOC | LOC …`
    fn parse_directive_definition(&mut self) -> Result<DirectiveDefinition<'src>> {
        self.expect_keyword("directive")?;
        self.expect(&TokenKind::At)?;
        let name = self.expect_name("a directive name")?;
        let arguments = if self.at(&TokenKind::ParenOpen) {
            self.parse_argument_definitions()?
        } else {
            vec![]
        };
        let repeatable = self.eat_keyword("repeatable")?;
        self.expect_keyword("on")?;

        // Optional leading `|`.
        self.eat(&TokenKind::Pipe)?;
        let mut locations = vec![self.expect_name("a directive location")?];
        while self.eat(&TokenKind::Pipe)? {
            locations.push(self.expect_name("a directive location")?);
        }
        Ok(DirectiveDefinition {
            name,
            arguments,
            repeatable,
            locations,
        })
    }

    fn parse_type_extension(&mut self) -> Result<TypeExtension<'src>> {
        self.expect_keyword("extend")?;
        let Some(keyword) = self.peek_name() else {
            return Err(self.error_expected("a type keyword after `extend`"));
        };
        match keyword {
            "scalar" => self.parse_scalar_type().map(TypeExtension::Scalar),
            "type" => self.parse_object_type().map(TypeExtension::Object),
            "interface" => self.parse_interface_type().map(TypeExtension::Interface),
            "union" => self.parse_union_type().map(TypeExtension::Union),
            "enum" => self.parse_enum_type().map(TypeExtension::Enum),
            "input" => self.parse_input_object_type().map(TypeExtension::InputObject),
            _ => Err(self.error_expected("a type keyword after `extend`")),
        }
    }

    /// `implements &? Name (& Name)*`
    fn parse_implements_interfaces(&mut self) -> Result<Vec<&'src str>> {
        let mut interfaces = vec![];
        if self.eat_keyword("implements")? {
            // Optional leading `&`.
            self.eat(&TokenKind::Ampersand)?;
            interfaces.push(self.expect_name("an interface name")?);
            while self.eat(&TokenKind::Ampersand)? {
                interfaces.push(self.expect_name("an interface name")?);
            }
        }
        Ok(interfaces)
    }

    /// Parses an optional `{ FieldDefinition+ }` block; `type Foo` with no
    /// block at all is valid SDL.
    fn parse_field_definitions(&mut self) -> Result<Vec<FieldDefinition<'src>>> {
        let mut fields = vec![];
        if self.eat(&TokenKind::CurlyBraceOpen)? {
            loop {
                fields.push(self.parse_field_definition()?);
                if self.eat(&TokenKind::CurlyBraceClose)? {
                    break;
                }
            }
        }
        Ok(fields)
    }

    fn parse_field_definition(&mut self) -> Result<FieldDefinition<'src>> {
        self.eat_description()?;
        let name = self.expect_name("a field name")?;
        let arguments = if self.at(&TokenKind::ParenOpen) {
            self.parse_argument_definitions()?
        } else {
            vec![]
        };
        self.expect(&TokenKind::Colon)?;
        let field_type = self.parse_type_annotation()?;
        let directives = self.parse_directive_annotations(true)?;
        Ok(FieldDefinition {
            name,
            arguments,
            field_type,
            directives,
        })
    }
}
