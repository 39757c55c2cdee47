//! Tests for index construction: root resolution, extension merging, and
//! reference validation.

use crate::schema::ParsedSchema;
use crate::schema::SchemaBuildError;
use crate::types::TypeKind;

fn build(schema_text: &str) -> ParsedSchema {
    ParsedSchema::new(schema_text).expect("schema should build")
}

fn build_err(schema_text: &str) -> SchemaBuildError {
    ParsedSchema::new(schema_text).expect_err("schema build should fail")
}

#[test]
fn explicit_schema_block_sets_root_type_names() {
    let schema = build(
        "schema { query: Root mutation: Mutate }
         type Root { ping: String }
         type Mutate { pong: String }",
    );
    assert_eq!(schema.root_type_names().query(), Some("Root"));
    assert_eq!(schema.root_type_names().mutation(), Some("Mutate"));
    assert_eq!(schema.root_type_names().subscription(), None);
}

#[test]
fn roots_default_to_conventionally_named_types() {
    let schema = build(
        "type Query { ping: String }
         type Mutation { pong: String }",
    );
    assert_eq!(schema.root_type_names().query(), Some("Query"));
    assert_eq!(schema.root_type_names().mutation(), Some("Mutation"));
    // No Subscription type declared, so no subscription root — and that is
    // not a construction error.
    assert_eq!(schema.root_type_names().subscription(), None);
}

#[test]
fn schema_block_listing_an_undefined_type_is_an_error() {
    let error = build_err("schema { query: Missing } type Query { ping: String }");
    assert_eq!(
        error,
        SchemaBuildError::UndefinedRootType {
            operation: "query".to_string(),
            type_name: "Missing".to_string(),
        },
    );
}

#[test]
fn duplicate_schema_definition_is_an_error() {
    let error = build_err(
        "schema { query: Query } schema { query: Query } type Query { ping: String }",
    );
    assert_eq!(error, SchemaBuildError::DuplicateSchemaDefinition);
}

#[test]
fn duplicate_type_definition_is_an_error() {
    let error = build_err(
        "type Query { ping: String }
         type Thing { a: String }
         type Thing { b: String }",
    );
    assert_eq!(
        error,
        SchemaBuildError::DuplicateTypeDefinition {
            type_name: "Thing".to_string(),
        },
    );
}

#[test]
fn duplicate_type_definition_across_kinds_is_an_error() {
    let error = build_err(
        "type Query { ping: String }
         type Thing { a: String }
         enum Thing { A }",
    );
    assert_eq!(
        error,
        SchemaBuildError::DuplicateTypeDefinition {
            type_name: "Thing".to_string(),
        },
    );
}

#[test]
fn duplicate_field_within_a_declaration_is_an_error() {
    let error = build_err("type Query { ping: String ping: Int }");
    assert_eq!(
        error,
        SchemaBuildError::DuplicateFieldDefinition {
            type_name: "Query".to_string(),
            field_name: "ping".to_string(),
        },
    );
}

#[test]
fn extension_field_colliding_with_the_base_is_an_error() {
    let error = build_err(
        "type Query { ping: String }
         extend type Query { ping: Int }",
    );
    assert_eq!(
        error,
        SchemaBuildError::DuplicateFieldDefinition {
            type_name: "Query".to_string(),
            field_name: "ping".to_string(),
        },
    );
}

#[test]
fn extension_of_an_undeclared_type_is_an_error() {
    let error = build_err(
        "type Query { ping: String }
         extend type Ghost { a: String }",
    );
    assert_eq!(
        error,
        SchemaBuildError::ExtensionOfUndefinedType {
            type_name: "Ghost".to_string(),
        },
    );
}

#[test]
fn extension_of_a_mismatched_kind_is_an_error() {
    let error = build_err(
        "type Query { ping: String }
         enum Color { RED }
         extend type Color { a: String }",
    );
    assert_eq!(
        error,
        SchemaBuildError::ExtensionKindMismatch {
            type_name: "Color".to_string(),
            extension_kind: TypeKind::Object,
            target_kind: TypeKind::Enum,
        },
    );
}

#[test]
fn extensions_are_order_independent() {
    let schema = build(
        "extend type Query { extra: Int }
         type Query { ping: String }",
    );
    assert!(schema.has_field("Query.extra"));
    assert!(schema.has_field("Query.ping"));
}

#[test]
fn union_extension_adds_members() {
    let schema = build(
        "type Query { pet: Pet }
         type Dog { name: String }
         type Ferret { name: String }
         union Pet = Dog
         extend union Pet = Ferret",
    );
    let Some(crate::types::TypeDefinition::Union(union_type)) = schema.type_definition("Pet")
    else {
        panic!("expected a union type");
    };
    assert_eq!(
        union_type.members(),
        ["Dog".to_string(), "Ferret".to_string()],
    );
}

#[test]
fn undefined_field_return_type_is_an_error() {
    let error = build_err("type Query { ghost: Phantom }");
    assert_eq!(
        error,
        SchemaBuildError::UndefinedFieldType {
            type_name: "Query".to_string(),
            field_name: "ghost".to_string(),
            undefined_type_name: "Phantom".to_string(),
        },
    );
}

#[test]
fn undefined_type_behind_wrappers_is_an_error() {
    let error = build_err("type Query { ghosts: [[Phantom!]!]! }");
    assert!(matches!(
        error,
        SchemaBuildError::UndefinedFieldType { undefined_type_name, .. }
            if undefined_type_name == "Phantom"
    ));
}

#[test]
fn undefined_argument_type_is_an_error() {
    let error = build_err("type Query { find(filter: GhostFilter): String }");
    assert_eq!(
        error,
        SchemaBuildError::UndefinedArgumentType {
            type_name: "Query".to_string(),
            field_name: "find".to_string(),
            argument_name: "filter".to_string(),
            undefined_type_name: "GhostFilter".to_string(),
        },
    );
}

#[test]
fn undefined_input_field_type_is_an_error() {
    let error = build_err(
        "type Query { ping: String }
         input Filter { depth: Fathoms }",
    );
    assert_eq!(
        error,
        SchemaBuildError::UndefinedFieldType {
            type_name: "Filter".to_string(),
            field_name: "depth".to_string(),
            undefined_type_name: "Fathoms".to_string(),
        },
    );
}

#[test]
fn implementing_an_undefined_interface_is_an_error() {
    let error = build_err("type Query implements Specter { ping: String }");
    assert_eq!(
        error,
        SchemaBuildError::ImplementsUndefinedInterface {
            type_name: "Query".to_string(),
            undefined_interface_name: "Specter".to_string(),
        },
    );
}

#[test]
fn undefined_union_member_is_an_error() {
    let error = build_err(
        "type Query { pet: Pet }
         type Dog { name: String }
         union Pet = Dog | Chupacabra",
    );
    assert_eq!(
        error,
        SchemaBuildError::UndefinedUnionMember {
            union_name: "Pet".to_string(),
            undefined_member_name: "Chupacabra".to_string(),
        },
    );
}

#[test]
fn builtin_scalars_are_preregistered() {
    let schema = build("type Query { a: Int b: Float c: String d: Boolean e: ID }");
    for name in ["Int", "Float", "String", "Boolean", "ID"] {
        let type_def = schema
            .type_definition(name)
            .expect("builtin scalar should be declared");
        assert_eq!(type_def.kind(), TypeKind::Scalar);
    }
}

#[test]
fn directive_declarations_are_ignored() {
    let schema = build(
        "directive @cost(weight: Int!) on FIELD_DEFINITION
         type Query { ping: String @cost(weight: 2) }",
    );
    assert!(schema.has_field("Query.ping"));
    assert!(schema.type_definition("cost").is_none());
}

#[test]
fn syntax_violations_surface_as_parse_errors() {
    let error = build_err("type { ping: String }");
    assert!(matches!(error, SchemaBuildError::Parse(_)));
}
