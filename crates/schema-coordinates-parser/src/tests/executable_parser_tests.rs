//! Tests for the executable-document grammar.

use crate::ast;
use crate::ast::OperationKind;
use crate::tests::utils::parse_document;
use crate::tests::utils::parse_document_err;

fn first_operation<'a, 'src>(
    document: &'a ast::ExecutableDocument<'src>,
) -> &'a ast::OperationDefinition<'src> {
    document
        .definitions
        .iter()
        .find_map(|definition| match definition {
            ast::ExecutableDefinition::Operation(operation) => Some(operation),
            _ => None,
        })
        .expect("document should contain an operation")
}

#[test]
fn anonymous_shorthand_is_an_implicit_query() {
    let document = parse_document("{ hello }");
    let operation = first_operation(&document);
    assert_eq!(operation.kind, OperationKind::Query);
    assert_eq!(operation.name, None);
    assert_eq!(operation.selection_set.selections.len(), 1);
}

#[test]
fn named_operations_of_every_kind() {
    let document = parse_document(
        "query GetIt { a } mutation ChangeIt { b } subscription WatchIt { c }",
    );
    let kinds_and_names: Vec<_> = document
        .definitions
        .iter()
        .map(|definition| match definition {
            ast::ExecutableDefinition::Operation(op) => (op.kind, op.name),
            ast::ExecutableDefinition::Fragment(_) => panic!("expected only operations"),
        })
        .collect();
    assert_eq!(
        kinds_and_names,
        vec![
            (OperationKind::Query, Some("GetIt")),
            (OperationKind::Mutation, Some("ChangeIt")),
            (OperationKind::Subscription, Some("WatchIt")),
        ],
    );
}

#[test]
fn multiple_anonymous_operations_parse() {
    let document = parse_document("{ a } { b }");
    assert_eq!(document.definitions.len(), 2);
}

#[test]
fn variable_definitions_with_defaults_and_directives() {
    let document = parse_document(
        r#"query Find($id: ID!, $limit: Int = 10 @tag(name: "x")) { node }"#,
    );
    let operation = first_operation(&document);
    assert_eq!(operation.variable_definitions.len(), 2);

    let id = &operation.variable_definitions[0];
    assert_eq!(id.name, "id");
    assert_eq!(id.variable_type.innermost_named_type(), "ID");

    let limit = &operation.variable_definitions[1];
    assert_eq!(limit.default_value, Some(ast::Value::Int("10")));
    assert_eq!(limit.directives.len(), 1);
}

#[test]
fn field_aliases_keep_the_schema_field_name() {
    let document = parse_document("{ renamed: user { id } }");
    let operation = first_operation(&document);
    let ast::Selection::Field(field) = &operation.selection_set.selections[0] else {
        panic!("expected a field selection");
    };
    assert_eq!(field.alias, Some("renamed"));
    assert_eq!(field.name, "user");
    assert!(field.selection_set.is_some());
}

#[test]
fn field_arguments_accept_every_value_form() {
    let document = parse_document(
        r#"{ search(text: "cat", first: 10, weight: 0.5, live: true, after: null,
                   order: DESC, tags: [1, 2], where: { depth: $d }) }"#,
    );
    let operation = first_operation(&document);
    let ast::Selection::Field(field) = &operation.selection_set.selections[0] else {
        panic!("expected a field selection");
    };
    let values: Vec<&ast::Value<'_>> = field
        .arguments
        .iter()
        .map(|argument| &argument.value)
        .collect();
    assert_eq!(
        values,
        vec![
            &ast::Value::String("cat"),
            &ast::Value::Int("10"),
            &ast::Value::Float("0.5"),
            &ast::Value::Boolean(true),
            &ast::Value::Null,
            &ast::Value::Enum("DESC"),
            &ast::Value::List(vec![ast::Value::Int("1"), ast::Value::Int("2")]),
            &ast::Value::Object(vec![("depth", ast::Value::Variable("d"))]),
        ],
    );
}

#[test]
fn fragment_definition_and_spread() {
    let document = parse_document(
        "{ pets { ...petFields @include(if: true) } } fragment petFields on Pet { name }",
    );

    let operation = first_operation(&document);
    let ast::Selection::Field(pets) = &operation.selection_set.selections[0] else {
        panic!("expected a field selection");
    };
    let nested = pets.selection_set.as_ref().expect("should have selections");
    let ast::Selection::FragmentSpread(spread) = &nested.selections[0] else {
        panic!("expected a fragment spread");
    };
    assert_eq!(spread.fragment_name, "petFields");
    assert_eq!(spread.directives.len(), 1);

    let ast::ExecutableDefinition::Fragment(fragment) = &document.definitions[1] else {
        panic!("expected a fragment definition");
    };
    assert_eq!(fragment.name, "petFields");
    assert_eq!(fragment.type_condition, "Pet");
}

#[test]
fn inline_fragment_with_type_condition() {
    let document = parse_document("{ pets { ... on Dog { breed } } }");
    let operation = first_operation(&document);
    let ast::Selection::Field(pets) = &operation.selection_set.selections[0] else {
        panic!("expected a field selection");
    };
    let nested = pets.selection_set.as_ref().expect("should have selections");
    let ast::Selection::InlineFragment(inline) = &nested.selections[0] else {
        panic!("expected an inline fragment");
    };
    assert_eq!(inline.type_condition, Some("Dog"));
}

#[test]
fn inline_fragment_without_type_condition() {
    let document = parse_document("{ pets { ... @include(if: $expanded) { name } } }");
    let operation = first_operation(&document);
    let ast::Selection::Field(pets) = &operation.selection_set.selections[0] else {
        panic!("expected a field selection");
    };
    let nested = pets.selection_set.as_ref().expect("should have selections");
    let ast::Selection::InlineFragment(inline) = &nested.selections[0] else {
        panic!("expected an inline fragment");
    };
    assert_eq!(inline.type_condition, None);
    assert_eq!(inline.directives.len(), 1);
}

#[test]
fn fragment_named_on_is_an_error() {
    let error = parse_document_err("fragment on on Pet { name }");
    assert_eq!(error.message, "Expected a fragment name, found `on`");
}

#[test]
fn empty_selection_set_is_an_error() {
    let error = parse_document_err("{ }");
    assert_eq!(error.message, "Expected a field name, found `}`");
}

#[test]
fn unclosed_selection_set_is_an_error() {
    let error = parse_document_err("{ hello ");
    assert_eq!(error.message, "Expected a field name, found end of input");
}

#[test]
fn sdl_syntax_is_rejected_in_executable_documents() {
    let error = parse_document_err("type Query { hello: String }");
    assert_eq!(
        error.message,
        "Expected an operation or fragment definition, found `type`",
    );
}

#[test]
fn variable_in_variable_default_is_an_error() {
    let error = parse_document_err("query Q($a: Int = $b) { f }");
    assert_eq!(error.message, "Variables are not allowed here");
}
