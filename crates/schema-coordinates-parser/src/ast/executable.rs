use crate::ast::TypeAnnotation;
use crate::ast::Value;

/// A parsed executable (operation) document.
///
/// Fragment spreads are *not* resolved at parse time: a spread may
/// reference a fragment that is defined later in the document, or not at
/// all. Consumers resolve references during their own walks.
#[derive(Clone, Debug, PartialEq)]
pub struct ExecutableDocument<'src> {
    pub definitions: Vec<ExecutableDefinition<'src>>,
}

/// A single top-level definition in an executable document.
#[derive(Clone, Debug, PartialEq)]
pub enum ExecutableDefinition<'src> {
    Operation(OperationDefinition<'src>),
    Fragment(FragmentDefinition<'src>),
}

/// The kind of an operation.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum OperationKind {
    Query,
    Mutation,
    Subscription,
}

impl OperationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationKind::Query => "query",
            OperationKind::Mutation => "mutation",
            OperationKind::Subscription => "subscription",
        }
    }
}

impl std::fmt::Display for OperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An operation definition (query, mutation, or subscription).
///
/// An anonymous top-level `{ … }` shorthand parses as a nameless
/// [`OperationKind::Query`] operation.
///
/// See [Operations](https://spec.graphql.org/October2021/#sec-Language.Operations)
/// in the spec.
#[derive(Clone, Debug, PartialEq)]
pub struct OperationDefinition<'src> {
    pub kind: OperationKind,
    pub name: Option<&'src str>,
    pub variable_definitions: Vec<VariableDefinition<'src>>,
    pub directives: Vec<DirectiveAnnotation<'src>>,
    pub selection_set: SelectionSet<'src>,
}

/// A variable definition: `$name: Type = default`.
#[derive(Clone, Debug, PartialEq)]
pub struct VariableDefinition<'src> {
    pub name: &'src str,
    pub variable_type: TypeAnnotation<'src>,
    pub default_value: Option<Value<'src>>,
    pub directives: Vec<DirectiveAnnotation<'src>>,
}

/// The `{ … }` block of selections requested at one point in a document.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectionSet<'src> {
    pub selections: Vec<Selection<'src>>,
}

/// A single selection within a selection set.
///
/// See [Selection Sets](https://spec.graphql.org/October2021/#sec-Selection-Sets)
/// in the spec.
#[derive(Clone, Debug, PartialEq)]
pub enum Selection<'src> {
    Field(Field<'src>),
    FragmentSpread(FragmentSpread<'src>),
    InlineFragment(InlineFragment<'src>),
}

/// A field selection, possibly aliased, with an optional nested selection
/// set.
#[derive(Clone, Debug, PartialEq)]
pub struct Field<'src> {
    pub alias: Option<&'src str>,
    pub name: &'src str,
    pub arguments: Vec<Argument<'src>>,
    pub directives: Vec<DirectiveAnnotation<'src>>,
    pub selection_set: Option<SelectionSet<'src>>,
}

/// A fragment spread: `...Name`.
#[derive(Clone, Debug, PartialEq)]
pub struct FragmentSpread<'src> {
    pub fragment_name: &'src str,
    pub directives: Vec<DirectiveAnnotation<'src>>,
}

/// An inline fragment: `... on T { … }` or `... { … }`.
#[derive(Clone, Debug, PartialEq)]
pub struct InlineFragment<'src> {
    pub type_condition: Option<&'src str>,
    pub directives: Vec<DirectiveAnnotation<'src>>,
    pub selection_set: SelectionSet<'src>,
}

/// A named fragment definition.
///
/// See [Fragments](https://spec.graphql.org/October2021/#sec-Language.Fragments)
/// in the spec.
#[derive(Clone, Debug, PartialEq)]
pub struct FragmentDefinition<'src> {
    pub name: &'src str,
    pub type_condition: &'src str,
    pub directives: Vec<DirectiveAnnotation<'src>>,
    pub selection_set: SelectionSet<'src>,
}

/// A directive annotation: `@name(args)`. Annotations are syntax-only for
/// this crate's consumers.
#[derive(Clone, Debug, PartialEq)]
pub struct DirectiveAnnotation<'src> {
    pub name: &'src str,
    pub arguments: Vec<Argument<'src>>,
}

/// A named argument: `name: value`.
#[derive(Clone, Debug, PartialEq)]
pub struct Argument<'src> {
    pub name: &'src str,
    pub value: Value<'src>,
}
