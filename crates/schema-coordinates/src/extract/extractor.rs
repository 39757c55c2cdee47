use crate::extract::ExtractError;
use crate::schema::ParsedSchema;
use indexmap::IndexMap;
use indexmap::IndexSet;
use schema_coordinates_parser::ast;
use schema_coordinates_parser::parse_executable_document;
use smallvec::SmallVec;

type Result<T> = std::result::Result<T, ExtractError>;

/// The fragment-visiting stack threaded through the resolver for cycle
/// detection. Fragment chains are almost always shallow, so the stack
/// stays inline.
type VisitingStack<'doc> = SmallVec<[&'doc str; 8]>;

pub(crate) struct ExtractOutcome {
    pub(crate) coordinates: IndexSet<String>,
    pub(crate) operation_count: usize,
}

/// Walks an operation document against a [`ParsedSchema`], emitting a
/// coordinate for every schema field the document selects.
///
/// The walk is a pure recursive descent parameterized by the current type
/// context and the visiting stack; there is no other state, so the
/// extractor is reentrant and per-call state never outlives the call.
pub(crate) struct CoordinateExtractor<'schema> {
    schema: &'schema ParsedSchema,
}

impl<'schema> CoordinateExtractor<'schema> {
    pub(crate) fn new(schema: &'schema ParsedSchema) -> Self {
        Self { schema }
    }

    pub(crate) fn extract(&self, document_text: &str) -> Result<ExtractOutcome> {
        let document = parse_executable_document(document_text)?;

        let mut fragments: IndexMap<&str, &ast::FragmentDefinition<'_>> = IndexMap::new();
        for definition in &document.definitions {
            if let ast::ExecutableDefinition::Fragment(fragment) = definition {
                // The first definition wins on a duplicate name.
                fragments.entry(fragment.name).or_insert(fragment);
            }
        }

        let mut coordinates = IndexSet::new();
        let mut operation_count = 0;
        for definition in &document.definitions {
            if let ast::ExecutableDefinition::Operation(operation) = definition {
                operation_count += 1;
                self.extract_operation(operation, &fragments, &mut coordinates)?;
            }
        }

        Ok(ExtractOutcome {
            coordinates,
            operation_count,
        })
    }

    fn extract_operation<'doc>(
        &'doc self,
        operation: &'doc ast::OperationDefinition<'doc>,
        fragments: &IndexMap<&'doc str, &'doc ast::FragmentDefinition<'doc>>,
        coordinates: &mut IndexSet<String>,
    ) -> Result<()> {
        let Some(root_type) = self.schema.root_type_names().for_operation(operation.kind) else {
            return Err(ExtractError::RootTypeMissing {
                operation: operation.kind,
            });
        };

        let mut visiting = VisitingStack::new();
        self.resolve_selection_set(
            &operation.selection_set,
            root_type,
            fragments,
            &mut visiting,
            coordinates,
        )
    }

    fn resolve_selection_set<'doc>(
        &'doc self,
        selection_set: &'doc ast::SelectionSet<'doc>,
        current_type: &'doc str,
        fragments: &IndexMap<&'doc str, &'doc ast::FragmentDefinition<'doc>>,
        visiting: &mut VisitingStack<'doc>,
        coordinates: &mut IndexSet<String>,
    ) -> Result<()> {
        for selection in &selection_set.selections {
            match selection {
                ast::Selection::Field(field) => {
                    if self.is_meta_field(current_type, field.name) {
                        continue;
                    }

                    let Some(field_def) = self.schema.field_on_type(current_type, field.name)
                    else {
                        return Err(ExtractError::FieldNotFound {
                            type_name: current_type.to_string(),
                            field_name: field.name.to_string(),
                        });
                    };
                    coordinates.insert(format!("{current_type}.{}", field.name));

                    if let Some(nested) = &field.selection_set {
                        // The nested set resolves against the field's
                        // declared return type, List/NonNull wrappers
                        // stripped.
                        let inner_type = field_def.field_type().innermost_named_type();
                        self.resolve_selection_set(
                            nested,
                            inner_type,
                            fragments,
                            visiting,
                            coordinates,
                        )?;
                    }
                }

                // An inline fragment narrows the type context when it has a
                // type condition; it emits no coordinate itself.
                ast::Selection::InlineFragment(inline) => {
                    let context = inline.type_condition.unwrap_or(current_type);
                    self.resolve_selection_set(
                        &inline.selection_set,
                        context,
                        fragments,
                        visiting,
                        coordinates,
                    )?;
                }

                // A fragment always switches context to its own type
                // condition, independent of the spread site.
                ast::Selection::FragmentSpread(spread) => {
                    let Some(fragment) = fragments.get(spread.fragment_name).copied() else {
                        return Err(ExtractError::UndefinedFragment {
                            fragment_name: spread.fragment_name.to_string(),
                        });
                    };
                    if visiting.contains(&spread.fragment_name) {
                        return Err(ExtractError::CyclicFragment {
                            fragment_name: spread.fragment_name.to_string(),
                        });
                    }

                    visiting.push(spread.fragment_name);
                    self.resolve_selection_set(
                        &fragment.selection_set,
                        fragment.type_condition,
                        fragments,
                        visiting,
                        coordinates,
                    )?;
                    visiting.pop();
                }
            }
        }
        Ok(())
    }

    /// Meta-fields are uniformly suppressed: they emit no coordinate and
    /// their selections (if any) are not descended. `__typename` is valid
    /// on every type; `__schema` and `__type` only on the query root.
    fn is_meta_field(&self, current_type: &str, field_name: &str) -> bool {
        match field_name {
            "__typename" => true,
            "__schema" | "__type" => {
                self.schema.root_type_names().query() == Some(current_type)
            }
            _ => false,
        }
    }
}
