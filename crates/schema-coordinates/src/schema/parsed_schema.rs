use crate::extract::CoordinateExtractor;
use crate::extract::ExtractError;
use crate::extract::ExtractionReport;
use crate::schema::RootTypeNames;
use crate::schema::SchemaBuildError;
use crate::schema::schema_builder::SchemaBuilder;
use crate::types::FieldDefinition;
use crate::types::TypeDefinition;
use indexmap::IndexMap;
use indexmap::IndexSet;
use schema_coordinates_parser::parse_schema_document;

/// A parsed, validated, immutable GraphQL schema index.
///
/// Construction is the expensive step: the SDL text is parsed, extensions
/// are merged, and every internal type reference is checked. After that the
/// index is never mutated, so one `ParsedSchema` can serve arbitrarily many
/// [`extract_schema_coordinates`](ParsedSchema::extract_schema_coordinates)
/// calls — including concurrently from multiple threads, since every
/// operation takes `&self` and per-call state lives on the caller's stack.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ParsedSchema {
    pub(crate) types_by_name: IndexMap<String, TypeDefinition>,
    pub(crate) interface_implementers: IndexMap<String, Vec<String>>,
    pub(crate) root_type_names: RootTypeNames,
}

impl ParsedSchema {
    /// Parses and indexes SDL text.
    pub fn new(schema_text: &str) -> Result<Self, SchemaBuildError> {
        let document = parse_schema_document(schema_text)?;
        SchemaBuilder::build(&document)
    }

    /// Extracts the set of schema coordinates the given operation document
    /// references, without executing it.
    ///
    /// The result is deduplicated and produced in a deterministic
    /// (insertion) order, but callers must not depend on any particular
    /// ordering. Extraction is all-or-nothing: any failure means no
    /// partial result.
    pub fn extract_schema_coordinates(
        &self,
        document_text: &str,
    ) -> Result<IndexSet<String>, ExtractError> {
        CoordinateExtractor::new(self)
            .extract(document_text)
            .map(|outcome| outcome.coordinates)
    }

    /// Like [`extract_schema_coordinates`](Self::extract_schema_coordinates),
    /// but wraps the result in a serializable [`ExtractionReport`].
    pub fn extract_report(&self, document_text: &str) -> Result<ExtractionReport, ExtractError> {
        CoordinateExtractor::new(self)
            .extract(document_text)
            .map(|outcome| ExtractionReport {
                coordinates: outcome.coordinates.into_iter().collect(),
                operation_count: outcome.operation_count,
            })
    }

    /// Whether `coordinate` (a `Type.field` string) names a field declared
    /// *directly* on that exact type.
    ///
    /// The check is structural per the named type only: no interface or
    /// union narrowing, no meta-fields. Total — malformed input (no `.`,
    /// unknown type or field) yields `false`, never an error.
    pub fn has_field(&self, coordinate: &str) -> bool {
        match coordinate.split_once('.') {
            Some((type_name, field_name)) => self
                .types_by_name
                .get(type_name)
                .is_some_and(|type_def| type_def.field(field_name).is_some()),
            None => false,
        }
    }

    /// Looks up a type by name.
    pub fn type_definition(&self, type_name: &str) -> Option<&TypeDefinition> {
        self.types_by_name.get(type_name)
    }

    /// The resolved root operation type names.
    pub fn root_type_names(&self) -> &RootTypeNames {
        &self.root_type_names
    }

    /// Names of the object/interface types that declare they implement the
    /// given interface.
    pub fn interface_implementers(&self, interface_name: &str) -> &[String] {
        self.interface_implementers
            .get(interface_name)
            .map_or(&[], Vec::as_slice)
    }

    pub(crate) fn field_on_type(
        &self,
        type_name: &str,
        field_name: &str,
    ) -> Option<&FieldDefinition> {
        self.types_by_name.get(type_name)?.field(field_name)
    }
}
