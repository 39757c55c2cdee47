use schema_coordinates_parser::ast::OperationKind;

/// The resolved root operation type names of a schema.
///
/// With an explicit `schema {}` block, exactly the listed roots are
/// present. Without one, each root defaults to the type literally named
/// `Query`/`Mutation`/`Subscription` — if such a type exists.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct RootTypeNames {
    pub(crate) query: Option<String>,
    pub(crate) mutation: Option<String>,
    pub(crate) subscription: Option<String>,
}

impl RootTypeNames {
    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    pub fn mutation(&self) -> Option<&str> {
        self.mutation.as_deref()
    }

    pub fn subscription(&self) -> Option<&str> {
        self.subscription.as_deref()
    }

    /// The root type name an operation of the given kind resolves against.
    pub fn for_operation(&self, kind: OperationKind) -> Option<&str> {
        match kind {
            OperationKind::Query => self.query(),
            OperationKind::Mutation => self.mutation(),
            OperationKind::Subscription => self.subscription(),
        }
    }
}
