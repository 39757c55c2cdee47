use schema_coordinates_parser::ast;

/// The annotated return type of a [`FieldDefinition`](crate::FieldDefinition)
/// or [`ArgumentDefinition`](crate::types::ArgumentDefinition): a named type
/// with its List/NonNull wrapping.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum TypeAnnotation {
    List {
        inner: Box<TypeAnnotation>,
        nullable: bool,
    },
    Named {
        name: String,
        nullable: bool,
    },
}

impl TypeAnnotation {
    pub(crate) fn from_ast(ast_type: &ast::TypeAnnotation<'_>) -> Self {
        Self::from_ast_impl(ast_type, /* nullable = */ true)
    }

    fn from_ast_impl(ast_type: &ast::TypeAnnotation<'_>, nullable: bool) -> Self {
        match ast_type {
            ast::TypeAnnotation::Named(name) => TypeAnnotation::Named {
                name: (*name).to_string(),
                nullable,
            },
            ast::TypeAnnotation::List(inner) => TypeAnnotation::List {
                inner: Box::new(Self::from_ast_impl(inner, true)),
                nullable,
            },
            ast::TypeAnnotation::NonNull(inner) => Self::from_ast_impl(inner, false),
        }
    }

    /// The innermost named type, with all List/NonNull wrappers stripped.
    ///
    /// This is the type a nested selection set resolves against.
    pub fn innermost_named_type(&self) -> &str {
        match self {
            TypeAnnotation::Named { name, .. } => name,
            TypeAnnotation::List { inner, .. } => inner.innermost_named_type(),
        }
    }

    /// Whether the outermost wrapping of this annotation is nullable.
    pub fn nullable(&self) -> bool {
        match self {
            TypeAnnotation::List { nullable, .. } | TypeAnnotation::Named { nullable, .. } => {
                *nullable
            }
        }
    }
}

impl std::fmt::Display for TypeAnnotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TypeAnnotation::List { inner, nullable } => {
                write!(f, "[{inner}]{}", if *nullable { "" } else { "!" })
            }
            TypeAnnotation::Named { name, nullable } => {
                write!(f, "{name}{}", if *nullable { "" } else { "!" })
            }
        }
    }
}
