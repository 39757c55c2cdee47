/// A type reference as written in source: a named type, a list wrapping, or
/// a non-null wrapping.
///
/// See [Type References](https://spec.graphql.org/October2021/#sec-Type-References)
/// in the spec.
#[derive(Clone, Debug, PartialEq)]
pub enum TypeAnnotation<'src> {
    Named(&'src str),
    List(Box<TypeAnnotation<'src>>),
    NonNull(Box<TypeAnnotation<'src>>),
}

impl<'src> TypeAnnotation<'src> {
    /// The innermost named type, with all List/NonNull wrappers stripped.
    pub fn innermost_named_type(&self) -> &'src str {
        match self {
            TypeAnnotation::Named(name) => name,
            TypeAnnotation::List(inner) | TypeAnnotation::NonNull(inner) => {
                inner.innermost_named_type()
            }
        }
    }
}
