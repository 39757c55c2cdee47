/// An input value literal.
///
/// Numeric literals keep their raw source text and string literals keep
/// their unprocessed inner text: values are carried through argument and
/// default-value syntax but never evaluated by this library's consumers.
#[derive(Clone, Debug, PartialEq)]
pub enum Value<'src> {
    Variable(&'src str),
    Int(&'src str),
    Float(&'src str),
    String(&'src str),
    Boolean(bool),
    Null,
    Enum(&'src str),
    List(Vec<Value<'src>>),
    Object(Vec<(&'src str, Value<'src>)>),
}
