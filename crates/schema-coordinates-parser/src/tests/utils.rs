use crate::ast::ExecutableDocument;
use crate::ast::SchemaDocument;
use crate::ParseError;

pub(crate) fn parse_schema(source: &str) -> SchemaDocument<'_> {
    crate::parse_schema_document(source).expect("schema should parse")
}

pub(crate) fn parse_schema_err(source: &str) -> ParseError {
    crate::parse_schema_document(source).expect_err("schema parse should fail")
}

pub(crate) fn parse_document(source: &str) -> ExecutableDocument<'_> {
    crate::parse_executable_document(source).expect("document should parse")
}

pub(crate) fn parse_document_err(source: &str) -> ParseError {
    crate::parse_executable_document(source).expect_err("document parse should fail")
}
