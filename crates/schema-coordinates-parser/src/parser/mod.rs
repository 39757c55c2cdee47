//! Recursive descent parsers for GraphQL documents.
//!
//! [`Parser`] holds the shared single-token-lookahead machinery and the
//! grammar rules common to both document kinds (type annotations, values,
//! directive annotations, argument lists). The SDL grammar lives in
//! [`schema`], the query-language grammar in [`executable`].
//!
//! Both parsers are fail-fast: the first syntax violation aborts the parse
//! with a [`ParseError`] and no partial AST.

mod executable;
mod schema;

pub use executable::parse_executable_document;
pub use schema::parse_schema_document;

use crate::ast::Argument;
use crate::ast::DirectiveAnnotation;
use crate::ast::InputValueDefinition;
use crate::ast::TypeAnnotation;
use crate::ast::Value;
use crate::Lexer;
use crate::ParseError;
use crate::Token;
use crate::TokenKind;

type Result<T> = std::result::Result<T, ParseError>;

pub(crate) struct Parser<'src> {
    lexer: Lexer<'src>,
    current: Token<'src>,
}

impl<'src> Parser<'src> {
    fn new(source: &'src str) -> Result<Self> {
        let mut lexer = Lexer::new(source);
        let current = lexer.next_token()?;
        Ok(Self { lexer, current })
    }

    /// Consumes the current token and returns it, pulling the next one from
    /// the lexer.
    fn advance(&mut self) -> Result<Token<'src>> {
        let next = self.lexer.next_token()?;
        Ok(std::mem::replace(&mut self.current, next))
    }

    fn at(&self, kind: &TokenKind<'src>) -> bool {
        self.current.kind == *kind
    }

    fn current_position(&self) -> crate::SourcePosition {
        self.current.position
    }

    fn at_eof(&self) -> bool {
        self.current.kind == TokenKind::Eof
    }

    /// Consumes the current token iff it matches `kind`.
    fn eat(&mut self, kind: &TokenKind<'src>) -> Result<bool> {
        if self.at(kind) {
            self.advance()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    fn expect(&mut self, kind: &TokenKind<'src>) -> Result<()> {
        if self.at(kind) {
            self.advance()?;
            Ok(())
        } else {
            Err(self.error_expected(&kind.describe()))
        }
    }

    fn peek_name(&self) -> Option<&'src str> {
        match self.current.kind {
            TokenKind::Name(name) => Some(name),
            _ => None,
        }
    }

    fn expect_name(&mut self, what: &str) -> Result<&'src str> {
        match self.current.kind {
            TokenKind::Name(name) => {
                self.advance()?;
                Ok(name)
            }
            _ => Err(self.error_expected(what)),
        }
    }

    /// Consumes the current token iff it is the given keyword (a `Name`
    /// token with exactly that text).
    fn eat_keyword(&mut self, keyword: &str) -> Result<bool> {
        if self.peek_name() == Some(keyword) {
            self.advance()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    fn expect_keyword(&mut self, keyword: &str) -> Result<()> {
        if self.peek_name() == Some(keyword) {
            self.advance()?;
            Ok(())
        } else {
            Err(self.error_expected(&format!("`{keyword}`")))
        }
    }

    /// Consumes an optional description string. Descriptions carry no
    /// semantic weight and are discarded.
    fn eat_description(&mut self) -> Result<()> {
        if matches!(self.current.kind, TokenKind::StringValue(_)) {
            self.advance()?;
        }
        Ok(())
    }

    fn error_expected(&self, what: &str) -> ParseError {
        ParseError::new(
            format!("Expected {what}, found {}", self.current.kind.describe()),
            self.current.position,
        )
    }

    // =========================================================================
    // Grammar rules shared by both document kinds
    // =========================================================================

    /// Parses a type reference: `Name`, `[Type]`, with optional `!` wrappers.
    fn parse_type_annotation(&mut self) -> Result<TypeAnnotation<'src>> {
        let inner = if self.eat(&TokenKind::SquareBracketOpen)? {
            let inner = self.parse_type_annotation()?;
            self.expect(&TokenKind::SquareBracketClose)?;
            TypeAnnotation::List(Box::new(inner))
        } else {
            TypeAnnotation::Named(self.expect_name("a type name")?)
        };

        Ok(if self.eat(&TokenKind::Bang)? {
            TypeAnnotation::NonNull(Box::new(inner))
        } else {
            inner
        })
    }

    /// Parses zero or more `@directive(args)` annotations.
    fn parse_directive_annotations(
        &mut self,
        const_context: bool,
    ) -> Result<Vec<DirectiveAnnotation<'src>>> {
        let mut directives = vec![];
        while self.eat(&TokenKind::At)? {
            let name = self.expect_name("a directive name")?;
            let arguments = if self.at(&TokenKind::ParenOpen) {
                self.parse_arguments(const_context)?
            } else {
                vec![]
            };
            directives.push(DirectiveAnnotation { name, arguments });
        }
        Ok(directives)
    }

    /// Parses `(name: value …)`. The grammar requires at least one argument
    /// inside the parentheses.
    fn parse_arguments(&mut self, const_context: bool) -> Result<Vec<Argument<'src>>> {
        self.expect(&TokenKind::ParenOpen)?;
        let mut arguments = vec![];
        loop {
            let name = self.expect_name("an argument name")?;
            self.expect(&TokenKind::Colon)?;
            let value = self.parse_value(const_context)?;
            arguments.push(Argument { name, value });
            if self.eat(&TokenKind::ParenClose)? {
                break;
            }
        }
        Ok(arguments)
    }

    /// Parses an input value literal. With `const_context` set, `$variable`
    /// references are rejected.
    fn parse_value(&mut self, const_context: bool) -> Result<Value<'src>> {
        match self.current.kind {
            TokenKind::Dollar => {
                if const_context {
                    return Err(ParseError::new(
                        "Variables are not allowed here",
                        self.current.position,
                    ));
                }
                self.advance()?;
                Ok(Value::Variable(self.expect_name("a variable name")?))
            }
            TokenKind::IntValue(text) => {
                self.advance()?;
                Ok(Value::Int(text))
            }
            TokenKind::FloatValue(text) => {
                self.advance()?;
                Ok(Value::Float(text))
            }
            TokenKind::StringValue(text) => {
                self.advance()?;
                Ok(Value::String(text))
            }
            TokenKind::Name("true") => {
                self.advance()?;
                Ok(Value::Boolean(true))
            }
            TokenKind::Name("false") => {
                self.advance()?;
                Ok(Value::Boolean(false))
            }
            TokenKind::Name("null") => {
                self.advance()?;
                Ok(Value::Null)
            }
            TokenKind::Name(name) => {
                self.advance()?;
                Ok(Value::Enum(name))
            }
            TokenKind::SquareBracketOpen => {
                self.advance()?;
                let mut items = vec![];
                while !self.eat(&TokenKind::SquareBracketClose)? {
                    items.push(self.parse_value(const_context)?);
                }
                Ok(Value::List(items))
            }
            TokenKind::CurlyBraceOpen => {
                self.advance()?;
                let mut fields = vec![];
                while !self.eat(&TokenKind::CurlyBraceClose)? {
                    let name = self.expect_name("an object field name")?;
                    self.expect(&TokenKind::Colon)?;
                    fields.push((name, self.parse_value(const_context)?));
                }
                Ok(Value::Object(fields))
            }
            _ => Err(self.error_expected("a value")),
        }
    }

    /// Parses one argument definition or input-object field definition:
    /// `Description? Name : Type (= default)? Directives?`.
    fn parse_input_value_definition(&mut self, what: &str) -> Result<InputValueDefinition<'src>> {
        self.eat_description()?;
        let name = self.expect_name(what)?;
        self.expect(&TokenKind::Colon)?;
        let value_type = self.parse_type_annotation()?;
        let default_value = if self.eat(&TokenKind::Equals)? {
            Some(self.parse_value(true)?)
        } else {
            None
        };
        let directives = self.parse_directive_annotations(true)?;
        Ok(InputValueDefinition {
            name,
            value_type,
            default_value,
            directives,
        })
    }

    /// Parses `( InputValueDefinition+ )` for field and directive argument
    /// definitions.
    fn parse_argument_definitions(&mut self) -> Result<Vec<InputValueDefinition<'src>>> {
        self.expect(&TokenKind::ParenOpen)?;
        let mut definitions = vec![];
        loop {
            definitions.push(self.parse_input_value_definition("an argument name")?);
            if self.eat(&TokenKind::ParenClose)? {
                break;
            }
        }
        Ok(definitions)
    }
}
