//! The executable-document (query-language) grammar.

use crate::ast::ExecutableDefinition;
use crate::ast::ExecutableDocument;
use crate::ast::Field;
use crate::ast::FragmentDefinition;
use crate::ast::FragmentSpread;
use crate::ast::InlineFragment;
use crate::ast::OperationDefinition;
use crate::ast::OperationKind;
use crate::ast::Selection;
use crate::ast::SelectionSet;
use crate::ast::VariableDefinition;
use crate::parser::Parser;
use crate::ParseError;
use crate::TokenKind;

type Result<T> = std::result::Result<T, ParseError>;

/// Parses operation-document text into an [`ExecutableDocument`].
///
/// An anonymous top-level `{ … }` shorthand parses as an implicit `query`
/// operation. Fragment spreads are left unresolved. Fail-fast: any syntax
/// violation aborts the whole parse.
pub fn parse_executable_document(source: &str) -> Result<ExecutableDocument<'_>> {
    let mut parser = Parser::new(source)?;
    let mut definitions = vec![];
    while !parser.at_eof() {
        definitions.push(parser.parse_executable_definition()?);
    }
    Ok(ExecutableDocument { definitions })
}

impl<'src> Parser<'src> {
    fn parse_executable_definition(&mut self) -> Result<ExecutableDefinition<'src>> {
        if self.at(&TokenKind::CurlyBraceOpen) {
            let selection_set = self.parse_selection_set()?;
            return Ok(ExecutableDefinition::Operation(OperationDefinition {
                kind: OperationKind::Query,
                name: None,
                variable_definitions: vec![],
                directives: vec![],
                selection_set,
            }));
        }

        match self.peek_name() {
            Some("query") => self
                .parse_operation(OperationKind::Query)
                .map(ExecutableDefinition::Operation),
            Some("mutation") => self
                .parse_operation(OperationKind::Mutation)
                .map(ExecutableDefinition::Operation),
            Some("subscription") => self
                .parse_operation(OperationKind::Subscription)
                .map(ExecutableDefinition::Operation),
            Some("fragment") => self
                .parse_fragment_definition()
                .map(ExecutableDefinition::Fragment),
            _ => Err(self.error_expected("an operation or fragment definition")),
        }
    }

    fn parse_operation(&mut self, kind: OperationKind) -> Result<OperationDefinition<'src>> {
        // The operation keyword itself.
        self.advance()?;

        let name = match self.peek_name() {
            Some(name) => {
                self.advance()?;
                Some(name)
            }
            None => None,
        };
        let variable_definitions = if self.at(&TokenKind::ParenOpen) {
            self.parse_variable_definitions()?
        } else {
            vec![]
        };
        let directives = self.parse_directive_annotations(false)?;
        let selection_set = self.parse_selection_set()?;

        Ok(OperationDefinition {
            kind,
            name,
            variable_definitions,
            directives,
            selection_set,
        })
    }

    /// `( $name: Type (= default)? Directives? … )`
    fn parse_variable_definitions(&mut self) -> Result<Vec<VariableDefinition<'src>>> {
        self.expect(&TokenKind::ParenOpen)?;
        let mut definitions = vec![];
        loop {
            self.expect(&TokenKind::Dollar)?;
            let name = self.expect_name("a variable name")?;
            self.expect(&TokenKind::Colon)?;
            let variable_type = self.parse_type_annotation()?;
            let default_value = if self.eat(&TokenKind::Equals)? {
                Some(self.parse_value(true)?)
            } else {
                None
            };
            let directives = self.parse_directive_annotations(true)?;
            definitions.push(VariableDefinition {
                name,
                variable_type,
                default_value,
                directives,
            });
            if self.eat(&TokenKind::ParenClose)? {
                break;
            }
        }
        Ok(definitions)
    }

    fn parse_selection_set(&mut self) -> Result<SelectionSet<'src>> {
        self.expect(&TokenKind::CurlyBraceOpen)?;
        let mut selections = vec![];
        loop {
            selections.push(self.parse_selection()?);
            if self.eat(&TokenKind::CurlyBraceClose)? {
                break;
            }
        }
        Ok(SelectionSet { selections })
    }

    fn parse_selection(&mut self) -> Result<Selection<'src>> {
        if self.eat(&TokenKind::Ellipsis)? {
            // `...Name` is a fragment spread; `... on T { … }` and
            // `... { … }` are inline fragments (`on` is not a valid
            // fragment name).
            if let Some(name) = self.peek_name()
                && name != "on"
            {
                self.advance()?;
                let directives = self.parse_directive_annotations(false)?;
                return Ok(Selection::FragmentSpread(FragmentSpread {
                    fragment_name: name,
                    directives,
                }));
            }

            let type_condition = if self.eat_keyword("on")? {
                Some(self.expect_name("a type condition")?)
            } else {
                None
            };
            let directives = self.parse_directive_annotations(false)?;
            let selection_set = self.parse_selection_set()?;
            return Ok(Selection::InlineFragment(InlineFragment {
                type_condition,
                directives,
                selection_set,
            }));
        }

        let name = self.expect_name("a field name")?;
        let (alias, name) = if self.eat(&TokenKind::Colon)? {
            (Some(name), self.expect_name("a field name")?)
        } else {
            (None, name)
        };
        let arguments = if self.at(&TokenKind::ParenOpen) {
            self.parse_arguments(false)?
        } else {
            vec![]
        };
        let directives = self.parse_directive_annotations(false)?;
        let selection_set = if self.at(&TokenKind::CurlyBraceOpen) {
            Some(self.parse_selection_set()?)
        } else {
            None
        };

        Ok(Selection::Field(Field {
            alias,
            name,
            arguments,
            directives,
            selection_set,
        }))
    }

    fn parse_fragment_definition(&mut self) -> Result<FragmentDefinition<'src>> {
        self.expect_keyword("fragment")?;
        let position = self.current_position();
        let name = self.expect_name("a fragment name")?;
        if name == "on" {
            return Err(ParseError::new(
                "Expected a fragment name, found `on`",
                position,
            ));
        }
        self.expect_keyword("on")?;
        let type_condition = self.expect_name("a type condition")?;
        let directives = self.parse_directive_annotations(false)?;
        let selection_set = self.parse_selection_set()?;

        Ok(FragmentDefinition {
            name,
            type_condition,
            directives,
            selection_set,
        })
    }
}
