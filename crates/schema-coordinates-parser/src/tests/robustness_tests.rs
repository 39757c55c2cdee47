//! Grammar-robustness properties: the parsers must return `Err`, never
//! panic, for arbitrary input.

use crate::Lexer;
use crate::TokenKind;
use proptest::prelude::*;

proptest! {
    #[test]
    fn schema_parser_never_panics(input in ".*") {
        let _ = crate::parse_schema_document(&input);
    }

    #[test]
    fn executable_parser_never_panics(input in ".*") {
        let _ = crate::parse_executable_document(&input);
    }

    #[test]
    fn lexer_makes_progress_and_positions_are_monotonic(input in ".*") {
        let mut lexer = Lexer::new(&input);
        let mut last_offset = 0;
        let mut terminated = false;
        // Bounded by input length: every non-Eof token consumes at least
        // one byte.
        for _ in 0..=input.len() {
            match lexer.next_token() {
                Ok(token) => {
                    prop_assert!(token.position.byte_offset() >= last_offset);
                    last_offset = token.position.byte_offset();
                    if token.kind == TokenKind::Eof {
                        terminated = true;
                        break;
                    }
                }
                Err(_) => {
                    terminated = true;
                    break;
                }
            }
        }
        prop_assert!(terminated, "lexer failed to terminate");
    }
}
