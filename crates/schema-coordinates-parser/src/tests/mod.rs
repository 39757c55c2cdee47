mod executable_parser_tests;
mod lexer_tests;
mod robustness_tests;
mod utils;
