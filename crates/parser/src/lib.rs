pub mod ast;
pub mod parser;
pub mod error;

use ast::DTypeExpr;
use chumsky::{Parser, Stream};
use error::ParseError;
use lexer::token::Token;

/// Parse a single descriptor. Spans in the result and in errors are byte
/// offsets into `source`.
pub fn parse_dtype(source: &str) -> Result<DTypeExpr, Vec<ParseError>> {
    parse_with(parser::single_parser(), source)
}

fn parse_with<O>(
    parser: impl Parser<Token, O, Error = ParseError>,
    source: &str,
) -> Result<O, Vec<ParseError>> {
    let eoi = source.len()..source.len();
    let tokens = lexer::lex_spanned(source);
    parser.parse(Stream::from_iter(eoi, tokens.into_iter()))
}

#[cfg(test)]
mod tests;
