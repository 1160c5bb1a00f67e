/**
 * Parses regular expression patterns into a syntax tree, building character
 * classes through a pluggable symbol factory.
 */

extern crate rd_intervals;

mod ast;
mod class;
mod config;
mod error;
mod parser;
mod symbol;

pub use rd_intervals::{CodePointRange, CodePointSet};

pub use ast::Node;
pub use class::{CharClass, CharClassBuilder, CharClassFactory};
pub use config::{ParserConfig, TrailingInputPolicy};
pub use error::{ParseError, ParseErrorKind, ParseResult};
pub use parser::{Parser, EMPTY_SET, EMPTY_WORD, is_literal};
pub use symbol::{SymbolBuilder, SymbolFactory};

/// Parses a pattern with the default configuration, building `CharClass`
/// symbols.
pub fn parse(source: &str) -> ParseResult<Node<CharClass>> {
    Parser::new(CharClassFactory).analyze(source)
}
