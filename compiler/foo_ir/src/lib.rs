//! Foo IR - token data model shared by the lexer and the parser.
//!
//! This crate contains:
//! - [`SourcePosition`] for row/column/length source locations
//! - [`Token`], [`TokenKind`] and [`TokenFamily`] for lexer output
//! - The process-wide keyword and operator classification tables
//!
//! The tables are immutable once built and are shared by reference across
//! any number of concurrent lexers.

mod position;
mod token;

pub use position::SourcePosition;
pub use token::{
    is_operator_start, is_reachable_operator, keyword_table, lookup_keyword, lookup_operator,
    operator_table, Token, TokenFamily, TokenKind, OPERATOR_CHARS,
};
