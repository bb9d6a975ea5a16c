//! Token types for the Foo lexer.
//!
//! A token is created exactly once per lexical unit and is never mutated
//! afterwards; ownership passes to whoever pulled it from the lexer.

mod kind;
mod tables;

pub use kind::{TokenFamily, TokenKind};
pub use tables::{
    is_operator_start, is_reachable_operator, keyword_table, lookup_keyword, lookup_operator,
    operator_table, OPERATOR_CHARS,
};

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::SourcePosition;

/// A token with its decoded text and source position.
///
/// `text` is the decoded payload: quotes stripped, escapes resolved,
/// numeric prefixes and `_` separators removed. Keyword and operator tokens
/// carry their canonical spelling.
///
/// Equality and hashing consider `kind` and `text` only; two tokens with
/// the same text at different positions compare equal.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub position: SourcePosition,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, text: impl Into<String>, position: SourcePosition) -> Self {
        Token {
            kind,
            text: text.into(),
            position,
        }
    }

    /// Create the zero-length end-of-input sentinel at `row:col`.
    pub fn end_of_input(row: u32, col: u32) -> Self {
        Token {
            kind: TokenKind::EndOfInput,
            text: String::new(),
            position: SourcePosition::new(row, col, 0),
        }
    }

    /// Whether this is the end-of-input sentinel.
    #[inline]
    pub fn is_end_of_input(&self) -> bool {
        self.kind == TokenKind::EndOfInput
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.text == other.text
    }
}

impl Eq for Token {}

impl Hash for Token {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.kind.hash(state);
        self.text.hash(state);
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.kind, self.position, self.text)
    }
}
