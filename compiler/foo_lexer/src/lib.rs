//! Lexer for Foo.
//!
//! Converts source text into a flat sequence of [`Token`]s, or fails with
//! the first [`LexError`]. The lexer is a hand-written state machine: the
//! driver classifies the lookahead character and hands the cursor to the
//! scanner that owns that token family.
//!
//! ```text
//! source -> Cursor -> what_is_next -> number | string | ident | operator -> Token
//! ```
//!
//! Whitespace and comments separate tokens and are never emitted.
//! Documentation comments (`/// ...`) are the exception: they become
//! [`TokenKind::Documentation`] tokens.

mod config;
mod cursor;
mod escape;
mod ident;
mod lex_error;
mod number;
mod operator;
mod string;
mod what_is_next;

pub use config::{ConfigError, LexerConfig, DEFAULT_TAB_SIZE, TAB_SIZE_ENV};
pub use foo_ir::{SourcePosition, Token, TokenFamily, TokenKind};
pub use lex_error::{LexError, LexErrorKind};

use std::iter::FusedIterator;

use tracing::{debug, trace};

use cursor::Cursor;
use what_is_next::{what_is_next, NextChar};

/// Pull-based lexer over one source text.
///
/// Each [`next_token`](Self::next_token) call skips whitespace and
/// comments and produces exactly one token. Once the input is exhausted
/// every further call returns the [`TokenKind::EndOfInput`] sentinel.
///
/// As an [`Iterator`] the lexer yields tokens up to (not including) the
/// sentinel, and stops after the first error.
#[derive(Clone, Debug)]
pub struct Lexer<'a> {
    cursor: Cursor<'a>,
    done: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str, config: &LexerConfig) -> Self {
        Lexer {
            cursor: Cursor::new(source, config.indentation_tab_size()),
            done: false,
        }
    }

    /// Scan the next token.
    ///
    /// # Errors
    ///
    /// Returns the [`LexError`] for the first malformed token. The lexer
    /// does not recover; the caller should stop scanning this input.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        let cursor = &mut self.cursor;
        loop {
            cursor.begin_token();
            let token = match what_is_next(cursor.current(), cursor.peek()) {
                NextChar::Whitespace => {
                    cursor.advance();
                    continue;
                }
                NextChar::EndOfInput => return Ok(cursor.end_of_input()),
                NextChar::Digit => number::scan_number(cursor)?,
                NextChar::IdentStart => ident::scan_identifier(cursor),
                NextChar::Hash => ident::scan_atom(cursor)?,
                NextChar::Backtick => ident::scan_extended_word(cursor)?,
                NextChar::Quote(quote) => string::scan_string(cursor, quote)?,
                NextChar::TextBlock => string::scan_text_block(cursor)?,
                NextChar::Operator => match operator::scan_operator(cursor)? {
                    Some(token) => token,
                    None => continue,
                },
                NextChar::Unknown(c) => {
                    cursor.advance();
                    return Err(cursor.error(LexErrorKind::UnknownCharacter(c)));
                }
            };
            trace!(
                kind = %token.kind.display_name(),
                row = token.position.row,
                col = token.position.col,
                len = token.position.len,
                "token"
            );
            return Ok(token);
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.next_token() {
            Ok(token) if token.is_end_of_input() => {
                self.done = true;
                None
            }
            Ok(token) => Some(Ok(token)),
            Err(err) => {
                self.done = true;
                Some(Err(err))
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done || self.cursor.is_eof() {
            (0, Some(0))
        } else {
            (0, None)
        }
    }
}

impl FusedIterator for Lexer<'_> {}

/// Tokenize a whole source text.
///
/// The end-of-input sentinel is not included in the result.
///
/// # Errors
///
/// Returns the first [`LexError`] encountered.
pub fn tokenize(source: &str, config: &LexerConfig) -> Result<Vec<Token>, LexError> {
    let result: Result<Vec<Token>, LexError> = Lexer::new(source, config).collect();
    match &result {
        Ok(tokens) => debug!(
            tokens = tokens.len(),
            bytes = source.len(),
            "tokenized source"
        ),
        Err(err) => debug!(
            %err,
            row = err.position.row,
            col = err.position.col,
            "lexing failed"
        ),
    }
    result
}
