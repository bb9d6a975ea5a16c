//! Character cursor with row/column bookkeeping.
//!
//! The cursor walks the source one `char` at a time. Looking past the end
//! of input yields `None` rather than failing, so scanners can peek freely.
//!
//! # Columns
//!
//! Rows and columns are 1-based. Consuming a newline moves to the next row
//! and resets the column to 1; consuming a horizontal tab advances the
//! column by the configured tab width; any other character advances it by
//! one. Counters saturate at `u32::MAX` instead of wrapping.

use foo_ir::{SourcePosition, Token, TokenKind};

use crate::lex_error::{LexError, LexErrorKind};

/// Cursor over the source text of one scan.
///
/// The cursor is [`Copy`], enabling cheap state snapshots for backtracking
/// (used by the Unicode escape rollback).
#[derive(Clone, Copy, Debug)]
pub(crate) struct Cursor<'a> {
    source: &'a str,
    /// Current read position (byte index into `source`).
    pos: usize,
    row: u32,
    col: u32,
    /// Position of the first character of the token being built.
    start_row: u32,
    start_col: u32,
    /// Characters consumed since the token started.
    len: u32,
    tab_size: u32,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(source: &'a str, tab_size: u32) -> Self {
        Self {
            source,
            pos: 0,
            row: 1,
            col: 1,
            start_row: 1,
            start_col: 1,
            len: 0,
            tab_size,
        }
    }

    /// Returns the character at the current position.
    #[inline]
    pub(crate) fn current(&self) -> Option<char> {
        self.source[self.pos..].chars().next()
    }

    /// Returns the character one position ahead of current.
    #[inline]
    pub(crate) fn peek(&self) -> Option<char> {
        self.peek_nth(1)
    }

    /// Returns the character `n` positions ahead of current.
    pub(crate) fn peek_nth(&self, n: usize) -> Option<char> {
        self.source[self.pos..].chars().nth(n)
    }

    /// Returns `true` once every character has been consumed.
    #[inline]
    pub(crate) fn is_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Consume one character. Does nothing at end of input.
    pub(crate) fn advance(&mut self) {
        let Some(c) = self.current() else {
            return;
        };
        self.pos += c.len_utf8();
        self.len = self.len.saturating_add(1);
        match c {
            '\n' => {
                self.row = self.row.saturating_add(1);
                self.col = 1;
            }
            '\t' => self.col = self.col.saturating_add(self.tab_size),
            _ => self.col = self.col.saturating_add(1),
        }
    }

    /// Advance while `pred` returns `true` for the current character.
    pub(crate) fn eat_while(&mut self, pred: impl Fn(char) -> bool) {
        while self.current().is_some_and(&pred) {
            self.advance();
        }
    }

    /// Mark the current position as the start of a new token.
    #[inline]
    pub(crate) fn begin_token(&mut self) {
        self.start_row = self.row;
        self.start_col = self.col;
        self.len = 0;
    }

    /// Position of the token being built, spanning everything consumed so far.
    #[inline]
    pub(crate) fn token_position(&self) -> SourcePosition {
        SourcePosition::new(self.start_row, self.start_col, self.len)
    }

    /// Finish the current token.
    pub(crate) fn token(&self, kind: TokenKind, text: impl Into<String>) -> Token {
        Token::new(kind, text, self.token_position())
    }

    /// Finish the current token as a keyword or operator carrying its spelling.
    pub(crate) fn fixed_token(&self, kind: TokenKind) -> Token {
        self.token(kind, kind.spelling().unwrap_or_default())
    }

    /// Build an error located at the current token.
    #[cold]
    pub(crate) fn error(&self, kind: LexErrorKind) -> LexError {
        LexError::new(kind, self.token_position())
    }

    /// The end-of-input sentinel at the current position.
    pub(crate) fn end_of_input(&self) -> Token {
        Token::end_of_input(self.row, self.col)
    }
}
