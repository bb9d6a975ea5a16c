//! Operator and comment scanning.
//!
//! Operators are matched by maximal munch over the operator table: the
//! candidate grows one character at a time for as long as the extended
//! spelling is still a table entry. A spelling whose shorter prefixes are
//! not entries themselves can never be produced (`<..` and `<..<`; see
//! [`foo_ir::is_reachable_operator`]).
//!
//! `/` is special-cased first:
//!
//! - `//` skips to the end of the line.
//! - `///` (but not `////`) captures the rest of the line as a
//!   documentation token.
//! - `/*` skips to the first `*/`. Block comments do not nest.

use foo_ir::{lookup_operator, Token, TokenKind};

use crate::cursor::Cursor;
use crate::lex_error::{LexError, LexErrorKind};

/// Scan an operator or a comment. The cursor is on an operator-introducer.
///
/// Returns `Ok(None)` for comments, which produce no token.
pub(crate) fn scan_operator(cursor: &mut Cursor<'_>) -> Result<Option<Token>, LexError> {
    if cursor.current() == Some('/') {
        match cursor.peek() {
            Some('/') => return Ok(scan_line_comment(cursor)),
            Some('*') => return scan_block_comment(cursor).map(|()| None),
            _ => {}
        }
    }

    let mut candidate = String::new();
    while let Some(c) = cursor.current() {
        candidate.push(c);
        if lookup_operator(&candidate).is_none() {
            candidate.pop();
            break;
        }
        cursor.advance();
    }

    match lookup_operator(&candidate) {
        Some(kind) => Ok(Some(cursor.fixed_token(kind))),
        None => {
            let c = cursor.current().unwrap_or_default();
            Err(cursor.error(LexErrorKind::UnknownCharacter(c)))
        }
    }
}

fn is_line_end(c: char) -> bool {
    matches!(c, '\n' | '\r')
}

/// The cursor is on the first `/` of `//`. The line break is left for the
/// driver.
fn scan_line_comment(cursor: &mut Cursor<'_>) -> Option<Token> {
    cursor.advance();
    cursor.advance();
    if cursor.current() == Some('/') && cursor.peek() != Some('/') {
        cursor.advance();
        return Some(scan_documentation(cursor));
    }
    cursor.eat_while(|c| !is_line_end(c));
    None
}

fn scan_documentation(cursor: &mut Cursor<'_>) -> Token {
    if cursor
        .current()
        .is_some_and(|c| c.is_whitespace() && !is_line_end(c))
    {
        cursor.advance();
    }
    let mut text = String::new();
    while let Some(c) = cursor.current().filter(|&c| !is_line_end(c)) {
        text.push(c);
        cursor.advance();
    }
    cursor.token(TokenKind::Documentation, text)
}

/// The cursor is on the `/` of `/*`.
fn scan_block_comment(cursor: &mut Cursor<'_>) -> Result<(), LexError> {
    cursor.advance();
    cursor.advance();
    loop {
        match cursor.current() {
            Some('*') if cursor.peek() == Some('/') => {
                cursor.advance();
                cursor.advance();
                return Ok(());
            }
            Some(_) => cursor.advance(),
            None => return Err(cursor.error(LexErrorKind::UnterminatedComment)),
        }
    }
}
