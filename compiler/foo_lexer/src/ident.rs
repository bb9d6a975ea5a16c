//! Identifier, keyword, atom and extended identifier scanning.

use foo_ir::{lookup_keyword, Token, TokenKind};

use crate::cursor::Cursor;
use crate::lex_error::{LexError, LexErrorKind};
use crate::string::scan_raw_string;

#[inline]
fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Scan an identifier or keyword. The cursor is on an ASCII letter.
pub(crate) fn scan_identifier(cursor: &mut Cursor<'_>) -> Token {
    let text = take_word(cursor);
    match lookup_keyword(&text) {
        Some(kind) => cursor.fixed_token(kind),
        None => cursor.token(TokenKind::Ident, text),
    }
}

/// Scan `#name` as an atom, or `#"..."` / `#'...'` as a raw string.
///
/// Keywords are not resolved inside atoms: `#if` is the atom `if`.
pub(crate) fn scan_atom(cursor: &mut Cursor<'_>) -> Result<Token, LexError> {
    cursor.advance();
    match cursor.current() {
        Some(quote @ ('"' | '\'')) => scan_raw_string(cursor, quote),
        Some(c) if c.is_ascii_alphabetic() => {
            let text = take_word(cursor);
            Ok(cursor.token(TokenKind::Atom, text))
        }
        _ => Err(cursor.error(LexErrorKind::InvalidAtomStart)),
    }
}

/// Scan a backtick-delimited identifier. The text between the backticks is
/// taken verbatim and never resolves to a keyword.
pub(crate) fn scan_extended_word(cursor: &mut Cursor<'_>) -> Result<Token, LexError> {
    cursor.advance();
    let mut text = String::new();
    loop {
        match cursor.current() {
            Some('`') => break,
            Some('\n' | '\r') => {
                return Err(cursor.error(LexErrorKind::UnterminatedExtendedIdentifier {
                    at_line_end: true,
                }));
            }
            Some(c) => {
                text.push(c);
                cursor.advance();
            }
            None => {
                return Err(cursor.error(LexErrorKind::UnterminatedExtendedIdentifier {
                    at_line_end: false,
                }));
            }
        }
    }
    cursor.advance();
    Ok(cursor.token(TokenKind::Ident, text))
}

fn take_word(cursor: &mut Cursor<'_>) -> String {
    let mut text = String::new();
    while let Some(c) = cursor.current().filter(|&c| is_ident_continue(c)) {
        text.push(c);
        cursor.advance();
    }
    text
}

#[cfg(test)]
mod tests;
