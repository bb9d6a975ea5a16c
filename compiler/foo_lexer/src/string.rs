//! String literal scanning.
//!
//! Three forms all produce [`TokenKind::String`]:
//!
//! - Quoted: `"..."` or `'...'`, closed by the opening quote, with escapes.
//! - Raw: `#"..."` or `#'...'`, copied verbatim with no escapes.
//! - Text block: starts with `\\`; each continuation line must start with
//!   `\\` after its indentation. The block ends at the first line that does
//!   not, or at end of input.

use foo_ir::{Token, TokenKind};

use crate::cursor::Cursor;
use crate::escape::resolve_escape;
use crate::lex_error::{LexError, LexErrorKind};

/// Scan a quoted string. The cursor is on the opening `quote`.
pub(crate) fn scan_string(cursor: &mut Cursor<'_>, quote: char) -> Result<Token, LexError> {
    cursor.advance();
    let mut text = String::new();
    loop {
        if resolve_escape(cursor, &mut text) {
            continue;
        }
        match cursor.current() {
            Some(c) if c == quote => break,
            Some(c) => {
                text.push(c);
                cursor.advance();
            }
            None => return Err(cursor.error(LexErrorKind::UnterminatedString)),
        }
    }
    cursor.advance();
    Ok(cursor.token(TokenKind::String, text))
}

/// Scan a raw string. The cursor is on the opening `quote`, after the `#`.
pub(crate) fn scan_raw_string(cursor: &mut Cursor<'_>, quote: char) -> Result<Token, LexError> {
    cursor.advance();
    let mut text = String::new();
    loop {
        match cursor.current() {
            Some(c) if c == quote => break,
            Some(c) => {
                text.push(c);
                cursor.advance();
            }
            None => return Err(cursor.error(LexErrorKind::UnterminatedString)),
        }
    }
    cursor.advance();
    Ok(cursor.token(TokenKind::String, text))
}

/// Scan a text block. The cursor is on the first of the two opening `\`.
pub(crate) fn scan_text_block(cursor: &mut Cursor<'_>) -> Result<Token, LexError> {
    cursor.advance();
    cursor.advance();
    let mut text = String::new();
    loop {
        if resolve_escape(cursor, &mut text) {
            continue;
        }
        match cursor.current() {
            Some('\n') => {
                cursor.advance();
                cursor.eat_while(char::is_whitespace);
                if cursor.current() != Some('\\') {
                    break;
                }
                cursor.advance();
                if cursor.current() != Some('\\') {
                    return Err(cursor.error(LexErrorKind::MalformedTextBlock));
                }
                cursor.advance();
                text.push('\n');
            }
            Some(c) => {
                text.push(c);
                cursor.advance();
            }
            None => break,
        }
    }
    Ok(cursor.token(TokenKind::String, text))
}
