//! Escape resolution for quoted strings and text blocks.
//!
//! Escapes are decoded while scanning, straight into the literal's text:
//!
//! | Source        | Decoded                                   |
//! |---------------|-------------------------------------------|
//! | `\"` `\'`     | the quote                                 |
//! | `\0` `\b` `\f` `\n` `\r` `\t` | NUL, backspace, form feed, LF, CR, tab |
//! | `\` + newline | nothing; following whitespace is skipped  |
//! | `\u`+`XXXX`   | the code unit `XXXX` (any number of `u`s) |
//! | `\` + other   | a literal `\`; the other character is scanned normally |
//!
//! A `\u` escape that is not followed by four hex digits is not an error:
//! the cursor is rolled back to just after `\u` and the text `\u` is kept
//! literally. The same happens to a surrogate that is not part of a
//! high/low pair.

use crate::cursor::Cursor;

/// Number of hex digits in a `\u` escape.
const UNICODE_DIGITS: u32 = 4;

/// Resolve one escape sequence if the cursor is on a `\`.
///
/// Returns `false` (consuming nothing) when the cursor is not on a `\`.
/// Otherwise consumes the escape, appends its decoded form to `text` and
/// returns `true`.
pub(crate) fn resolve_escape(cursor: &mut Cursor<'_>, text: &mut String) -> bool {
    if cursor.current() != Some('\\') {
        return false;
    }
    cursor.advance();
    let simple = match cursor.current() {
        Some('"') => Some('"'),
        Some('\'') => Some('\''),
        Some('0') => Some('\0'),
        Some('b') => Some('\u{8}'),
        Some('f') => Some('\u{c}'),
        Some('n') => Some('\n'),
        Some('r') => Some('\r'),
        Some('t') => Some('\t'),
        _ => None,
    };
    if let Some(decoded) = simple {
        cursor.advance();
        text.push(decoded);
        return true;
    }
    match cursor.current() {
        Some('\n') => skip_continuation(cursor),
        Some('\r') if cursor.peek() == Some('\n') => skip_continuation(cursor),
        Some('u') => resolve_unicode(cursor, text),
        // Undefined escape: keep the backslash, rescan what follows.
        _ => text.push('\\'),
    }
    true
}

/// Line continuation: drop the line break and all whitespace after it.
fn skip_continuation(cursor: &mut Cursor<'_>) {
    cursor.advance();
    cursor.eat_while(char::is_whitespace);
}

/// Decode `\u`, `\uu`, ... followed by four hex digits. The cursor is on
/// the first `u`.
///
/// A high surrogate immediately followed by a `\u` escape holding a low
/// surrogate decodes to the supplementary character the pair encodes.
fn resolve_unicode(cursor: &mut Cursor<'_>, text: &mut String) {
    cursor.advance();
    let rollback = *cursor;
    cursor.eat_while(|c| c == 'u');

    let decoded = read_code_unit(cursor).and_then(|unit| {
        char::from_u32(u32::from(unit)).or_else(|| {
            let low = read_low_surrogate(cursor)?;
            char::decode_utf16([unit, low]).next()?.ok()
        })
    });

    match decoded {
        Some(c) => text.push(c),
        None => {
            *cursor = rollback;
            text.push_str("\\u");
        }
    }
}

/// Read exactly four hex digits as one UTF-16 code unit.
fn read_code_unit(cursor: &mut Cursor<'_>) -> Option<u16> {
    let mut value = 0u16;
    for _ in 0..UNICODE_DIGITS {
        let digit = cursor.current().and_then(|c| c.to_digit(16))?;
        // A hex digit is below 16, so it always fits.
        value = (value << 4) | u16::try_from(digit).ok()?;
        cursor.advance();
    }
    Some(value)
}

/// Read a following `\uXXXX` escape if it holds a low surrogate.
fn read_low_surrogate(cursor: &mut Cursor<'_>) -> Option<u16> {
    if cursor.current() != Some('\\') || cursor.peek() != Some('u') {
        return None;
    }
    cursor.advance();
    cursor.eat_while(|c| c == 'u');
    read_code_unit(cursor).filter(|unit| (0xDC00..=0xDFFF).contains(unit))
}
