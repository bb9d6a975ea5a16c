//! Numeric literal scanning.
//!
//! Decimal literals may become floats through a fractional part or an
//! exponent. `0x`/`0X`, `0o` and `0b`/`0B` switch to a radix literal.
//! `_` is a visual separator: it is accepted in integer digits and dropped
//! from the decoded text, but rejected once a literal has become a float.
//!
//! A `.` only starts a fraction when a digit follows it, so `12..10` is
//! `12`, `..`, `10`.

use foo_ir::{Token, TokenKind};

use crate::cursor::Cursor;
use crate::lex_error::{LexError, LexErrorKind};

/// Integer radixes introduced by a `0` prefix.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Radix {
    Hex,
    Oct,
    Bin,
}

impl Radix {
    fn from_prefix(c: char) -> Option<Self> {
        match c {
            'x' | 'X' => Some(Radix::Hex),
            'o' => Some(Radix::Oct),
            'b' | 'B' => Some(Radix::Bin),
            _ => None,
        }
    }

    fn is_digit(self, c: char) -> bool {
        match self {
            Radix::Hex => c.is_ascii_hexdigit(),
            Radix::Oct => matches!(c, '0'..='7'),
            Radix::Bin => matches!(c, '0' | '1'),
        }
    }

    fn kind(self) -> TokenKind {
        match self {
            Radix::Hex => TokenKind::IntHex,
            Radix::Oct => TokenKind::IntOct,
            Radix::Bin => TokenKind::IntBin,
        }
    }

    fn empty_error(self) -> LexErrorKind {
        match self {
            Radix::Hex => LexErrorKind::InvalidHexNumber,
            Radix::Oct => LexErrorKind::InvalidOctNumber,
            Radix::Bin => LexErrorKind::InvalidBinNumber,
        }
    }
}

/// Scan a numeric literal. The cursor is on an ASCII digit.
pub(crate) fn scan_number(cursor: &mut Cursor<'_>) -> Result<Token, LexError> {
    if cursor.current() == Some('0') {
        if let Some(radix) = cursor.peek().and_then(Radix::from_prefix) {
            cursor.advance();
            cursor.advance();
            return scan_radix(cursor, radix);
        }
    }
    scan_decimal(cursor)
}

fn scan_radix(cursor: &mut Cursor<'_>, radix: Radix) -> Result<Token, LexError> {
    let mut text = String::new();
    while let Some(c) = cursor.current() {
        if radix.is_digit(c) {
            text.push(c);
        } else if c != '_' {
            break;
        }
        cursor.advance();
    }
    if text.is_empty() {
        return Err(cursor.error(radix.empty_error()));
    }
    Ok(cursor.token(radix.kind(), text))
}

fn scan_decimal(cursor: &mut Cursor<'_>) -> Result<Token, LexError> {
    let mut text = String::new();
    let mut is_float = false;
    loop {
        match cursor.current() {
            Some('.') => {
                if !cursor.peek().is_some_and(|c| c.is_ascii_digit()) {
                    break;
                }
                if text.contains('.') {
                    return Err(cursor.error(LexErrorKind::InvalidFloatNumber));
                }
                is_float = true;
                text.push('.');
            }
            Some('e' | 'E') => {
                if text.contains('e') {
                    return Err(cursor.error(LexErrorKind::InvalidFloatNumber));
                }
                is_float = true;
                text.push('e');
                cursor.advance();
                let sign = match cursor.current() {
                    Some(c @ ('+' | '-')) => c,
                    Some(c) if c.is_ascii_digit() => {
                        // The digit is picked up by the next iteration.
                        continue;
                    }
                    _ => return Err(cursor.error(LexErrorKind::InvalidFloatNumber)),
                };
                text.push(sign);
                cursor.advance();
                if !cursor.current().is_some_and(|c| c.is_ascii_digit()) {
                    return Err(cursor.error(LexErrorKind::InvalidFloatNumber));
                }
                continue;
            }
            Some('_') => {
                if is_float {
                    return Err(cursor.error(LexErrorKind::UnderscoreInFloat));
                }
            }
            Some(c) if c.is_ascii_digit() => text.push(c),
            _ => break,
        }
        cursor.advance();
    }
    let kind = if is_float {
        TokenKind::Float
    } else {
        TokenKind::IntDec
    };
    Ok(cursor.token(kind, text))
}

#[cfg(test)]
mod tests;
