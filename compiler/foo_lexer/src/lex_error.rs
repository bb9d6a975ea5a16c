//! Lexer error types and their source-annotated rendering.
//!
//! Every lexical failure is fatal to the scan that raised it: the lexer
//! does not resynchronize past a malformed token.
//!
//! # Rendering
//!
//! [`LexError::render`] produces the user-visible block:
//!
//! ```text
//! at line [ROW,COL]:
//! <offending source line, tabs shown as single spaces>
//! <COL - 1 spaces>^^^
//!     LexerError: <message>
//! ```
//!
//! The caret run is as long as the failing token so far (at least one).
//! If `ROW` does not name a line of the source, the middle two lines are
//! omitted.

use foo_ir::SourcePosition;

/// What kind of lexer error occurred.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum LexErrorKind {
    // === Numeric Errors ===
    /// Second `.` or exponent marker, or a malformed exponent.
    #[error("Invalid float number")]
    InvalidFloatNumber,
    /// `_` after the literal became a float.
    #[error("Underscore ('_') not available in float part of number")]
    UnderscoreInFloat,
    /// `0x` with no hex digits after it.
    #[error("Invalid hex number")]
    InvalidHexNumber,
    /// `0o` with no octal digits after it.
    #[error("Invalid oct number")]
    InvalidOctNumber,
    /// `0b` with no binary digits after it.
    #[error("Invalid bin number")]
    InvalidBinNumber,

    // === Unterminated Literals ===
    #[error("Reached end of source code while parsing text string.")]
    UnterminatedString,
    #[error("Reached end of source code while parsing multiline comment")]
    UnterminatedComment,
    #[error(
        "Reached end of {} while parsing extended identifier.",
        line_or_file(.at_line_end)
    )]
    UnterminatedExtendedIdentifier { at_line_end: bool },
    /// Text block continuation line with a single `\`.
    #[error("Incorrect multi line string. '\\' expected")]
    MalformedTextBlock,

    // === Character Errors ===
    #[error("Atom identifier must start with correct identifier symbol")]
    InvalidAtomStart,
    #[error("Unknown character '{0}'")]
    UnknownCharacter(char),
}

fn line_or_file(at_line_end: &bool) -> &'static str {
    if *at_line_end {
        "line"
    } else {
        "file"
    }
}

/// A lexer error located at the start of the token being scanned.
///
/// `position.len` counts the characters consumed by the failing token
/// before the error was detected.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[error("LexerError: {kind}")]
pub struct LexError {
    pub kind: LexErrorKind,
    pub position: SourcePosition,
}

impl LexError {
    #[cold]
    pub fn new(kind: LexErrorKind, position: SourcePosition) -> Self {
        Self { kind, position }
    }

    /// Render the error against the source it was raised for.
    pub fn render(&self, source: &str) -> String {
        let SourcePosition { row, col, len } = self.position;
        let mut out = format!("at line [{row},{col}]:\n");
        let line = usize::try_from(row)
            .ok()
            .and_then(|row| row.checked_sub(1))
            .and_then(|index| source.split('\n').nth(index));
        if let Some(line) = line {
            out.push_str(&line.replace('\t', " "));
            out.push('\n');
            for _ in 1..col {
                out.push(' ');
            }
            for _ in 0..len.max(1) {
                out.push('^');
            }
            out.push('\n');
        }
        out.push_str("    ");
        out.push_str(&self.to_string());
        out
    }
}

#[cfg(test)]
mod tests;
