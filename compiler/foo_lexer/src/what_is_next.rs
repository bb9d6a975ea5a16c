//! Lookahead classification for the driver.
//!
//! Inspects the current character (and, for `\`, the one after it) and
//! names which scanner owns the token that starts here. The driver is a
//! single `match` over the result.

use foo_ir::is_operator_start;

/// What starts at the cursor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum NextChar {
    /// ASCII digit: a numeric literal.
    Digit,
    /// ASCII letter: an identifier or keyword.
    IdentStart,
    /// `#`: an atom, or a raw string when a quote follows.
    Hash,
    /// `` ` ``: an extended identifier.
    Backtick,
    /// `"` or `'`: a quoted string closed by the same character.
    Quote(char),
    /// `\\`: a text block.
    TextBlock,
    /// Any operator-introducer, including `/` for comments.
    Operator,
    /// Whitespace between tokens.
    Whitespace,
    /// Something no scanner accepts.
    Unknown(char),
    /// Nothing left to scan.
    EndOfInput,
}

/// Classify the token starting at `current`, given the character after it.
pub(crate) fn what_is_next(current: Option<char>, next: Option<char>) -> NextChar {
    let Some(c) = current else {
        return NextChar::EndOfInput;
    };
    match c {
        '0'..='9' => NextChar::Digit,
        'a'..='z' | 'A'..='Z' => NextChar::IdentStart,
        '#' => NextChar::Hash,
        '`' => NextChar::Backtick,
        '"' | '\'' => NextChar::Quote(c),
        '\\' if next == Some('\\') => NextChar::TextBlock,
        c if is_operator_start(c) => NextChar::Operator,
        c if c.is_whitespace() => NextChar::Whitespace,
        c => NextChar::Unknown(c),
    }
}
