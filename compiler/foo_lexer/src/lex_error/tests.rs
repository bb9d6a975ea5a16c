use super::*;
use pretty_assertions::assert_eq;

#[test]
fn message_has_lexer_prefix() {
    let err = LexError::new(LexErrorKind::InvalidHexNumber, SourcePosition::new(1, 1, 2));
    assert_eq!(err.to_string(), "LexerError: Invalid hex number");
}

#[test]
fn unknown_character_names_the_character() {
    let err = LexError::new(
        LexErrorKind::UnknownCharacter('€'),
        SourcePosition::new(1, 1, 0),
    );
    assert_eq!(err.to_string(), "LexerError: Unknown character '€'");
}

#[test]
fn extended_identifier_distinguishes_line_and_file() {
    let eol = LexErrorKind::UnterminatedExtendedIdentifier { at_line_end: true };
    let eof = LexErrorKind::UnterminatedExtendedIdentifier { at_line_end: false };
    assert_eq!(
        eol.to_string(),
        "Reached end of line while parsing extended identifier."
    );
    assert_eq!(
        eof.to_string(),
        "Reached end of file while parsing extended identifier."
    );
}

#[test]
fn render_points_at_token() {
    let source = "let x = 1\nlet y = 0x\nlet z = 3";
    let err = LexError::new(LexErrorKind::InvalidHexNumber, SourcePosition::new(2, 9, 2));
    assert_eq!(
        err.render(source),
        "at line [2,9]:\nlet y = 0x\n        ^^\n    LexerError: Invalid hex number"
    );
}

#[test]
fn render_uses_at_least_one_caret() {
    let err = LexError::new(
        LexErrorKind::UnknownCharacter('€'),
        SourcePosition::new(1, 3, 0),
    );
    assert_eq!(
        err.render("a €"),
        "at line [1,3]:\na €\n  ^\n    LexerError: Unknown character '€'"
    );
}

#[test]
fn render_shows_tabs_as_spaces() {
    let err = LexError::new(LexErrorKind::UnterminatedString, SourcePosition::new(1, 5, 3));
    assert_eq!(
        err.render("\t\"ab"),
        "at line [1,5]:\n \"ab\n    ^^^\n    LexerError: Reached end of source code while parsing text string."
    );
}

#[test]
fn render_omits_line_for_out_of_range_row() {
    let err = LexError::new(LexErrorKind::InvalidAtomStart, SourcePosition::new(9, 1, 1));
    assert_eq!(
        err.render("#1"),
        "at line [9,1]:\n    LexerError: Atom identifier must start with correct identifier symbol"
    );

    let zero = LexError::new(LexErrorKind::InvalidAtomStart, SourcePosition::new(0, 1, 1));
    assert!(!zero.render("#1").contains('^'));
}

#[test]
fn errors_compare_by_kind_and_position() {
    let pos = SourcePosition::new(1, 1, 1);
    let a = LexError::new(LexErrorKind::InvalidFloatNumber, pos);
    let b = LexError::new(LexErrorKind::InvalidFloatNumber, pos);
    let c = LexError::new(LexErrorKind::UnderscoreInFloat, pos);
    assert_eq!(a, b);
    assert_ne!(a, c);
}
