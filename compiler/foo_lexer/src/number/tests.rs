use super::*;
use foo_ir::SourcePosition;
use pretty_assertions::assert_eq;

fn scan(source: &str) -> Result<Token, LexError> {
    let mut cursor = Cursor::new(source, 4);
    cursor.begin_token();
    scan_number(&mut cursor)
}

fn scan_ok(source: &str) -> (TokenKind, String) {
    match scan(source) {
        Ok(token) => (token.kind, token.text),
        Err(err) => panic!("{source:?} failed: {err}"),
    }
}

fn scan_err(source: &str) -> LexErrorKind {
    match scan(source) {
        Ok(token) => panic!("{source:?} unexpectedly produced {token}"),
        Err(err) => err.kind,
    }
}

// === Decimal ===

#[test]
fn plain_integer() {
    assert_eq!(scan_ok("42"), (TokenKind::IntDec, "42".to_string()));
}

#[test]
fn underscores_are_dropped() {
    assert_eq!(scan_ok("1_000"), (TokenKind::IntDec, "1000".to_string()));
    assert_eq!(scan_ok("1__0_"), (TokenKind::IntDec, "10".to_string()));
}

#[test]
fn integer_stops_before_range_operator() {
    let mut cursor = Cursor::new("12..10", 4);
    cursor.begin_token();
    let token = scan_number(&mut cursor).map(|t| t.text);
    assert_eq!(token, Ok("12".to_string()));
    assert_eq!(cursor.current(), Some('.'));
}

#[test]
fn integer_stops_before_method_dot() {
    assert_eq!(scan_ok("3.x"), (TokenKind::IntDec, "3".to_string()));
}

#[test]
fn length_counts_separators() {
    let token = scan("1_000 ");
    assert_eq!(token.map(|t| t.position), Ok(SourcePosition::new(1, 1, 5)));
}

// === Float ===

#[test]
fn fraction() {
    assert_eq!(scan_ok("3.1415"), (TokenKind::Float, "3.1415".to_string()));
}

#[test]
fn exponent_forms() {
    assert_eq!(scan_ok("1e10"), (TokenKind::Float, "1e10".to_string()));
    assert_eq!(scan_ok("1.2e-2"), (TokenKind::Float, "1.2e-2".to_string()));
    assert_eq!(scan_ok("5e+3"), (TokenKind::Float, "5e+3".to_string()));
    assert_eq!(scan_ok("7E4"), (TokenKind::Float, "7e4".to_string()));
}

#[test]
fn underscore_before_fraction_is_allowed() {
    assert_eq!(scan_ok("1_0.5"), (TokenKind::Float, "10.5".to_string()));
}

#[test]
fn second_dot_is_an_error() {
    assert_eq!(scan_err("3.14.15"), LexErrorKind::InvalidFloatNumber);
}

#[test]
fn second_exponent_is_an_error() {
    assert_eq!(scan_err("1e2e3"), LexErrorKind::InvalidFloatNumber);
}

#[test]
fn malformed_exponents() {
    assert_eq!(scan_err("1e"), LexErrorKind::InvalidFloatNumber);
    assert_eq!(scan_err("1ex"), LexErrorKind::InvalidFloatNumber);
    assert_eq!(scan_err("1e-"), LexErrorKind::InvalidFloatNumber);
    assert_eq!(scan_err("1e+a"), LexErrorKind::InvalidFloatNumber);
}

#[test]
fn underscore_in_float_is_an_error() {
    assert_eq!(scan_err("1.5_0"), LexErrorKind::UnderscoreInFloat);
    assert_eq!(scan_err("1e1_0"), LexErrorKind::UnderscoreInFloat);
}

#[test]
fn error_length_covers_consumed_characters() {
    let err = scan("3.14.15").map(|t| t.text);
    assert_eq!(
        err.map_err(|e| e.position),
        Err(SourcePosition::new(1, 1, 4))
    );
}

// === Radix ===

#[test]
fn hex_prefix_case_is_irrelevant() {
    assert_eq!(scan_ok("0xCAFEBABE"), (TokenKind::IntHex, "CAFEBABE".to_string()));
    assert_eq!(scan_ok("0XCAFEBABE"), (TokenKind::IntHex, "CAFEBABE".to_string()));
}

#[test]
fn hex_digit_case_is_preserved() {
    assert_eq!(scan_ok("0Xf7_d6_c5"), (TokenKind::IntHex, "f7d6c5".to_string()));
    assert_eq!(scan_ok("0XCAFE_BABE"), (TokenKind::IntHex, "CAFEBABE".to_string()));
}

#[test]
fn octal_and_binary() {
    assert_eq!(scan_ok("0o123"), (TokenKind::IntOct, "123".to_string()));
    assert_eq!(scan_ok("0o34_345"), (TokenKind::IntOct, "34345".to_string()));
    assert_eq!(scan_ok("0b101"), (TokenKind::IntBin, "101".to_string()));
    assert_eq!(scan_ok("0B1111_1111"), (TokenKind::IntBin, "11111111".to_string()));
}

#[test]
fn radix_digits_stop_at_foreign_digit() {
    assert_eq!(scan_ok("0o789"), (TokenKind::IntOct, "7".to_string()));
    assert_eq!(scan_ok("0b102"), (TokenKind::IntBin, "10".to_string()));
}

#[test]
fn capital_o_is_not_an_octal_prefix() {
    assert_eq!(scan_ok("0O7"), (TokenKind::IntDec, "0".to_string()));
}

#[test]
fn empty_radix_literals_fail() {
    assert_eq!(scan_err("0x"), LexErrorKind::InvalidHexNumber);
    assert_eq!(scan_err("0x_"), LexErrorKind::InvalidHexNumber);
    assert_eq!(scan_err("0o8"), LexErrorKind::InvalidOctNumber);
    assert_eq!(scan_err("0b"), LexErrorKind::InvalidBinNumber);
}
