use super::*;
use foo_ir::SourcePosition;
use pretty_assertions::assert_eq;

fn cursor(source: &str) -> Cursor<'_> {
    let mut cursor = Cursor::new(source, 4);
    cursor.begin_token();
    cursor
}

// === Identifiers ===

#[test]
fn identifier_with_digits_and_underscores() {
    let mut c = cursor("foo_bar2 baz");
    let token = scan_identifier(&mut c);
    assert_eq!(token.kind, TokenKind::Ident);
    assert_eq!(token.text, "foo_bar2");
    assert_eq!(token.position, SourcePosition::new(1, 1, 8));
    assert_eq!(c.current(), Some(' '));
}

#[test]
fn keywords_resolve() {
    for (source, kind) in [
        ("if", TokenKind::If),
        ("typeof", TokenKind::Typeof),
        ("none", TokenKind::None),
        ("and", TokenKind::And),
    ] {
        let token = scan_identifier(&mut cursor(source));
        assert_eq!(token.kind, kind);
        assert_eq!(token.text, source);
    }
}

#[test]
fn keywords_are_case_sensitive() {
    let token = scan_identifier(&mut cursor("True"));
    assert_eq!(token.kind, TokenKind::Ident);
}

#[test]
fn keyword_prefix_is_an_identifier() {
    assert_eq!(scan_identifier(&mut cursor("iffy")).kind, TokenKind::Ident);
    assert_eq!(scan_identifier(&mut cursor("let_")).kind, TokenKind::Ident);
}

// === Atoms ===

#[test]
fn atom() {
    let token = scan_atom(&mut cursor("#ok_2 ")).map(|t| (t.kind, t.text, t.position));
    assert_eq!(
        token,
        Ok((TokenKind::Atom, "ok_2".to_string(), SourcePosition::new(1, 1, 5)))
    );
}

#[test]
fn atom_does_not_resolve_keywords() {
    let token = scan_atom(&mut cursor("#if")).map(|t| (t.kind, t.text));
    assert_eq!(token, Ok((TokenKind::Atom, "if".to_string())));
}

#[test]
fn atom_with_quote_is_a_raw_string() {
    let token = scan_atom(&mut cursor(r#"#"C:\dir""#)).map(|t| (t.kind, t.text));
    assert_eq!(token, Ok((TokenKind::String, r"C:\dir".to_string())));
}

#[test]
fn atom_must_start_with_a_letter() {
    for source in ["#1", "#_a", "# a", "#"] {
        let err = scan_atom(&mut cursor(source)).map_err(|e| e.kind);
        assert_eq!(err.map(|t| t.kind), Err(LexErrorKind::InvalidAtomStart), "{source:?}");
    }
}

// === Extended Identifiers ===

#[test]
fn extended_identifier() {
    let token = scan_extended_word(&mut cursor("`hello world!` x"))
        .map(|t| (t.kind, t.text, t.position));
    assert_eq!(
        token,
        Ok((
            TokenKind::Ident,
            "hello world!".to_string(),
            SourcePosition::new(1, 1, 14)
        ))
    );
}

#[test]
fn extended_identifier_keeps_keywords_as_identifiers() {
    let token = scan_extended_word(&mut cursor("`while`")).map(|t| t.kind);
    assert_eq!(token, Ok(TokenKind::Ident));
}

#[test]
fn extended_identifier_unterminated() {
    let at_line = scan_extended_word(&mut cursor("`abc\ndef`")).map_err(|e| e.kind);
    assert_eq!(
        at_line.map(|t| t.kind),
        Err(LexErrorKind::UnterminatedExtendedIdentifier { at_line_end: true })
    );

    let at_file = scan_extended_word(&mut cursor("`abc")).map_err(|e| e.kind);
    assert_eq!(
        at_file.map(|t| t.kind),
        Err(LexErrorKind::UnterminatedExtendedIdentifier { at_line_end: false })
    );
}
