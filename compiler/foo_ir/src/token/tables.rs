//! Keyword and operator classification tables.
//!
//! Both tables are built once from [`TokenKind::ALL`] on first use and are
//! read-only afterwards, so concurrent lexers share them without locking.

use rustc_hash::FxHashMap;
use std::sync::OnceLock;

use super::kind::{TokenFamily, TokenKind};

/// Characters that may start an operator (or a comment, for `/`).
pub const OPERATOR_CHARS: &str = "@$+-*/%()[]{}=<>!&|.,^~?:;\\";

type SpellingTable = FxHashMap<&'static str, TokenKind>;

static KEYWORDS: OnceLock<SpellingTable> = OnceLock::new();
static OPERATORS: OnceLock<SpellingTable> = OnceLock::new();

fn build_table(family: TokenFamily) -> SpellingTable {
    TokenKind::ALL
        .iter()
        .filter(|kind| kind.family() == family)
        .filter_map(|&kind| kind.spelling().map(|spelling| (spelling, kind)))
        .collect()
}

/// Get the global keyword table (lazily initialized).
pub fn keyword_table() -> &'static SpellingTable {
    KEYWORDS.get_or_init(|| build_table(TokenFamily::Keyword))
}

/// Get the global operator table (lazily initialized).
pub fn operator_table() -> &'static SpellingTable {
    OPERATORS.get_or_init(|| build_table(TokenFamily::Operator))
}

/// Look up a reserved word. Exact, case-sensitive match only.
#[inline]
pub fn lookup_keyword(text: &str) -> Option<TokenKind> {
    keyword_table().get(text).copied()
}

/// Look up an operator spelling. Exact match only.
#[inline]
pub fn lookup_operator(text: &str) -> Option<TokenKind> {
    operator_table().get(text).copied()
}

/// Whether `c` can start an operator.
#[inline]
pub fn is_operator_start(c: char) -> bool {
    OPERATOR_CHARS.contains(c)
}

/// Whether the maximal-munch scanner can ever produce `spelling`.
///
/// The scanner only grows a candidate through strings that are themselves
/// table entries, so an operator is reachable iff every non-empty prefix
/// of its spelling is an operator too. `<..` and `<..<` are not: `<.` is
/// not an operator, so the scanner emits `<` and restarts at the dot.
pub fn is_reachable_operator(spelling: &str) -> bool {
    !spelling.is_empty()
        && spelling
            .char_indices()
            .map(|(i, c)| &spelling[..i + c.len_utf8()])
            .all(|prefix| lookup_operator(prefix).is_some())
}
