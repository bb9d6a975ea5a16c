//! Token kinds for Foo.

use std::fmt;

/// The four families a [`TokenKind`] belongs to.
///
/// Each family carries different invariants: value kinds carry decoded
/// text, keyword and operator kinds are fully described by their spelling,
/// and `Other` holds the end-of-input sentinel only.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenFamily {
    Value,
    Keyword,
    Operator,
    Other,
}

/// Token kinds for Foo.
///
/// A closed set: the classification tables and every dispatch in the lexer
/// are derived from [`TokenKind::ALL`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TokenKind {
    /// Decimal integer: `42`, `1_000`
    IntDec,
    /// Hexadecimal integer: `0xCAFE_BABE` (text has no prefix)
    IntHex,
    /// Octal integer: `0o755`
    IntOct,
    /// Binary integer: `0b1010`
    IntBin,
    /// Float: `3.14`, `1.2e-2`
    Float,
    /// Identifier, including back-quoted extended words
    Ident,
    /// Atom: `#name` (text has no `#`)
    Atom,
    /// Quoted, raw or text-block string
    String,
    /// `///` documentation comment
    Documentation,

    // Literals
    True,
    False,
    None,

    // Guard
    Where,

    // Control flow
    If,
    Else,
    Match,
    While,

    // Exceptions
    Throw,
    Try,
    Catch,
    Finally,

    // Declarations
    Let,
    Var,

    // Type tests
    Is,
    Typeof,
    Yield,

    // Boolean operators
    Not,
    And,
    Or,

    Plus,       // +
    Minus,      // -
    Star,       // *
    Slash,      // /
    Percent,    // %
    Shr,        // >>
    Shl,        // <<
    Amp,        // &
    Pipe,       // |
    Caret,      // ^
    PlusPlus,   // ++
    MinusMinus, // --
    Eq,         // =
    PlusEq,     // +=
    MinusEq,    // -=
    StarEq,     // *=
    SlashEq,    // /=
    PercentEq,  // %=
    AmpEq,      // &=
    PipeEq,     // |=
    CaretEq,    // ^=
    ShrEq,      // >>=
    ShlEq,      // <<=
    Tilde,      // ~
    Question,   // ?
    Bang,       // !
    EqEq,       // ==
    NotEq,      // !=
    LtEq,       // <=
    Lt,         // <
    Gt,         // >
    GtEq,       // >=
    Arrow,      // ->
    DotGt,      // .>  sequence
    Backslash,  // \   lambda
    DotDot,     // ..  inclusive range
    DotDotLt,   // ..< range excluding the right end
    LtDotDot,   // <.. range excluding the left end
    LtDotDotLt, // <..< range excluding both ends
    DotDotDot,  // ... spread
    Dollar,     // $   partial application
    LParen,     // (
    RParen,     // )
    LBracket,   // [
    RBracket,   // ]
    LBrace,     // {
    RBrace,     // }
    Comma,      // ,
    Dot,        // .
    Colon,      // :
    Semicolon,  // ;
    At,         // @   decorator

    /// End-of-input sentinel. Never part of a finished token stream.
    EndOfInput,
}

impl TokenKind {
    /// Every kind, in declaration order.
    pub const ALL: [TokenKind; 82] = [
        TokenKind::IntDec,
        TokenKind::IntHex,
        TokenKind::IntOct,
        TokenKind::IntBin,
        TokenKind::Float,
        TokenKind::Ident,
        TokenKind::Atom,
        TokenKind::String,
        TokenKind::Documentation,
        TokenKind::True,
        TokenKind::False,
        TokenKind::None,
        TokenKind::Where,
        TokenKind::If,
        TokenKind::Else,
        TokenKind::Match,
        TokenKind::While,
        TokenKind::Throw,
        TokenKind::Try,
        TokenKind::Catch,
        TokenKind::Finally,
        TokenKind::Let,
        TokenKind::Var,
        TokenKind::Is,
        TokenKind::Typeof,
        TokenKind::Yield,
        TokenKind::Not,
        TokenKind::And,
        TokenKind::Or,
        TokenKind::Plus,
        TokenKind::Minus,
        TokenKind::Star,
        TokenKind::Slash,
        TokenKind::Percent,
        TokenKind::Shr,
        TokenKind::Shl,
        TokenKind::Amp,
        TokenKind::Pipe,
        TokenKind::Caret,
        TokenKind::PlusPlus,
        TokenKind::MinusMinus,
        TokenKind::Eq,
        TokenKind::PlusEq,
        TokenKind::MinusEq,
        TokenKind::StarEq,
        TokenKind::SlashEq,
        TokenKind::PercentEq,
        TokenKind::AmpEq,
        TokenKind::PipeEq,
        TokenKind::CaretEq,
        TokenKind::ShrEq,
        TokenKind::ShlEq,
        TokenKind::Tilde,
        TokenKind::Question,
        TokenKind::Bang,
        TokenKind::EqEq,
        TokenKind::NotEq,
        TokenKind::LtEq,
        TokenKind::Lt,
        TokenKind::Gt,
        TokenKind::GtEq,
        TokenKind::Arrow,
        TokenKind::DotGt,
        TokenKind::Backslash,
        TokenKind::DotDot,
        TokenKind::DotDotLt,
        TokenKind::LtDotDot,
        TokenKind::LtDotDotLt,
        TokenKind::DotDotDot,
        TokenKind::Dollar,
        TokenKind::LParen,
        TokenKind::RParen,
        TokenKind::LBracket,
        TokenKind::RBracket,
        TokenKind::LBrace,
        TokenKind::RBrace,
        TokenKind::Comma,
        TokenKind::Dot,
        TokenKind::Colon,
        TokenKind::Semicolon,
        TokenKind::At,
        TokenKind::EndOfInput,
    ];

    /// The family this kind belongs to.
    pub const fn family(self) -> TokenFamily {
        match self {
            TokenKind::IntDec
            | TokenKind::IntHex
            | TokenKind::IntOct
            | TokenKind::IntBin
            | TokenKind::Float
            | TokenKind::Ident
            | TokenKind::Atom
            | TokenKind::String
            | TokenKind::Documentation => TokenFamily::Value,
            TokenKind::EndOfInput => TokenFamily::Other,
            _ => {
                if self.keyword_str().is_some() {
                    TokenFamily::Keyword
                } else {
                    TokenFamily::Operator
                }
            }
        }
    }

    /// If this kind is a keyword, return its spelling.
    pub const fn keyword_str(self) -> Option<&'static str> {
        match self {
            TokenKind::True => Some("true"),
            TokenKind::False => Some("false"),
            TokenKind::None => Some("none"),
            TokenKind::Where => Some("where"),
            TokenKind::If => Some("if"),
            TokenKind::Else => Some("else"),
            TokenKind::Match => Some("match"),
            TokenKind::While => Some("while"),
            TokenKind::Throw => Some("throw"),
            TokenKind::Try => Some("try"),
            TokenKind::Catch => Some("catch"),
            TokenKind::Finally => Some("finally"),
            TokenKind::Let => Some("let"),
            TokenKind::Var => Some("var"),
            TokenKind::Is => Some("is"),
            TokenKind::Typeof => Some("typeof"),
            TokenKind::Yield => Some("yield"),
            TokenKind::Not => Some("not"),
            TokenKind::And => Some("and"),
            TokenKind::Or => Some("or"),
            _ => Option::None,
        }
    }

    /// If this kind is an operator, return its spelling.
    pub const fn operator_str(self) -> Option<&'static str> {
        match self {
            TokenKind::Plus => Some("+"),
            TokenKind::Minus => Some("-"),
            TokenKind::Star => Some("*"),
            TokenKind::Slash => Some("/"),
            TokenKind::Percent => Some("%"),
            TokenKind::Shr => Some(">>"),
            TokenKind::Shl => Some("<<"),
            TokenKind::Amp => Some("&"),
            TokenKind::Pipe => Some("|"),
            TokenKind::Caret => Some("^"),
            TokenKind::PlusPlus => Some("++"),
            TokenKind::MinusMinus => Some("--"),
            TokenKind::Eq => Some("="),
            TokenKind::PlusEq => Some("+="),
            TokenKind::MinusEq => Some("-="),
            TokenKind::StarEq => Some("*="),
            TokenKind::SlashEq => Some("/="),
            TokenKind::PercentEq => Some("%="),
            TokenKind::AmpEq => Some("&="),
            TokenKind::PipeEq => Some("|="),
            TokenKind::CaretEq => Some("^="),
            TokenKind::ShrEq => Some(">>="),
            TokenKind::ShlEq => Some("<<="),
            TokenKind::Tilde => Some("~"),
            TokenKind::Question => Some("?"),
            TokenKind::Bang => Some("!"),
            TokenKind::EqEq => Some("=="),
            TokenKind::NotEq => Some("!="),
            TokenKind::LtEq => Some("<="),
            TokenKind::Lt => Some("<"),
            TokenKind::Gt => Some(">"),
            TokenKind::GtEq => Some(">="),
            TokenKind::Arrow => Some("->"),
            TokenKind::DotGt => Some(".>"),
            TokenKind::Backslash => Some("\\"),
            TokenKind::DotDot => Some(".."),
            TokenKind::DotDotLt => Some("..<"),
            TokenKind::LtDotDot => Some("<.."),
            TokenKind::LtDotDotLt => Some("<..<"),
            TokenKind::DotDotDot => Some("..."),
            TokenKind::Dollar => Some("$"),
            TokenKind::LParen => Some("("),
            TokenKind::RParen => Some(")"),
            TokenKind::LBracket => Some("["),
            TokenKind::RBracket => Some("]"),
            TokenKind::LBrace => Some("{"),
            TokenKind::RBrace => Some("}"),
            TokenKind::Comma => Some(","),
            TokenKind::Dot => Some("."),
            TokenKind::Colon => Some(":"),
            TokenKind::Semicolon => Some(";"),
            TokenKind::At => Some("@"),
            _ => Option::None,
        }
    }

    /// Canonical spelling of a keyword or operator kind.
    ///
    /// Value kinds and the end-of-input sentinel have no fixed spelling.
    pub const fn spelling(self) -> Option<&'static str> {
        match self.keyword_str() {
            Some(s) => Some(s),
            Option::None => self.operator_str(),
        }
    }

    /// Short human-readable name, used in logs and tool output.
    pub fn display_name(self) -> &'static str {
        match self {
            TokenKind::IntDec => "integer",
            TokenKind::IntHex => "hex integer",
            TokenKind::IntOct => "octal integer",
            TokenKind::IntBin => "binary integer",
            TokenKind::Float => "float",
            TokenKind::Ident => "identifier",
            TokenKind::Atom => "atom",
            TokenKind::String => "string",
            TokenKind::Documentation => "documentation",
            TokenKind::EndOfInput => "end of input",
            other => other.spelling().unwrap_or("token"),
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.spelling() {
            Some(spelling) => write!(f, "\"{spelling}\""),
            Option::None => f.write_str(self.display_name()),
        }
    }
}
