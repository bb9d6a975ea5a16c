//! `fooc lex`: tokenize a file and print the token stream.

use std::fmt::Write as _;

use foo_ir::Token;
use foo_lexer::{tokenize, LexerConfig};
use tracing::debug;

use super::read_source;

/// Options accepted after `fooc lex`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LexOptions {
    pub path: String,
    pub config: LexerConfig,
}

/// Parse `<file> [--tab-size=N]`.
///
/// The tab width starts from `base` (normally [`LexerConfig::from_env`]) and
/// is overridden by `--tab-size`.
///
/// # Errors
///
/// Returns a message for a missing path, an unknown option or an invalid
/// tab width.
pub fn parse_lex_options(args: &[String], base: LexerConfig) -> Result<LexOptions, String> {
    let mut path = None;
    let mut config = base;
    for arg in args {
        if let Some(value) = arg.strip_prefix("--tab-size=") {
            config = LexerConfig::parse_tab_size(value).map_err(|e| format!("--tab-size: {e}"))?;
        } else if arg.starts_with('-') {
            return Err(format!("unknown option '{arg}'"));
        } else if path.is_none() {
            path = Some(arg.clone());
        } else {
            return Err(format!("unexpected argument '{arg}'"));
        }
    }
    let path = path.ok_or_else(|| "missing file path".to_string())?;
    Ok(LexOptions { path, config })
}

/// Format a token listing the way `fooc lex` prints it.
pub fn format_tokens(path: &str, tokens: &[Token]) -> String {
    let mut out = format!("Tokens for '{}' ({} tokens):\n", path, tokens.len());
    for token in tokens {
        // Writing to a String cannot fail.
        let _ = writeln!(out, "  {token}");
    }
    out
}

/// Lex a file and display the token stream.
///
/// On an unreadable file or a lexical error the message goes to stderr and
/// the process exits with status 1.
pub fn lex_file(options: &LexOptions) {
    let source = match read_source(&options.path) {
        Ok(source) => source,
        Err(msg) => {
            eprintln!("{msg}");
            std::process::exit(1);
        }
    };
    debug!(
        path = %options.path,
        tab_size = options.config.indentation_tab_size(),
        "lexing file"
    );
    match tokenize(&source, &options.config) {
        Ok(tokens) => print!("{}", format_tokens(&options.path, &tokens)),
        Err(err) => {
            eprintln!("{}", err.render(&source));
            std::process::exit(1);
        }
    }
}
