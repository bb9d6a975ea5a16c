//! Command handlers for the Foo CLI.

mod lex;

pub use lex::{format_tokens, lex_file, parse_lex_options, LexOptions};

use std::io;

/// Read a Foo source file, describing a failure in one line.
///
/// # Errors
///
/// Returns `fooc: <reason>` when the file is missing, unreadable or not
/// UTF-8.
pub fn read_source(path: &str) -> Result<String, String> {
    std::fs::read_to_string(path).map_err(|e| {
        let reason = match e.kind() {
            io::ErrorKind::NotFound => format!("no source file at '{path}'"),
            io::ErrorKind::PermissionDenied => format!("not allowed to read '{path}'"),
            io::ErrorKind::InvalidData => format!("'{path}' is not UTF-8 text"),
            _ => format!("failed to read '{path}': {e}"),
        };
        format!("fooc: {reason}")
    })
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
