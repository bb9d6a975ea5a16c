//! Foo command-line front end.
//!
//! The binary in `main.rs` only dispatches on the first argument; each
//! command lives in [`commands`].

pub mod commands;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install the lexer's log output.
///
/// Nothing is installed unless `RUST_LOG` holds a valid filter, e.g.
/// `RUST_LOG=foo_lexer=trace` for one line per token. Logs go to stderr so
/// that `fooc lex` output on stdout stays a clean token listing. Repeated
/// calls are no-ops.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if let Ok(filter) = EnvFilter::try_from_default_env() {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}
