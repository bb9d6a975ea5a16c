//! Lexer configuration.
//!
//! The lexer consumes a single setting: how many columns a horizontal tab
//! advances. It can be set programmatically or through the `FOO_TAB_SIZE`
//! environment variable.

use tracing::warn;

/// Environment variable overriding the tab width.
pub const TAB_SIZE_ENV: &str = "FOO_TAB_SIZE";

/// Tab width used when nothing else is configured.
pub const DEFAULT_TAB_SIZE: u32 = 4;

/// Rejected configuration values.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("indentation tab size must be positive")]
    ZeroTabSize,
    #[error("invalid indentation tab size `{0}`")]
    InvalidTabSize(String),
}

/// Settings consumed by the lexer.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct LexerConfig {
    indentation_tab_size: u32,
}

impl LexerConfig {
    /// Create a configuration with the given tab width.
    pub fn new(indentation_tab_size: u32) -> Result<Self, ConfigError> {
        if indentation_tab_size == 0 {
            return Err(ConfigError::ZeroTabSize);
        }
        Ok(Self {
            indentation_tab_size,
        })
    }

    /// Parse a tab width as written in the environment or on a command line.
    pub fn parse_tab_size(value: &str) -> Result<Self, ConfigError> {
        let size = value
            .trim()
            .parse::<u32>()
            .map_err(|_| ConfigError::InvalidTabSize(value.to_string()))?;
        Self::new(size)
    }

    /// Read the configuration from `FOO_TAB_SIZE`.
    ///
    /// Falls back to the default when the variable is unset or invalid.
    pub fn from_env() -> Self {
        match std::env::var(TAB_SIZE_ENV) {
            Ok(value) => Self::parse_tab_size(&value).unwrap_or_else(|err| {
                warn!(%err, var = TAB_SIZE_ENV, value = %value, "ignoring invalid tab size");
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    /// Columns a horizontal tab advances.
    #[inline]
    pub fn indentation_tab_size(&self) -> u32 {
        self.indentation_tab_size
    }
}

impl Default for LexerConfig {
    fn default() -> Self {
        Self {
            indentation_tab_size: DEFAULT_TAB_SIZE,
        }
    }
}
