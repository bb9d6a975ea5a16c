//! Source positions.
//!
//! Positions are expressed in rows and columns rather than byte offsets
//! because their main consumer is diagnostic output. Both are 1-based.

use std::fmt;

/// Location of a token in its source unit.
///
/// `row` and `col` point at the first character of the token; `len` is the
/// number of raw source characters the token spans (escapes, delimiters and
/// separators included). Only synthetic tokens such as the end-of-input
/// sentinel have `len == 0`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SourcePosition {
    pub row: u32,
    pub col: u32,
    pub len: u32,
}

impl SourcePosition {
    /// Create a new position.
    #[inline]
    pub const fn new(row: u32, col: u32, len: u32) -> Self {
        SourcePosition { row, col, len }
    }

    /// Whether the position covers no source characters.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl fmt::Display for SourcePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}:{}]", self.row, self.col)
    }
}
