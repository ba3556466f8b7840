//! Textual conventions for reading and writing puzzle states.

use crate::error::{Result, RotatorError};

/// Minimum number of rows in a puzzle.
pub const MIN_ROWS: usize = 2;
/// Minimum number of tiles per row.
pub const MIN_COLS: usize = 2;

/// State used when the command line does not supply one.
///
/// Three rows of five tiles, blank at column 4 of row 1.
pub const DEFAULT_STATE: &str = "12345|1234 |12354";

/// Characters that delimit rows and mark the blank tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Notation {
    pub separator: char,
    pub blank: char,
}

impl Notation {
    pub const DEFAULT: Self = Self {
        separator: '|',
        blank: ' ',
    };

    /// Creates a notation, rejecting a separator that doubles as the blank.
    pub fn new(separator: char, blank: char) -> Result<Self> {
        if separator == blank {
            return Err(RotatorError::InvalidNotation(blank));
        }
        Ok(Self { separator, blank })
    }
}

impl Default for Notation {
    fn default() -> Self {
        Self::DEFAULT
    }
}
