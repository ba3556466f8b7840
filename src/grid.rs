//! Puzzle state representation and the raw grid operations.
//!
//! The grid is stored as a flat row-major vector of tiles. A tile is a single
//! character; the notation's blank marker denotes the empty cell.

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, RotatorError};
use crate::notation::{Notation, MIN_COLS, MIN_ROWS};

/// A cell position: `(x, y)` with `x` the column and `y` the row.
pub type Coord = (usize, usize);

/// A rectangular grid of tiles with at most one meaningful blank.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PuzzleState {
    tiles: Vec<char>,
    cols: usize,
    notation: Notation,
}

impl PuzzleState {
    /// Parses a serialized state using the given notation.
    ///
    /// Rows are split on the separator and every character of a row is one
    /// tile. The grid must have at least `MIN_ROWS` rows of `MIN_COLS` tiles
    /// each; rows long enough but of differing lengths are `UnevenRows`.
    pub fn parse(serialized: &str, notation: Notation) -> Result<Self> {
        let rows: Vec<Vec<char>> = serialized
            .split(notation.separator)
            .map(|row| row.chars().collect())
            .collect();

        if rows.len() < MIN_ROWS || rows.iter().any(|row| row.len() < MIN_COLS) {
            return Err(RotatorError::MalformedState {
                state: serialized.to_owned(),
            });
        }

        let cols = rows[0].len();
        if let Some((row, found)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != cols)
        {
            return Err(RotatorError::UnevenRows {
                row,
                expected: cols,
                found,
            });
        }

        Ok(Self {
            tiles: rows.concat(),
            cols,
            notation,
        })
    }

    pub fn rows(&self) -> usize {
        self.tiles.len() / self.cols
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn notation(&self) -> Notation {
        self.notation
    }

    /// Converts a cell position to an index into the flat tile vector.
    #[inline]
    fn coord_to_idx(&self, (x, y): Coord) -> usize {
        y * self.cols + x
    }

    /// Converts a flat tile index back to a cell position.
    #[inline]
    fn idx_to_coord(&self, idx: usize) -> Coord {
        (idx % self.cols, idx / self.cols)
    }

    pub fn contains(&self, (x, y): Coord) -> bool {
        x < self.cols && y < self.rows()
    }

    /// Returns the tile at a position, or `None` outside the grid.
    pub fn tile(&self, coord: Coord) -> Option<char> {
        self.contains(coord).then(|| self.tiles[self.coord_to_idx(coord)])
    }

    /// Returns the tiles of one row. Panics if `y` is not a row.
    pub(crate) fn row(&self, y: usize) -> &[char] {
        &self.tiles[y * self.cols..(y + 1) * self.cols]
    }

    fn row_mut(&mut self, y: usize) -> &mut [char] {
        let cols = self.cols;
        &mut self.tiles[y * cols..(y + 1) * cols]
    }

    fn is_blank(&self, tile: char) -> bool {
        tile == self.notation.blank
    }

    /// Returns whether every column holds a single kind of tile.
    ///
    /// Each tile is compared against the top tile of its column; a blank on
    /// either side of the comparison never counts as a mismatch.
    pub fn is_goal(&self) -> bool {
        let top = self.row(0);
        (1..self.rows()).all(|y| {
            self.row(y).iter().zip(top).all(|(&tile, &first)| {
                tile == first || self.is_blank(tile) || self.is_blank(first)
            })
        })
    }

    /// Finds the first blank scanning rows top to bottom, left to right.
    pub fn locate_blank(&self) -> Option<Coord> {
        self.tiles
            .iter()
            .position(|&tile| self.is_blank(tile))
            .map(|idx| self.idx_to_coord(idx))
    }

    /// Circularly shifts row `y` so the tile at column `i` lands at
    /// column `(i + offset) mod cols`. Panics if `y` is not a row.
    pub(crate) fn rotate_row(&mut self, y: usize, offset: isize) {
        let row = self.row_mut(y);
        let shift = offset.rem_euclid(row.len() as isize) as usize;
        row.rotate_right(shift);
    }

    /// Exchanges the tiles at two positions. Both must be inside the grid.
    pub(crate) fn swap(&mut self, a: Coord, b: Coord) {
        let (a, b) = (self.coord_to_idx(a), self.coord_to_idx(b));
        self.tiles.swap(a, b);
    }
}

impl FromStr for PuzzleState {
    type Err = RotatorError;

    fn from_str(serialized: &str) -> Result<Self> {
        Self::parse(serialized, Notation::DEFAULT)
    }
}

/// Writes the serialized form: rows joined by the separator.
impl fmt::Display for PuzzleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.tiles.chunks(self.cols).enumerate() {
            if y > 0 {
                write!(f, "{}", self.notation.separator)?;
            }
            for tile in row {
                write!(f, "{tile}")?;
            }
        }
        Ok(())
    }
}
