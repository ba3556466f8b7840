//! Rotator Puzzle Library
//!
//! A rotator is a rectangular grid of single-character tiles with one blank.
//! Rows can be rotated circularly and tiles above or below the blank can
//! slide into it. The puzzle is solved when every column holds one kind of
//! tile, ignoring blanks.

pub mod command;
pub mod error;
pub mod grid;
pub mod moves;
pub mod notation;
pub mod walk;

pub use command::Command;
pub use error::{Result, RotatorError};
pub use grid::{Coord, PuzzleState};
pub use moves::{Direction, Move};
pub use notation::{Notation, DEFAULT_STATE};
pub use walk::{Walk, WalkSummary};
