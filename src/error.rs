//! Error type shared by the puzzle engine and the command line.

use thiserror::Error;

use crate::command::COMMAND_NAMES;
use crate::moves::Move;
use crate::notation::{MIN_COLS, MIN_ROWS};

#[derive(Error, Debug)]
pub enum RotatorError {
    #[error("no command given")]
    NoCommandGiven,
    #[error(
        "given state \"{state}\" either does not meet the minimum row size requirement of \
         {} or the minimum column size requirement of {}",
        MIN_ROWS,
        MIN_COLS
    )]
    MalformedState { state: String },
    #[error("row {row} of the given state has {found} tiles, expected {expected}")]
    UnevenRows {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error(
        "command {0} not recognized. available commands are:\n{}",
        command_list()
    )]
    UnrecognizedCommand(String),
    #[error("no walk action number given")]
    MissingWalkIndex,
    #[error("walk action {0} not a positive integer.")]
    InvalidWalkIndex(String),
    #[error(
        "action number \"{index}\" is invalid, enter action number as index (0 - {}).",
        .count.saturating_sub(1)
    )]
    ActionOutOfRange { index: usize, count: usize },
    #[error("\"{0}\" is not a valid move")]
    InvalidMove(String),
    #[error("move {0} does not fit the grid")]
    MoveOutOfBounds(Move),
    #[error("separator and blank marker must differ, both are {0:?}")]
    InvalidNotation(char),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

fn command_list() -> String {
    COMMAND_NAMES
        .iter()
        .map(|name| format!("  - {name}"))
        .collect::<Vec<_>>()
        .join("\n")
}

pub type Result<T, E = RotatorError> = std::result::Result<T, E>;
