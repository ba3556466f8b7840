//! Command names accepted on the command line.

use std::str::FromStr;

use crate::error::{Result, RotatorError};

const PRINT: &str = "print";
const GOAL: &str = "goal";
const ACTIONS: &str = "actions";
const WALK: &str = "walk";

/// Names shown when a command is not recognized.
pub const COMMAND_NAMES: [&str; 4] = [PRINT, GOAL, ACTIONS, "walk<i>"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Print the serialized state.
    Print,
    /// Print whether the state is a goal state.
    Goal,
    /// Print the legal moves, one per line.
    Actions,
    /// Walk with the given move index, printing each state.
    Walk(usize),
}

impl FromStr for Command {
    type Err = RotatorError;

    fn from_str(name: &str) -> Result<Self> {
        match name {
            PRINT => Ok(Command::Print),
            GOAL => Ok(Command::Goal),
            ACTIONS => Ok(Command::Actions),
            _ => {
                let index = name
                    .strip_prefix(WALK)
                    .ok_or_else(|| RotatorError::UnrecognizedCommand(name.to_owned()))?;
                if index.is_empty() {
                    return Err(RotatorError::MissingWalkIndex);
                }
                if !index.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(RotatorError::InvalidWalkIndex(index.to_owned()));
                }
                index
                    .parse()
                    .map(Command::Walk)
                    .map_err(|_| RotatorError::InvalidWalkIndex(index.to_owned()))
            }
        }
    }
}
