//! Walks: repeatedly executing one move index until a state recurs.
//!
//! The index is resolved against each state's own move list, so the kind of
//! move performed can change from step to step when the number of slide moves
//! changes. A step whose index falls outside the current move list leaves the
//! state as it is, which the walk then sees as a recurrence.
//!
//! Visited states are kept both in order (the history) and in an `FxHashMap`
//! from state to step, so recurrence checks don't rescan the history.

use std::iter::FusedIterator;

use rustc_hash::FxHashMap;

use crate::error::{Result, RotatorError};
use crate::grid::PuzzleState;

/// How a finished walk ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WalkSummary {
    /// Number of states emitted.
    pub steps: usize,
    /// Step whose state the walk arrived at again.
    pub revisited_step: usize,
    /// The live state when the walk stopped, equal to the revisited one.
    pub final_state: PuzzleState,
}

impl WalkSummary {
    /// Length of the cycle the walk closed.
    pub fn cycle_len(&self) -> usize {
        self.steps - self.revisited_step
    }
}

/// Iterator over the states of a walk, starting with the initial state.
///
/// Each call to `next` yields the current state, then executes the walk's
/// move index on it.
#[derive(Debug)]
pub struct Walk {
    state: PuzzleState,
    action: usize,
    history: Vec<PuzzleState>,
    seen: FxHashMap<PuzzleState, usize>,
    revisited_step: Option<usize>,
}

impl Walk {
    /// Starts a walk, checking `action` against the initial move list.
    pub fn new(start: PuzzleState, action: usize) -> Result<Self> {
        let count = start.moves().len();
        if action >= count {
            return Err(RotatorError::ActionOutOfRange {
                index: action,
                count,
            });
        }

        Ok(Self {
            state: start,
            action,
            history: Vec::new(),
            seen: FxHashMap::default(),
            revisited_step: None,
        })
    }

    /// States emitted so far, in order.
    pub fn history(&self) -> &[PuzzleState] {
        &self.history
    }

    pub fn is_finished(&self) -> bool {
        self.revisited_step.is_some()
    }

    /// Returns the summary once the walk has stopped.
    pub fn summary(&self) -> Option<WalkSummary> {
        self.revisited_step.map(|revisited_step| WalkSummary {
            steps: self.history.len(),
            revisited_step,
            final_state: self.state.clone(),
        })
    }
}

impl Iterator for Walk {
    type Item = PuzzleState;

    fn next(&mut self) -> Option<Self::Item> {
        if self.is_finished() {
            return None;
        }

        let current = self.state.clone();
        let step = self.history.len();
        self.seen.insert(current.clone(), step);
        self.history.push(current.clone());

        if let Err(err) = self.state.execute(self.action) {
            log::debug!("walk step {step} made no move: {err}");
        }

        if let Some(&revisited) = self.seen.get(&self.state) {
            log::debug!("walk returned to step {revisited} after {} states", step + 1);
            self.revisited_step = Some(revisited);
        }

        Some(current)
    }
}

impl FusedIterator for Walk {}

/// Runs a walk to completion and returns every emitted state.
pub fn walk(start: PuzzleState, action: usize) -> Result<Vec<PuzzleState>> {
    let mut walk = Walk::new(start, action)?;
    walk.by_ref().for_each(drop);
    Ok(walk.history)
}
