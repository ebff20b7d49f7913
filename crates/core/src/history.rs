//! Turn history - per-throw undo snapshots and the completed-round log.
//!
//! The undo stack holds whole-state values, never references into the live
//! engine, so restoring a snapshot can't alias state that later changes.
//! At most one snapshot per dart of the current round is ever held.

use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};

use crate::turn::{Slot, Turn};
use crate::types::DARTS_PER_ROUND;

/// Summary of one completed round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoundSummary {
    pub round: u32,
    pub darts: [Slot; DARTS_PER_ROUND],
    /// Points credited to the round (0 for a 01 bust).
    pub total: u32,
}

impl RoundSummary {
    pub fn from_turn(round: u32, turn: &Turn, total: u32) -> Self {
        Self {
            round,
            darts: *turn.slots(),
            total,
        }
    }

    pub fn labels(&self) -> [&str; DARTS_PER_ROUND] {
        [
            self.darts[0].label(),
            self.darts[1].label(),
            self.darts[2].label(),
        ]
    }
}

/// Undo stack plus round log, owned by a single engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnHistory<S> {
    undo_stack: ArrayVec<S, DARTS_PER_ROUND>,
    /// Newest first.
    round_log: Vec<RoundSummary>,
}

impl<S> Default for TurnHistory<S> {
    fn default() -> Self {
        Self {
            undo_stack: ArrayVec::new(),
            round_log: Vec::new(),
        }
    }
}

impl<S> TurnHistory<S> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push the pre-throw snapshot.
    ///
    /// The engines only record while a slot is free, so the stack can't
    /// overflow; if it somehow is full the oldest entry is dropped.
    pub fn record(&mut self, snapshot: S) {
        if self.undo_stack.is_full() {
            self.undo_stack.remove(0);
        }
        self.undo_stack.push(snapshot);
    }

    /// Pop the most recent snapshot.
    pub fn pop(&mut self) -> Option<S> {
        self.undo_stack.pop()
    }

    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    /// Forget this round's snapshots (called at every round boundary).
    pub fn clear_round(&mut self) {
        self.undo_stack.clear();
    }

    /// Prepend a completed round.
    pub fn log_round(&mut self, summary: RoundSummary) {
        self.round_log.insert(0, summary);
    }

    /// Completed rounds, newest first.
    pub fn round_log(&self) -> &[RoundSummary] {
        &self.round_log
    }

    /// Full-game reset.
    pub fn reset(&mut self) {
        self.undo_stack.clear();
        self.round_log.clear();
    }
}
