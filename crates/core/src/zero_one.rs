//! 01 engine - count down from the start score to exactly zero.
//!
//! Rules:
//! - Each dart subtracts its value from the remaining score.
//! - Overshooting zero is a **bust**: the remaining score snaps back to the
//!   value at the start of the round and the round's other darts are forfeited.
//! - Hitting exactly zero is a checkout and ends the game. No double-out rule
//!   is enforced.
//! - The game is over after `max_rounds` rounds without a checkout.
//!
//! Every operation that is not valid in the current state is a silent no-op
//! returning `false`, so a doubled UI event can never corrupt the game.

use crate::engine::DartsEngine;
use crate::history::{RoundSummary, TurnHistory};
use crate::snapshot::{BoardSnapshot, EngineSnapshot};
use crate::throw::Throw;
use crate::turn::{DartRecord, Turn};
use crate::types::{GameStatus, GameType};

/// State restored by a single-dart undo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ZeroOneSnapshot {
    remaining: u32,
    status: GameStatus,
    turn: Turn,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZeroOneEngine {
    start_score: u32,
    max_rounds: u32,
    remaining: u32,
    start_of_round: u32,
    round: u32,
    status: GameStatus,
    turn: Turn,
    history: TurnHistory<ZeroOneSnapshot>,
    /// Set once the checkout round has been written to the log.
    final_round_logged: bool,
}

impl ZeroOneEngine {
    pub fn new(start_score: u32, max_rounds: u32) -> Self {
        Self {
            start_score,
            max_rounds,
            remaining: start_score,
            start_of_round: start_score,
            round: 1,
            status: GameStatus::Playing,
            turn: Turn::new(),
            history: TurnHistory::new(),
            final_round_logged: false,
        }
    }

    pub fn start_score(&self) -> u32 {
        self.start_score
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn start_of_round_score(&self) -> u32 {
        self.start_of_round
    }

    /// Points taken off the start score so far.
    pub fn points_scored(&self) -> u32 {
        self.start_score - self.remaining
    }

    /// Points the current round counts for (0 once it busts).
    pub fn round_points(&self) -> u32 {
        if self.status == GameStatus::Bust {
            0
        } else {
            self.turn.points()
        }
    }

    fn capture(&self) -> ZeroOneSnapshot {
        ZeroOneSnapshot {
            remaining: self.remaining,
            status: self.status,
            turn: self.turn,
        }
    }

    fn restore(&mut self, snap: ZeroOneSnapshot) {
        self.remaining = snap.remaining;
        self.status = snap.status;
        self.turn = snap.turn;
    }

    fn reopen_round(&mut self) {
        self.remaining = self.start_of_round;
        self.status = GameStatus::Playing;
        self.turn.clear();
        self.history.clear_round();
    }
}

impl DartsEngine for ZeroOneEngine {
    fn apply_throw(&mut self, throw: Throw) -> bool {
        if self.status != GameStatus::Playing || self.turn.is_full() {
            return false;
        }

        self.history.record(self.capture());

        let value = throw.value();
        self.turn.push(DartRecord::scored(throw));

        if value > self.remaining {
            self.status = GameStatus::Bust;
            self.remaining = self.start_of_round;
            self.turn.forfeit_rest();
        } else {
            self.remaining -= value;
            if self.remaining == 0 {
                self.status = GameStatus::Finished;
            }
        }
        true
    }

    fn undo(&mut self) -> bool {
        if self.turn.is_empty() {
            return false;
        }
        match self.status {
            GameStatus::Finished | GameStatus::GameOver => false,
            // A bust voids the whole visit, so undoing it reopens the round.
            GameStatus::Bust => {
                self.reopen_round();
                true
            }
            GameStatus::Playing => match self.history.pop() {
                Some(snap) => {
                    self.restore(snap);
                    true
                }
                None => false,
            },
        }
    }

    fn next_round(&mut self) -> bool {
        if !self.round_complete() {
            return false;
        }

        let total = self.round_points();
        self.history
            .log_round(RoundSummary::from_turn(self.round, &self.turn, total));
        self.history.clear_round();

        match self.status {
            GameStatus::Finished => {
                self.final_round_logged = true;
                return true;
            }
            _ if self.round >= self.max_rounds => {
                self.status = GameStatus::GameOver;
                return true;
            }
            GameStatus::Bust => {
                // remaining was already restored when the bust happened
                self.status = GameStatus::Playing;
            }
            _ => {
                self.start_of_round = self.remaining;
            }
        }

        self.round += 1;
        self.turn.clear();
        true
    }

    fn retry_round(&mut self) -> bool {
        match self.status {
            GameStatus::Finished | GameStatus::GameOver => false,
            GameStatus::Playing if self.turn.is_empty() => false,
            GameStatus::Playing | GameStatus::Bust => {
                self.reopen_round();
                true
            }
        }
    }

    fn reset(&mut self) {
        *self = Self::new(self.start_score, self.max_rounds);
    }

    fn round_complete(&self) -> bool {
        match self.status {
            GameStatus::GameOver => false,
            GameStatus::Finished => !self.final_round_logged,
            GameStatus::Bust => true,
            GameStatus::Playing => self.turn.is_full(),
        }
    }

    fn status(&self) -> GameStatus {
        self.status
    }

    fn round_number(&self) -> u32 {
        self.round
    }

    fn max_rounds(&self) -> u32 {
        self.max_rounds
    }

    fn turn(&self) -> &Turn {
        &self.turn
    }

    fn round_log(&self) -> &[RoundSummary] {
        self.history.round_log()
    }

    fn undo_depth(&self) -> usize {
        self.history.undo_depth()
    }

    fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            game_type: GameType::ZeroOne,
            status: self.status,
            round: self.round,
            max_rounds: self.max_rounds,
            turn: self.turn,
            round_points: self.round_points(),
            board: BoardSnapshot::ZeroOne {
                start_score: self.start_score,
                remaining: self.remaining,
                start_of_round: self.start_of_round,
            },
        }
    }
}
