//! Cricket engine - close 20 through 15 and the bull, score on overflow.
//!
//! Single player rules:
//! - A single/double/triple on a target adds 1/2/3 marks (bull: 1 or 2).
//! - A target is closed at 3 marks.
//! - Marks beyond the third score the target's face value each. When one dart
//!   closes a target and overflows, only the marks past 3 score.
//! - Darts on other numbers score nothing.
//! - Closing all seven targets finishes the game; otherwise it ends after
//!   `max_rounds` rounds.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::engine::DartsEngine;
use crate::history::{RoundSummary, TurnHistory};
use crate::snapshot::{BoardSnapshot, EngineSnapshot};
use crate::throw::{Label, Throw};
use crate::turn::{DartRecord, Turn};
use crate::types::{GameStatus, GameType, CRICKET_TARGETS, MARKS_TO_CLOSE, MARK_DISPLAY_CAP};

/// Mark counts for the seven targets, in [`CRICKET_TARGETS`] order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Marks([u8; CRICKET_TARGETS.len()]);

impl Marks {
    /// Position of `segment` in [`CRICKET_TARGETS`], if it is a target.
    pub fn index_of(segment: u8) -> Option<usize> {
        CRICKET_TARGETS.iter().position(|&t| t == segment)
    }

    /// Marks on `segment`; `None` for non-targets.
    pub fn get(&self, segment: u8) -> Option<u8> {
        Self::index_of(segment).map(|i| self.0[i])
    }

    pub fn is_closed(&self, segment: u8) -> bool {
        self.get(segment).is_some_and(|m| m >= MARKS_TO_CLOSE)
    }

    pub fn closed_count(&self) -> usize {
        self.0.iter().filter(|&&m| m >= MARKS_TO_CLOSE).count()
    }

    pub fn all_closed(&self) -> bool {
        self.closed_count() == CRICKET_TARGETS.len()
    }

    /// Total marks on the board (used for marks-per-round).
    pub fn total(&self) -> u32 {
        self.0.iter().map(|&m| m as u32).sum()
    }

    /// `(target, marks)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, u8)> + '_ {
        CRICKET_TARGETS.iter().copied().zip(self.0.iter().copied())
    }

    pub fn as_array(&self) -> &[u8; CRICKET_TARGETS.len()] {
        &self.0
    }
}

/// State restored by a single-dart undo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CricketSnapshot {
    marks: Marks,
    total_score: u32,
    status: GameStatus,
    turn: Turn,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CricketEngine {
    max_rounds: u32,
    marks: Marks,
    total_score: u32,
    round_start_marks: Marks,
    round_start_score: u32,
    round: u32,
    status: GameStatus,
    turn: Turn,
    history: TurnHistory<CricketSnapshot>,
    final_round_logged: bool,
}

/// Points and slot label for one dart against `marks`, updating `marks`.
fn score_dart(marks: &mut Marks, throw: Throw) -> (u32, Label) {
    let Some(i) = Marks::index_of(throw.segment) else {
        let mut label = Label::new();
        if throw.is_miss() {
            label.push_str("MISS");
        } else {
            let _ = write!(label, "{}", throw.segment);
        }
        return (0, label);
    };

    let face = throw.segment as u32;
    let hits = throw.multiplier.factor() as u32;
    let current = marks.0[i] as u32;
    let updated = current + hits;
    let close = MARKS_TO_CLOSE as u32;

    let earned = if current >= close {
        face * hits
    } else if updated > close {
        face * (updated - close)
    } else {
        0
    };

    marks.0[i] = updated.min(MARK_DISPLAY_CAP as u32) as u8;
    (earned, throw.label())
}

impl CricketEngine {
    pub fn new(max_rounds: u32) -> Self {
        Self {
            max_rounds,
            marks: Marks::default(),
            total_score: 0,
            round_start_marks: Marks::default(),
            round_start_score: 0,
            round: 1,
            status: GameStatus::Playing,
            turn: Turn::new(),
            history: TurnHistory::new(),
            final_round_logged: false,
        }
    }

    pub fn marks(&self) -> &Marks {
        &self.marks
    }

    pub fn total_score(&self) -> u32 {
        self.total_score
    }

    /// Overflow points earned in the current round.
    pub fn round_points(&self) -> u32 {
        self.turn.points()
    }

    fn capture(&self) -> CricketSnapshot {
        CricketSnapshot {
            marks: self.marks,
            total_score: self.total_score,
            status: self.status,
            turn: self.turn,
        }
    }

    fn restore(&mut self, snap: CricketSnapshot) {
        self.marks = snap.marks;
        self.total_score = snap.total_score;
        self.status = snap.status;
        self.turn = snap.turn;
    }

    fn open_for_input(&self) -> bool {
        match self.status {
            GameStatus::Playing => true,
            GameStatus::Finished => !self.final_round_logged,
            GameStatus::Bust | GameStatus::GameOver => false,
        }
    }
}

impl DartsEngine for CricketEngine {
    fn apply_throw(&mut self, throw: Throw) -> bool {
        if self.status != GameStatus::Playing || self.turn.is_full() {
            return false;
        }

        self.history.record(self.capture());

        let (earned, label) = score_dart(&mut self.marks, throw);
        self.total_score += earned;
        self.turn.push(DartRecord {
            throw,
            label,
            points: earned,
        });

        if self.marks.all_closed() {
            self.status = GameStatus::Finished;
        }
        true
    }

    fn undo(&mut self) -> bool {
        if self.turn.is_empty() || !self.open_for_input() {
            return false;
        }
        match self.history.pop() {
            Some(snap) => {
                self.restore(snap);
                true
            }
            None => false,
        }
    }

    fn next_round(&mut self) -> bool {
        if !self.round_complete() {
            return false;
        }

        self.history.log_round(RoundSummary::from_turn(
            self.round,
            &self.turn,
            self.turn.points(),
        ));
        self.history.clear_round();

        if self.status == GameStatus::Finished {
            self.final_round_logged = true;
            return true;
        }
        if self.round >= self.max_rounds {
            self.status = GameStatus::GameOver;
            return true;
        }

        self.round_start_marks = self.marks;
        self.round_start_score = self.total_score;
        self.round += 1;
        self.turn.clear();
        true
    }

    fn retry_round(&mut self) -> bool {
        if !self.open_for_input() || (self.status == GameStatus::Playing && self.turn.is_empty()) {
            return false;
        }
        self.marks = self.round_start_marks;
        self.total_score = self.round_start_score;
        self.status = GameStatus::Playing;
        self.turn.clear();
        self.history.clear_round();
        true
    }

    fn reset(&mut self) {
        *self = Self::new(self.max_rounds);
    }

    fn round_complete(&self) -> bool {
        match self.status {
            GameStatus::Finished => !self.final_round_logged,
            GameStatus::Playing => self.turn.is_full(),
            GameStatus::Bust | GameStatus::GameOver => false,
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
            game_type: GameType::Cricket,
            status: self.status,
            round: self.round,
            max_rounds: self.max_rounds,
            turn: self.turn,
            round_points: self.round_points(),
            board: BoardSnapshot::Cricket {
                marks: self.marks,
                total_score: self.total_score,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::throw::normalize;

    fn t(segment: u8, multiplier: u8) -> Throw {
        normalize(segment, multiplier).unwrap()
    }

    #[test]
    fn marks_accumulate_without_score() {
        let mut e = CricketEngine::new(15);
        e.apply_throw(t(20, 2));
        assert_eq!(e.marks().get(20), Some(2));
        assert_eq!(e.total_score(), 0);

        e.apply_throw(t(20, 1));
        assert_eq!(e.marks().get(20), Some(3));
        assert!(e.marks().is_closed(20));
        assert_eq!(e.total_score(), 0);

        e.apply_throw(t(20, 3));
        assert_eq!(e.marks().get(20), Some(6));
        assert_eq!(e.total_score(), 60);
        assert_eq!(e.round_points(), 60);
    }

    #[test]
    fn closing_throw_scores_only_overflow() {
        let mut e = CricketEngine::new(15);
        e.apply_throw(t(18, 2));
        e.apply_throw(t(18, 3));
        assert_eq!(e.marks().get(18), Some(5));
        assert_eq!(e.total_score(), 36);
    }

    #[test]
    fn non_target_scores_nothing() {
        let mut e = CricketEngine::new(15);
        e.apply_throw(t(14, 3));
        e.apply_throw(t(0, 1));
        assert_eq!(e.total_score(), 0);
        assert_eq!(e.marks().total(), 0);
        assert_eq!(e.turn().slots()[0].label(), "14");
        assert_eq!(e.turn().slots()[1].label(), "MISS");
        assert_eq!(e.turn().throw_index(), 2);
    }

    #[test]
    fn bull_marks_and_triple_coercion() {
        let mut e = CricketEngine::new(15);
        e.apply_throw(t(25, 3));
        assert_eq!(e.marks().get(25), Some(1));
        e.apply_throw(t(25, 2));
        assert_eq!(e.marks().get(25), Some(3));
        assert_eq!(e.total_score(), 0);
        e.apply_throw(t(25, 2));
        assert_eq!(e.total_score(), 50);
        assert_eq!(e.turn().slots()[0].label(), "S-BULL");
    }

    #[test]
    fn marks_are_capped_for_display() {
        let mut marks = Marks::default();
        marks.0[0] = 98;
        let (earned, _) = score_dart(&mut marks, t(20, 3));
        assert_eq!(earned, 60);
        assert_eq!(marks.get(20), Some(99));
    }

    #[test]
    fn closing_all_targets_finishes() {
        let mut e = CricketEngine::new(15);
        e.marks = Marks([3, 3, 3, 3, 3, 3, 2]);
        e.apply_throw(t(25, 1));
        assert_eq!(e.status(), GameStatus::Finished);
        assert!(!e.apply_throw(t(20, 1)));
    }

    #[test]
    fn undo_reverts_finish() {
        let mut e = CricketEngine::new(15);
        e.marks = Marks([3, 3, 3, 3, 3, 3, 2]);
        e.round_start_marks = e.marks;
        let before = e.clone();
        e.apply_throw(t(25, 2));
        assert_eq!(e.status(), GameStatus::Finished);
        assert!(e.undo());
        assert_eq!(e, before);
        assert_eq!(e.status(), GameStatus::Playing);
    }

    #[test]
    fn undo_pops_one_dart() {
        let mut e = CricketEngine::new(15);
        e.apply_throw(t(20, 3));
        e.apply_throw(t(20, 3));
        assert_eq!(e.total_score(), 60);
        assert!(e.undo());
        assert_eq!(e.total_score(), 0);
        assert_eq!(e.marks().get(20), Some(3));
        assert_eq!(e.turn().throw_index(), 1);
        assert!(e.undo());
        assert!(!e.undo());
    }

    #[test]
    fn retry_restores_round_start() {
        let mut e = CricketEngine::new(15);
        e.apply_throw(t(20, 3));
        e.apply_throw(t(19, 3));
        e.apply_throw(t(18, 3));
        e.next_round();
        e.apply_throw(t(20, 3));
        e.apply_throw(t(17, 1));
        assert!(e.retry_round());
        assert_eq!(e.total_score(), 0);
        assert_eq!(e.marks().get(20), Some(3));
        assert_eq!(e.marks().get(17), Some(0));
        assert!(e.turn().is_empty());
    }

    #[test]
    fn next_round_logs_round_points() {
        let mut e = CricketEngine::new(15);
        e.apply_throw(t(20, 3));
        e.apply_throw(t(20, 2));
        e.apply_throw(t(5, 1));
        assert!(e.next_round());
        let log = e.round_log();
        assert_eq!(log[0].round, 1);
        assert_eq!(log[0].total, 40);
        assert_eq!(log[0].labels(), ["T-20", "D-20", "5"]);
        assert_eq!(e.round_number(), 2);
    }

    #[test]
    fn round_limit_gameover() {
        let mut e = CricketEngine::new(1);
        for _ in 0..3 {
            e.apply_throw(t(1, 1));
        }
        assert!(e.next_round());
        assert_eq!(e.status(), GameStatus::GameOver);
        assert!(!e.undo());
        assert!(!e.retry_round());
    }

    #[test]
    fn finished_round_logged_once() {
        let mut e = CricketEngine::new(15);
        e.marks = Marks([3, 3, 3, 3, 3, 3, 2]);
        e.apply_throw(t(25, 1));
        assert!(e.next_round());
        assert!(!e.next_round());
        assert!(!e.undo());
        assert_eq!(e.round_log().len(), 1);
        assert_eq!(e.status(), GameStatus::Finished);
    }
}
