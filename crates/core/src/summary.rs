//! Per-game summary for history/stats consumers.
//!
//! - 01: `score` is the points taken off the start score, `average` is points
//!   per logged round (bust rounds count as 0).
//! - Cricket: `score` is the overflow total, `average` is marks per round.
//!
//! A finishing round that has not been written to the round log yet still
//! counts as played, so the summary taken at the finishing dart matches the
//! one taken after the last `next_round`.

use serde::{Deserialize, Serialize};

use crate::engine::{DartsEngine, GameEngine, Rules};
use crate::types::GameStatus;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSummary {
    /// Game title, e.g. "01 - 501" or "Cricket".
    pub game: String,
    pub score: u32,
    pub average: f64,
    /// Rounds played, including an unlogged finishing round.
    pub rounds: u32,
    pub status: GameStatus,
}

impl GameSummary {
    pub fn from_engine(engine: &GameEngine) -> Self {
        let unlogged_finish = engine.status() == GameStatus::Finished && engine.round_complete();
        let rounds = engine.round_log().len() as u32 + u32::from(unlogged_finish);
        let (score, per_round) = match engine.rules() {
            Rules::ZeroOne(e) => (e.points_scored(), e.points_scored()),
            Rules::Cricket(e) => (e.total_score(), e.marks().total()),
        };

        Self {
            game: engine.config().title(),
            score,
            average: per_round_average(per_round, rounds),
            rounds,
            status: engine.status(),
        }
    }
}

/// Average rounded to one decimal; 0.0 before any round is logged.
fn per_round_average(amount: u32, rounds: u32) -> f64 {
    if rounds == 0 {
        return 0.0;
    }
    (amount as f64 / rounds as f64 * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GameConfig;

    #[test]
    fn zero_one_points_per_round() {
        let mut g = GameEngine::new(GameConfig::zero_one(501).unwrap());
        for (seg, m) in [(20, 3), (20, 3), (20, 3), (20, 1), (0, 1), (5, 1)] {
            g.throw_dart(seg, m);
            if g.round_complete() {
                g.next_round();
            }
        }
        let s = g.summary();
        assert_eq!(s.game, "01 - 501");
        assert_eq!(s.score, 205);
        assert_eq!(s.rounds, 2);
        assert_eq!(s.average, 102.5);
        assert_eq!(s.status, GameStatus::Playing);
    }

    #[test]
    fn cricket_marks_per_round() {
        let mut g = GameEngine::new(GameConfig::cricket());
        for (seg, m) in [(20, 3), (19, 2), (3, 1)] {
            g.throw_dart(seg, m);
        }
        g.next_round();
        let s = g.summary();
        assert_eq!(s.game, "Cricket");
        assert_eq!(s.score, 0);
        assert_eq!(s.average, 5.0);
    }

    #[test]
    fn checkout_round_counts_before_it_is_logged() {
        let mut g = GameEngine::new(GameConfig::zero_one(301).unwrap());
        for _ in 0..3 {
            g.throw_dart(20, 3);
        }
        g.next_round();
        for (seg, m) in [(20, 3), (20, 3), (1, 1)] {
            g.throw_dart(seg, m);
        }
        assert_eq!(g.status(), GameStatus::Finished);

        let at_checkout = g.summary();
        assert_eq!(at_checkout.score, 301);
        assert_eq!(at_checkout.rounds, 2);
        assert_eq!(at_checkout.average, 150.5);

        assert!(g.next_round());
        assert_eq!(g.summary(), at_checkout);
    }

    #[test]
    fn empty_game_has_zero_average() {
        let g = GameEngine::new(GameConfig::cricket());
        assert_eq!(g.summary().average, 0.0);
        assert_eq!(g.summary().rounds, 0);
    }
}
