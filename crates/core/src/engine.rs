//! Engine capability trait and the configured game engine.

use crate::config::GameConfig;
use crate::cricket::CricketEngine;
use crate::history::RoundSummary;
use crate::snapshot::EngineSnapshot;
use crate::summary::GameSummary;
use crate::throw::{normalize, Throw};
use crate::turn::Turn;
use crate::types::{GameStatus, GameType};
use crate::zero_one::ZeroOneEngine;

/// Operations shared by every rule engine.
///
/// Mutating operations return `true` when the state changed. Anything invalid
/// in the current state (a fourth dart, undo with nothing to undo, next round
/// before the round is done) is ignored and returns `false`.
pub trait DartsEngine {
    /// Score one normalized dart.
    fn apply_throw(&mut self, throw: Throw) -> bool;

    /// Revert the most recent dart of the current round.
    fn undo(&mut self) -> bool;

    /// Log the completed round and open the next one (or end the game).
    fn next_round(&mut self) -> bool;

    /// Throw away the current round's darts.
    fn retry_round(&mut self) -> bool;

    /// Full-game reset, including the round log.
    fn reset(&mut self);

    /// Whether [`DartsEngine::next_round`] would do anything.
    fn round_complete(&self) -> bool;

    fn status(&self) -> GameStatus;

    fn round_number(&self) -> u32;

    fn max_rounds(&self) -> u32;

    fn turn(&self) -> &Turn;

    /// Completed rounds, newest first.
    fn round_log(&self) -> &[RoundSummary];

    /// Darts that can currently be undone one by one.
    fn undo_depth(&self) -> usize;

    fn snapshot(&self) -> EngineSnapshot;

    /// Normalize and score a raw keypad throw. Invalid input is a no-op.
    fn throw_dart(&mut self, segment: u8, multiplier: u8) -> bool {
        match normalize(segment, multiplier) {
            Some(throw) => self.apply_throw(throw),
            None => false,
        }
    }

    /// Whether another dart would be accepted.
    fn accepts_throws(&self) -> bool {
        self.status() == GameStatus::Playing && !self.turn().is_full()
    }
}

/// Rules engine variant selected by [`GameConfig`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rules {
    ZeroOne(ZeroOneEngine),
    Cricket(CricketEngine),
}

/// The engine for one game session.
///
/// # Examples
///
/// ```
/// use tui_darts_core::{DartsEngine, GameConfig, GameEngine};
/// use tui_darts_core::types::GameStatus;
///
/// let mut game = GameEngine::new(GameConfig::zero_one(301).unwrap());
/// game.throw_dart(20, 3);
/// game.throw_dart(20, 3);
/// game.throw_dart(20, 3);
/// assert!(game.next_round());
///
/// let snap = game.snapshot();
/// assert_eq!(snap.remaining(), Some(121));
/// assert_eq!(snap.round, 2);
/// assert_eq!(game.status(), GameStatus::Playing);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEngine {
    config: GameConfig,
    rules: Rules,
}

impl GameEngine {
    pub fn new(config: GameConfig) -> Self {
        let rules = match config.game_type() {
            GameType::ZeroOne => Rules::ZeroOne(ZeroOneEngine::new(
                config.start_score(),
                config.max_rounds(),
            )),
            GameType::Cricket => Rules::Cricket(CricketEngine::new(config.max_rounds())),
        };
        Self { config, rules }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    fn inner(&self) -> &dyn DartsEngine {
        match &self.rules {
            Rules::ZeroOne(e) => e,
            Rules::Cricket(e) => e,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn DartsEngine {
        match &mut self.rules {
            Rules::ZeroOne(e) => e,
            Rules::Cricket(e) => e,
        }
    }

    /// Summary of the game so far (normally read once the game has ended).
    pub fn summary(&self) -> GameSummary {
        GameSummary::from_engine(self)
    }
}

impl DartsEngine for GameEngine {
    fn apply_throw(&mut self, throw: Throw) -> bool {
        self.inner_mut().apply_throw(throw)
    }

    fn undo(&mut self) -> bool {
        self.inner_mut().undo()
    }

    fn next_round(&mut self) -> bool {
        self.inner_mut().next_round()
    }

    fn retry_round(&mut self) -> bool {
        self.inner_mut().retry_round()
    }

    fn reset(&mut self) {
        self.inner_mut().reset()
    }

    fn round_complete(&self) -> bool {
        self.inner().round_complete()
    }

    fn status(&self) -> GameStatus {
        self.inner().status()
    }

    fn round_number(&self) -> u32 {
        self.inner().round_number()
    }

    fn max_rounds(&self) -> u32 {
        self.inner().max_rounds()
    }

    fn turn(&self) -> &Turn {
        self.inner().turn()
    }

    fn round_log(&self) -> &[RoundSummary] {
        self.inner().round_log()
    }

    fn undo_depth(&self) -> usize {
        self.inner().undo_depth()
    }

    fn snapshot(&self) -> EngineSnapshot {
        self.inner().snapshot()
    }
}
