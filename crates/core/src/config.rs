//! Session configuration.

use serde::Serialize;
use thiserror::Error;

use crate::types::{GameType, DEFAULT_MAX_ROUNDS, DEFAULT_START_SCORE, START_SCORES};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unsupported 01 start score {0} (expected one of 301, 501, 701, 901, 1101, 1501)")]
    UnsupportedStartScore(u32),
    #[error("max rounds must be at least 1")]
    ZeroRounds,
    #[error("unknown game type: {0}")]
    UnknownGameType(String),
}

/// Validated game configuration.
///
/// `start_score` is only meaningful for 01; Cricket ignores it.
///
/// Only built through [`GameConfig::new`] and friends, so it serializes but
/// does not deserialize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameConfig {
    game_type: GameType,
    start_score: u32,
    max_rounds: u32,
}

impl GameConfig {
    pub fn new(game_type: GameType, start_score: u32, max_rounds: u32) -> Result<Self, ConfigError> {
        if max_rounds == 0 {
            return Err(ConfigError::ZeroRounds);
        }
        if game_type == GameType::ZeroOne && !START_SCORES.contains(&start_score) {
            return Err(ConfigError::UnsupportedStartScore(start_score));
        }
        Ok(Self {
            game_type,
            start_score,
            max_rounds,
        })
    }

    /// Parse the game type by name, then validate as [`GameConfig::new`].
    pub fn parse(game: &str, start_score: u32, max_rounds: u32) -> Result<Self, ConfigError> {
        let game_type =
            GameType::from_str(game).ok_or_else(|| ConfigError::UnknownGameType(game.to_string()))?;
        Self::new(game_type, start_score, max_rounds)
    }

    /// 01 game with the default round limit.
    pub fn zero_one(start_score: u32) -> Result<Self, ConfigError> {
        Self::new(GameType::ZeroOne, start_score, DEFAULT_MAX_ROUNDS)
    }

    /// Cricket with the default round limit.
    pub fn cricket() -> Self {
        Self {
            game_type: GameType::Cricket,
            start_score: 0,
            max_rounds: DEFAULT_MAX_ROUNDS,
        }
    }

    pub fn with_max_rounds(self, max_rounds: u32) -> Result<Self, ConfigError> {
        Self::new(self.game_type, self.start_score, max_rounds)
    }

    pub fn game_type(&self) -> GameType {
        self.game_type
    }

    pub fn start_score(&self) -> u32 {
        self.start_score
    }

    pub fn max_rounds(&self) -> u32 {
        self.max_rounds
    }

    /// Title used in summaries and the view header ("01 - 501", "Cricket").
    pub fn title(&self) -> String {
        match self.game_type {
            GameType::ZeroOne => format!("01 - {}", self.start_score),
            GameType::Cricket => "Cricket".to_string(),
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            game_type: GameType::ZeroOne,
            start_score: DEFAULT_START_SCORE,
            max_rounds: DEFAULT_MAX_ROUNDS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let c = GameConfig::default();
        assert_eq!(c.game_type(), GameType::ZeroOne);
        assert_eq!(c.start_score(), 501);
        assert_eq!(c.max_rounds(), 15);
        assert_eq!(c.title(), "01 - 501");
    }

    #[test]
    fn rejects_unsupported_start_score() {
        assert_eq!(
            GameConfig::zero_one(500),
            Err(ConfigError::UnsupportedStartScore(500))
        );
        for s in START_SCORES {
            assert!(GameConfig::zero_one(s).is_ok());
        }
    }

    #[test]
    fn cricket_ignores_start_score() {
        let c = GameConfig::new(GameType::Cricket, 12345, 10).unwrap();
        assert_eq!(c.max_rounds(), 10);
        assert_eq!(c.title(), "Cricket");
    }

    #[test]
    fn rejects_zero_rounds() {
        assert_eq!(
            GameConfig::cricket().with_max_rounds(0),
            Err(ConfigError::ZeroRounds)
        );
    }

    #[test]
    fn parse_by_name() {
        assert_eq!(
            GameConfig::parse("Cricket", 0, 15).unwrap().game_type(),
            GameType::Cricket
        );
        assert!(matches!(
            GameConfig::parse("countup", 501, 15),
            Err(ConfigError::UnknownGameType(_))
        ));
    }

    #[test]
    fn serializes_validated_fields() {
        let c = GameConfig::zero_one(701).unwrap().with_max_rounds(10).unwrap();
        let json = serde_json::to_value(c).unwrap();
        assert_eq!(json["game_type"], "01");
        assert_eq!(json["start_score"], 701);
        assert_eq!(json["max_rounds"], 10);
    }
}
