//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! They are plain data (plus serde derives for the event log), usable from the
//! rules engine, the terminal view and the input layer alike.
//!
//! # Round Structure
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DARTS_PER_ROUND` | 3 | Throw slots in one round (a "visit") |
//! | `DEFAULT_MAX_ROUNDS` | 15 | Round limit when none is configured |
//! | `BULL` | 25 | Segment number of the bull |
//! | `MARK_DISPLAY_CAP` | 99 | Upper bound stored for Cricket marks |
//!
//! # Examples
//!
//! ```
//! use tui_darts_types::{GameType, Multiplier, PadAction, START_SCORES};
//!
//! assert_eq!(GameType::from_str("cricket"), Some(GameType::Cricket));
//! assert_eq!(Multiplier::from_u8(2), Some(Multiplier::Double));
//! assert_eq!(Multiplier::Triple.factor(), 3);
//! assert!(START_SCORES.contains(&501));
//!
//! let action = PadAction::from_str("undo").unwrap();
//! assert_eq!(action, PadAction::Undo);
//! ```

use serde::{Deserialize, Serialize};

/// Number of darts thrown per round.
pub const DARTS_PER_ROUND: usize = 3;

/// Round limit used when the configuration does not name one.
pub const DEFAULT_MAX_ROUNDS: u32 = 15;

/// Segment number of the bull (single bull = 25, double bull = 50).
pub const BULL: u8 = 25;

/// Raw keypad value some inputs send for a double bull.
pub const DOUBLE_BULL_ALIAS: u8 = 50;

/// Highest numbered segment on the board.
pub const MAX_SEGMENT: u8 = 20;

/// Marks needed to close a Cricket number.
pub const MARKS_TO_CLOSE: u8 = 3;

/// Stored marks are clamped here; scoring is computed before the clamp.
pub const MARK_DISPLAY_CAP: u8 = 99;

/// Selectable 01 start scores.
pub const START_SCORES: [u32; 6] = [301, 501, 701, 901, 1101, 1501];

/// Default 01 start score.
pub const DEFAULT_START_SCORE: u32 = 501;

/// Cricket targets in board display order (bull last).
pub const CRICKET_TARGETS: [u8; 7] = [20, 19, 18, 17, 16, 15, BULL];


/// Hit multiplier of a single dart.
///
/// Bull only has `Single` (25) and `Double` (50); a triple bull is coerced to
/// single by the validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Multiplier {
    #[default]
    Single,
    Double,
    Triple,
}

impl Multiplier {
    /// Parse from the raw factor (1, 2 or 3).
    pub fn from_u8(factor: u8) -> Option<Self> {
        match factor {
            1 => Some(Multiplier::Single),
            2 => Some(Multiplier::Double),
            3 => Some(Multiplier::Triple),
            _ => None,
        }
    }

    /// Numeric factor applied to the segment value.
    pub fn factor(&self) -> u8 {
        match self {
            Multiplier::Single => 1,
            Multiplier::Double => 2,
            Multiplier::Triple => 3,
        }
    }

    /// Label prefix (`S`, `D`, `T`).
    pub fn prefix(&self) -> char {
        match self {
            Multiplier::Single => 'S',
            Multiplier::Double => 'D',
            Multiplier::Triple => 'T',
        }
    }
}

/// Supported game modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameType {
    /// Count down from a start score to exactly zero.
    #[serde(rename = "01")]
    ZeroOne,
    /// Close 20 through 15 and the bull, scoring overflow marks.
    #[serde(rename = "cricket")]
    Cricket,
}

impl GameType {
    /// Parse game type (case-insensitive). Accepts `01`, `zeroone`, `x01`
    /// and `cricket`.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "01" | "zeroone" | "x01" => Some(GameType::ZeroOne),
            "cricket" => Some(GameType::Cricket),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameType::ZeroOne => "01",
            GameType::Cricket => "cricket",
        }
    }
}

/// Lifecycle status shared by both engines.
///
/// `Bust` only ever occurs in 01.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    #[default]
    Playing,
    Bust,
    Finished,
    #[serde(rename = "gameover")]
    GameOver,
}

impl GameStatus {
    /// `Finished` and `GameOver` end the game.
    pub fn is_terminal(&self) -> bool {
        matches!(self, GameStatus::Finished | GameStatus::GameOver)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::Playing => "playing",
            GameStatus::Bust => "bust",
            GameStatus::Finished => "finished",
            GameStatus::GameOver => "gameover",
        }
    }
}

/// Discrete commands the input layer delivers to a session.
///
/// Throws carry the raw segment/multiplier pair; normalization happens in the
/// core validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum PadAction {
    /// One dart at `segment` (0 = miss, 25 = bull) with raw `multiplier` 1..=3
    Throw { segment: u8, multiplier: u8 },
    /// Revert the last dart
    Undo,
    /// Commit the current round and open the next one
    NextRound,
    /// Discard the current round's darts
    RetryRound,
    /// Start the whole game over
    Restart,
}

impl PadAction {
    /// Parse a non-throw action from its name (case-insensitive).
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "undo" => Some(PadAction::Undo),
            "nextround" => Some(PadAction::NextRound),
            "retryround" => Some(PadAction::RetryRound),
            "restart" => Some(PadAction::Restart),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PadAction::Throw { .. } => "throw",
            PadAction::Undo => "undo",
            PadAction::NextRound => "nextRound",
            PadAction::RetryRound => "retryRound",
            PadAction::Restart => "restart",
        }
    }
}
