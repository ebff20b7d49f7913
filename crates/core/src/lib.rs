//! Core scoring engine - pure, deterministic, and testable
//!
//! This crate contains the darts rules, round bookkeeping and undo history.
//! It has **no dependencies** on terminal, input handling or I/O:
//!
//! - **Deterministic**: the same sequence of inputs always yields the same state
//! - **Tolerant**: invalid operations are silent no-ops, never errors
//! - **Reversible**: every dart of the current round can be undone
//!
//! # Module Structure
//!
//! - [`throw`]: raw keypad input to canonical dart (value + label)
//! - [`turn`]: the three dart slots of a round
//! - [`history`]: undo snapshots and the completed-round log
//! - [`zero_one`]: 01 rules (bust, checkout)
//! - [`cricket`]: Cricket rules (marks, overflow scoring, all-closed)
//! - [`engine`]: the shared [`DartsEngine`] trait and the configured [`GameEngine`]
//! - [`config`]: validated session configuration
//! - [`snapshot`]: read-only state for renderers and logs
//! - [`summary`]: per-game score and average
//!
//! # Example
//!
//! ```
//! use tui_darts_core::{DartsEngine, GameConfig, GameEngine};
//! use tui_darts_core::types::GameStatus;
//!
//! let mut game = GameEngine::new(GameConfig::cricket());
//!
//! game.throw_dart(20, 2); // 2 marks
//! game.throw_dart(20, 1); // closed
//! game.throw_dart(20, 3); // 3 overflow marks
//!
//! let snap = game.snapshot();
//! assert_eq!(snap.headline_score(), 60);
//! assert_eq!(snap.marks().unwrap().get(20), Some(6));
//!
//! // A fourth dart is ignored.
//! assert!(!game.throw_dart(19, 1));
//! assert!(game.next_round());
//! assert_eq!(game.status(), GameStatus::Playing);
//! ```

pub mod config;
pub mod cricket;
pub mod engine;
pub mod history;
pub mod snapshot;
pub mod summary;
pub mod throw;
pub mod turn;
pub mod zero_one;

pub use tui_darts_types as types;

// Re-export commonly used types for convenience
pub use config::{ConfigError, GameConfig};
pub use cricket::{CricketEngine, Marks};
pub use engine::{DartsEngine, GameEngine, Rules};
pub use history::{RoundSummary, TurnHistory};
pub use snapshot::{BoardSnapshot, EngineSnapshot};
pub use summary::GameSummary;
pub use throw::{normalize, Label, Throw};
pub use turn::{DartRecord, Slot, Turn};
pub use zero_one::ZeroOneEngine;
