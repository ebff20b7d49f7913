//! Read-only engine state for the view and the event log.

use serde::{Deserialize, Serialize};

use crate::cricket::Marks;
use crate::turn::Turn;
use crate::types::{GameStatus, GameType};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum BoardSnapshot {
    #[serde(rename = "01")]
    ZeroOne {
        start_score: u32,
        remaining: u32,
        start_of_round: u32,
    },
    Cricket {
        marks: Marks,
        total_score: u32,
    },
}

/// Read-only view of an engine after an event, for presentation and logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub game_type: GameType,
    pub status: GameStatus,
    pub round: u32,
    pub max_rounds: u32,
    pub turn: Turn,
    pub round_points: u32,
    pub board: BoardSnapshot,
}

impl EngineSnapshot {
    pub fn playable(&self) -> bool {
        self.status == GameStatus::Playing && !self.turn.is_full()
    }

    pub fn remaining(&self) -> Option<u32> {
        match self.board {
            BoardSnapshot::ZeroOne { remaining, .. } => Some(remaining),
            BoardSnapshot::Cricket { .. } => None,
        }
    }

    pub fn marks(&self) -> Option<&Marks> {
        match &self.board {
            BoardSnapshot::Cricket { marks, .. } => Some(marks),
            BoardSnapshot::ZeroOne { .. } => None,
        }
    }

    /// Remaining score (01) or overflow total (Cricket).
    pub fn headline_score(&self) -> u32 {
        match self.board {
            BoardSnapshot::ZeroOne { remaining, .. } => remaining,
            BoardSnapshot::Cricket { total_score, .. } => total_score,
        }
    }
}
