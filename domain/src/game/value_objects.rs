//! Value objects produced by game transitions.

use super::status::{FinishReason, GameStatus};
use crate::core::ids::{GameId, PlayerId};
use crate::ladder::Prize;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Emitted exactly once, when a game reaches a terminal state.
///
/// Tells the account collaborator how much to credit; an amount of 0 means
/// nothing is to be credited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settlement {
    pub game_id: GameId,
    pub player_id: PlayerId,
    pub reason: FinishReason,
    pub amount: Prize,
}

impl Settlement {
    pub fn needs_credit(&self) -> bool {
        self.amount > 0
    }
}

/// Read-only view of a game after an operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub id: GameId,
    pub player_id: PlayerId,
    pub status: GameStatus,
    pub current_level: usize,
    pub level_count: usize,
    pub prize: Prize,
    pub audience_help_used: bool,
    pub fifty_fifty_used: bool,
    pub created_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
}
