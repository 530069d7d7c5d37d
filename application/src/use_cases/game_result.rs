//! Result returned by game operations.

use ladder_domain::{Game, GameSnapshot, GameStatus, Prize, Settlement};

/// Post-operation game state, plus the settlement if the operation ended it.
///
/// Consumed by the presentation layer for rendering. A timed out game is
/// reported here with status [`GameStatus::TimedOut`], never as an error.
#[derive(Debug, Clone)]
pub struct GameResult {
    pub game: Game,
    pub settlement: Option<Settlement>,
}

impl GameResult {
    pub fn new(game: Game, settlement: Option<Settlement>) -> Self {
        Self { game, settlement }
    }

    pub fn status(&self) -> GameStatus {
        self.game.status()
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.game.snapshot()
    }

    /// Amount credited to the player by this operation.
    pub fn credited(&self) -> Prize {
        self.settlement.as_ref().map(|s| s.amount).unwrap_or(0)
    }

    /// Whether this operation moved the game into a terminal state.
    pub fn just_finished(&self) -> bool {
        self.settlement.is_some()
    }
}
