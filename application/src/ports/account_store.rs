//! Player account port
//!
//! The account collaborator receives prize credits when a game ends.

use async_trait::async_trait;
use ladder_domain::{GameId, PlayerId, Prize};
use thiserror::Error;

/// Errors that can occur during account operations
#[derive(Error, Debug)]
pub enum AccountError {
    #[error("Unknown player: {0}")]
    UnknownPlayer(String),

    #[error("Balance overflow for player {0}")]
    Overflow(String),

    #[error("Account storage error: {0}")]
    Storage(String),
}

/// Player/account store
///
/// Credits are keyed by the game that produced them: applying the same
/// game's credit twice must leave the balance unchanged.
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Credit `amount` to the player for `game_id`.
    ///
    /// Returns `false` if this game's credit was already applied.
    async fn credit_balance(
        &self,
        player_id: &PlayerId,
        amount: Prize,
        game_id: GameId,
    ) -> Result<bool, AccountError>;

    /// Current balance (0 for a player never credited).
    async fn balance(&self, player_id: &PlayerId) -> Result<Prize, AccountError>;
}
