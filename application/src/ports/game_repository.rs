//! Game persistence port

use async_trait::async_trait;
use ladder_domain::{Game, GameId, PlayerId};
use thiserror::Error;

/// Errors that can occur during game persistence
#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("Game not found: {0}")]
    NotFound(GameId),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

/// Repository for games and their questions
///
/// A game and its per-level questions form one unit of consistency: `create`
/// stores both or neither, and `save` replaces the whole aggregate so a
/// terminal transition is never observed half-written.
#[async_trait]
pub trait GameRepository: Send + Sync {
    /// Reserve a fresh game identifier.
    async fn next_id(&self) -> Result<GameId, RepositoryError>;

    /// Atomically store a new game with all its questions.
    ///
    /// Fails with [`RepositoryError::Conflict`] if the id is taken or the
    /// player already owns an in-progress game.
    async fn create(&self, game: &Game) -> Result<(), RepositoryError>;

    async fn find(&self, id: GameId) -> Result<Option<Game>, RepositoryError>;

    /// The player's in-progress game, if any.
    async fn find_in_progress_for(
        &self,
        player_id: &PlayerId,
    ) -> Result<Option<Game>, RepositoryError>;

    /// Replace a stored game with its new state.
    async fn save(&self, game: &Game) -> Result<(), RepositoryError>;

    /// Every game still in progress.
    async fn in_progress(&self) -> Result<Vec<Game>, RepositoryError>;

    /// Number of stored games.
    async fn count(&self) -> Result<usize, RepositoryError>;
}
