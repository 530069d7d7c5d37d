//! In-memory [`GameRepository`].

use async_trait::async_trait;
use ladder_application::ports::game_repository::{GameRepository, RepositoryError};
use ladder_domain::{Game, GameId, PlayerId};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::RwLock;
use tracing::debug;

/// Games keyed by id, guarded by a single lock.
///
/// `save` is a compare-and-swap on [`Game::revision`]: only a state exactly
/// one transition ahead of the stored one (or identical to it) is accepted.
/// Anything else is a [`RepositoryError::Conflict`], so a writer holding an
/// outdated copy can neither roll back progress nor re-finish a game.
#[derive(Default)]
pub struct InMemoryGameRepository {
    games: RwLock<HashMap<GameId, Game>>,
    last_id: AtomicU64,
}

impl InMemoryGameRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl GameRepository for InMemoryGameRepository {
    async fn next_id(&self) -> Result<GameId, RepositoryError> {
        Ok(GameId::new(self.last_id.fetch_add(1, Ordering::SeqCst) + 1))
    }

    async fn create(&self, game: &Game) -> Result<(), RepositoryError> {
        let mut games = self.games.write().await;

        if games.contains_key(&game.id()) {
            return Err(RepositoryError::Conflict(format!(
                "game {} already exists",
                game.id()
            )));
        }
        if let Some(running) = games
            .values()
            .find(|g| g.is_owned_by(game.player_id()) && !g.is_finished())
        {
            return Err(RepositoryError::Conflict(format!(
                "player {} already has game {} in progress",
                game.player_id(),
                running.id()
            )));
        }

        games.insert(game.id(), game.clone());
        debug!("Stored game {} for player {}", game.id(), game.player_id());
        Ok(())
    }

    async fn find(&self, id: GameId) -> Result<Option<Game>, RepositoryError> {
        Ok(self.games.read().await.get(&id).cloned())
    }

    async fn find_in_progress_for(
        &self,
        player_id: &PlayerId,
    ) -> Result<Option<Game>, RepositoryError> {
        Ok(self
            .games
            .read()
            .await
            .values()
            .find(|g| g.is_owned_by(player_id) && !g.is_finished())
            .cloned())
    }

    async fn save(&self, game: &Game) -> Result<(), RepositoryError> {
        let mut games = self.games.write().await;

        let Some(stored) = games.get_mut(&game.id()) else {
            return Err(RepositoryError::NotFound(game.id()));
        };
        if !game.supersedes(stored) {
            return Err(RepositoryError::Conflict(format!(
                "game {} is {} at revision {}, write was based on revision {}",
                game.id(),
                stored.status(),
                stored.revision(),
                game.revision().saturating_sub(1)
            )));
        }

        *stored = game.clone();
        Ok(())
    }

    async fn in_progress(&self) -> Result<Vec<Game>, RepositoryError> {
        let mut games: Vec<Game> = self
            .games
            .read()
            .await
            .values()
            .filter(|g| !g.is_finished())
            .cloned()
            .collect();
        games.sort_by_key(|g| g.id());
        Ok(games)
    }

    async fn count(&self) -> Result<usize, RepositoryError> {
        Ok(self.games.read().await.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::fixtures::game;
    use chrono::Utc;
    use ladder_domain::{GameRules, GameStatus};

    #[tokio::test]
    async fn test_next_id_is_monotonic() {
        let repo = InMemoryGameRepository::new();
        let a = repo.next_id().await.unwrap();
        let b = repo.next_id().await.unwrap();
        assert!(b > a);
    }

    #[tokio::test]
    async fn test_create_and_find() {
        let repo = InMemoryGameRepository::new();
        let g = game(1, "alice", Utc::now());

        repo.create(&g).await.unwrap();

        assert_eq!(repo.find(g.id()).await.unwrap(), Some(g.clone()));
        assert_eq!(
            repo.find_in_progress_for(&"alice".into()).await.unwrap(),
            Some(g)
        );
        assert!(
            repo.find_in_progress_for(&"bob".into())
                .await
                .unwrap()
                .is_none()
        );
        assert!(repo.find(GameId::new(99)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_create_rejects_second_running_game() {
        let repo = InMemoryGameRepository::new();
        repo.create(&game(1, "alice", Utc::now())).await.unwrap();

        let err = repo.create(&game(2, "alice", Utc::now())).await.unwrap_err();

        assert!(matches!(err, RepositoryError::Conflict(_)));
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_create_allowed_after_previous_game_finished() {
        let repo = InMemoryGameRepository::new();
        let rules = GameRules::default();
        let mut first = game(1, "alice", Utc::now());
        repo.create(&first).await.unwrap();
        first
            .answer_current_question("b", &rules, Utc::now())
            .unwrap();
        repo.save(&first).await.unwrap();

        repo.create(&game(2, "alice", Utc::now())).await.unwrap();

        assert_eq!(repo.count().await.unwrap(), 2);
        assert_eq!(repo.in_progress().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_save_unknown_game() {
        let repo = InMemoryGameRepository::new();
        let err = repo.save(&game(5, "alice", Utc::now())).await.unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_stale_save_cannot_overwrite_finished_game() {
        let repo = InMemoryGameRepository::new();
        let rules = GameRules::default();
        let original = game(1, "alice", Utc::now());
        repo.create(&original).await.unwrap();

        // Two writers load the same running game.
        let mut winner = original.clone();
        let mut loser = original.clone();

        winner
            .answer_current_question("a", &rules, Utc::now())
            .unwrap();
        repo.save(&winner).await.unwrap();
        winner.take_money(&rules, Utc::now()).unwrap();
        repo.save(&winner).await.unwrap();

        loser
            .answer_current_question("c", &rules, Utc::now())
            .unwrap();
        let err = repo.save(&loser).await.unwrap_err();

        assert!(matches!(err, RepositoryError::Conflict(_)));
        let stored = repo.find(original.id()).await.unwrap().unwrap();
        assert_eq!(stored.status(), GameStatus::CashedOut);
        // Re-saving the identical finished state is harmless
        repo.save(&stored).await.unwrap();
    }

    #[tokio::test]
    async fn test_outdated_timeout_cannot_roll_back_progress() {
        let repo = InMemoryGameRepository::new();
        let rules = GameRules::default();
        let created = Utc::now();
        repo.create(&game(1, "alice", created)).await.unwrap();

        // A sweeper snapshots the running game before the player acts.
        let mut outdated = repo.in_progress().await.unwrap().remove(0);

        let mut current = repo.find(GameId::new(1)).await.unwrap().unwrap();
        current.answer_current_question("a", &rules, created).unwrap();
        repo.save(&current).await.unwrap();

        let late = created + rules.time_limit * 2;
        assert!(outdated.time_out(&rules, late).is_some());
        let err = repo.save(&outdated).await.unwrap_err();

        assert!(matches!(err, RepositoryError::Conflict(_)));
        let stored = repo.find(GameId::new(1)).await.unwrap().unwrap();
        assert_eq!(stored.status(), GameStatus::InProgress);
        assert_eq!(stored.current_level(), 1);
    }
}
