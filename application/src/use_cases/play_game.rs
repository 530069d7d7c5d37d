//! Play Game use case.
//!
//! The lifecycle guard around the game state machine. Every request:
//!
//! 1. Loads the game and verifies the acting player owns it
//! 2. Times the game out if its limit has passed, reporting that instead
//! 3. Applies the requested transition
//! 4. Saves the whole aggregate, then settles any terminal transition
//!    (audit log + idempotent balance credit)
//!
//! A save that loses to a concurrent writer which already finished the game
//! reports the stored outcome instead of failing.

use crate::ports::account_store::{AccountError, AccountStore};
use crate::ports::clock::Clock;
use crate::ports::game_event_logger::{GameEvent, GameEventLogger, NoGameEventLogger};
use crate::ports::game_repository::{GameRepository, RepositoryError};
use crate::use_cases::game_result::GameResult;
use crate::use_cases::pending_credits::PendingCredits;
use crate::use_cases::shared::{lock_rng, settle};
use chrono::{DateTime, Utc};
use ladder_domain::{Game, GameError, GameId, GameRules, HelpType, PlayerId, Settlement};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::{Arc, Mutex};
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while playing a game.
#[derive(Error, Debug)]
pub enum PlayGameError {
    #[error("Game not found: {0}")]
    NotFound(GameId),

    /// The acting player does not own the game. Callers map this to an
    /// access-denied response without disclosing the game.
    #[error("Game belongs to another player")]
    NotOwner,

    #[error(transparent)]
    Game(#[from] GameError),

    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),

    #[error("Account error: {0}")]
    Account(#[from] AccountError),
}

impl PlayGameError {
    pub fn is_not_owner(&self) -> bool {
        matches!(self, PlayGameError::NotOwner)
    }

    /// The domain error behind this failure, if any.
    pub fn game_error(&self) -> Option<&GameError> {
        match self {
            PlayGameError::Game(e) => Some(e),
            _ => None,
        }
    }
}

/// Use case for answering, using help, cashing out and timing out a game.
pub struct PlayGameUseCase {
    games: Arc<dyn GameRepository>,
    accounts: Arc<dyn AccountStore>,
    clock: Arc<dyn Clock>,
    rules: GameRules,
    rng: Mutex<StdRng>,
    event_logger: Arc<dyn GameEventLogger>,
    pending_credits: Arc<PendingCredits>,
}

impl PlayGameUseCase {
    pub fn new(
        games: Arc<dyn GameRepository>,
        accounts: Arc<dyn AccountStore>,
        clock: Arc<dyn Clock>,
        rules: GameRules,
    ) -> Self {
        Self {
            games,
            accounts,
            clock,
            rules,
            rng: Mutex::new(StdRng::from_entropy()),
            event_logger: Arc::new(NoGameEventLogger),
            pending_credits: Arc::new(PendingCredits::new()),
        }
    }

    /// Use a seeded RNG so help outcomes are reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = Mutex::new(StdRng::seed_from_u64(seed));
        self
    }

    /// Create with a game event logger.
    pub fn with_event_logger(mut self, logger: Arc<dyn GameEventLogger>) -> Self {
        self.event_logger = logger;
        self
    }

    /// Queue failed credits where the sweeper can retry them.
    pub fn with_pending_credits(mut self, pending: Arc<PendingCredits>) -> Self {
        self.pending_credits = pending;
        self
    }

    pub fn rules(&self) -> &GameRules {
        &self.rules
    }

    /// Answer the current question with `letter`.
    pub async fn answer(
        &self,
        game_id: GameId,
        player_id: &PlayerId,
        letter: &str,
    ) -> Result<GameResult, PlayGameError> {
        let now = self.clock.now();
        let mut game = self.load_owned(game_id, player_id).await?;
        if let Some(result) = self.expire(&mut game, now).await? {
            return Ok(result);
        }

        let level = game.current_level();
        let settlement = game.answer_current_question(letter, &self.rules, now)?;
        debug!(
            "Game {}: answered '{}' at level {} -> level {}, {}",
            game_id,
            letter,
            level,
            game.current_level(),
            game.status()
        );

        self.commit(game, settlement).await
    }

    /// Apply an aid to the current question.
    pub async fn use_help(
        &self,
        game_id: GameId,
        player_id: &PlayerId,
        help_type: HelpType,
    ) -> Result<GameResult, PlayGameError> {
        let now = self.clock.now();
        let mut game = self.load_owned(game_id, player_id).await?;
        if let Some(result) = self.expire(&mut game, now).await? {
            return Ok(result);
        }

        {
            let mut rng = lock_rng(&self.rng);
            game.use_help(help_type, &mut *rng)?;
        }
        if let Some(stored) = self.save(&game).await? {
            return Ok(GameResult::new(stored, None));
        }

        info!(
            "Game {}: {} used at level {}",
            game_id,
            help_type,
            game.current_level()
        );
        self.event_logger.log(GameEvent::new(
            "help_used",
            serde_json::json!({
                "game_id": game_id,
                "player_id": player_id,
                "help_type": help_type,
                "level": game.current_level(),
                "payload": game.current_game_question().map(|gq| gq.help_hash()),
            }),
        ));

        Ok(GameResult::new(game, None))
    }

    /// Cash out at the current level.
    pub async fn take_money(
        &self,
        game_id: GameId,
        player_id: &PlayerId,
    ) -> Result<GameResult, PlayGameError> {
        let now = self.clock.now();
        let mut game = self.load_owned(game_id, player_id).await?;
        if let Some(result) = self.expire(&mut game, now).await? {
            return Ok(result);
        }

        let settlement = game.take_money(&self.rules, now)?;
        self.commit(game, Some(settlement)).await
    }

    /// Explicit expiry check. Idempotent: a finished or still-running game
    /// is returned unchanged.
    pub async fn time_out(
        &self,
        game_id: GameId,
        player_id: &PlayerId,
    ) -> Result<GameResult, PlayGameError> {
        let now = self.clock.now();
        let mut game = self.load_owned(game_id, player_id).await?;
        match self.expire(&mut game, now).await? {
            Some(result) => Ok(result),
            None => Ok(GameResult::new(game, None)),
        }
    }

    /// Read a game. An expired game is timed out before it is returned.
    pub async fn show(
        &self,
        game_id: GameId,
        player_id: &PlayerId,
    ) -> Result<GameResult, PlayGameError> {
        self.time_out(game_id, player_id).await
    }

    async fn load_owned(
        &self,
        game_id: GameId,
        player_id: &PlayerId,
    ) -> Result<Game, PlayGameError> {
        let game = self
            .games
            .find(game_id)
            .await?
            .ok_or(PlayGameError::NotFound(game_id))?;
        if !game.is_owned_by(player_id) {
            return Err(PlayGameError::NotOwner);
        }
        Ok(game)
    }

    /// Time the game out if needed, returning the committed result when it did.
    async fn expire(
        &self,
        game: &mut Game,
        now: DateTime<Utc>,
    ) -> Result<Option<GameResult>, PlayGameError> {
        let Some(settlement) = game.time_out(&self.rules, now) else {
            return Ok(None);
        };
        info!("Game {} exceeded its time limit", game.id());
        let result = self.commit(game.clone(), Some(settlement)).await?;
        Ok(Some(result))
    }

    async fn commit(
        &self,
        game: Game,
        settlement: Option<Settlement>,
    ) -> Result<GameResult, PlayGameError> {
        if let Some(stored) = self.save(&game).await? {
            return Ok(GameResult::new(stored, None));
        }
        if let Some(settlement) = &settlement {
            settle(
                self.accounts.as_ref(),
                self.event_logger.as_ref(),
                &self.pending_credits,
                settlement,
            )
            .await?;
        }
        Ok(GameResult::new(game, settlement))
    }

    /// Save `game`. If a concurrent writer already finished it, return the
    /// stored game instead; that writer owns the settlement.
    async fn save(&self, game: &Game) -> Result<Option<Game>, PlayGameError> {
        let reason = match self.games.save(game).await {
            Ok(()) => return Ok(None),
            Err(RepositoryError::Conflict(reason)) => reason,
            Err(e) => return Err(e.into()),
        };
        let stored = self
            .games
            .find(game.id())
            .await?
            .ok_or(PlayGameError::NotFound(game.id()))?;
        if !stored.is_finished() {
            return Err(RepositoryError::Conflict(reason).into());
        }
        debug!(
            "Game {} was finished concurrently ({}); reporting stored state",
            game.id(),
            stored.status()
        );
        Ok(Some(stored))
    }
}
