//! Start Game use case.
//!
//! Enforces one in-progress game per player, then builds a new game from the
//! question bank:
//!
//! 1. Look up the player's in-progress game; time it out if it has expired
//!    (a concurrent writer that finished it first wins)
//! 2. If one is still running, hand it back instead of creating another
//! 3. Gather candidates per level and select one question per level at random
//! 4. Persist the game and all its questions in one atomic write

use crate::ports::account_store::{AccountError, AccountStore};
use crate::ports::clock::Clock;
use crate::ports::game_event_logger::{GameEvent, GameEventLogger, NoGameEventLogger};
use crate::ports::game_repository::{GameRepository, RepositoryError};
use crate::ports::question_bank::{QuestionBank, QuestionBankError};
use crate::use_cases::pending_credits::PendingCredits;
use crate::use_cases::shared::{lock_rng, settle};
use ladder_domain::{Game, GameError, GameRules, PlayerId, QuestionPool, select_questions};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::{Arc, Mutex};
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while starting a game.
#[derive(Error, Debug)]
pub enum StartGameError {
    #[error(transparent)]
    Game(#[from] GameError),

    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),

    #[error("Question bank error: {0}")]
    QuestionBank(#[from] QuestionBankError),

    #[error("Account error: {0}")]
    Account(#[from] AccountError),
}

/// Outcome of a start request.
///
/// An existing in-progress game is not an error: the caller should redirect
/// the player to it.
#[derive(Debug, Clone)]
pub enum StartGameOutcome {
    Started(Game),
    AlreadyInProgress(Game),
}

impl StartGameOutcome {
    pub fn game(&self) -> &Game {
        match self {
            StartGameOutcome::Started(game) | StartGameOutcome::AlreadyInProgress(game) => game,
        }
    }

    pub fn into_game(self) -> Game {
        match self {
            StartGameOutcome::Started(game) | StartGameOutcome::AlreadyInProgress(game) => game,
        }
    }

    pub fn is_new(&self) -> bool {
        matches!(self, StartGameOutcome::Started(_))
    }
}

/// Use case for starting a new game.
pub struct StartGameUseCase {
    games: Arc<dyn GameRepository>,
    questions: Arc<dyn QuestionBank>,
    accounts: Arc<dyn AccountStore>,
    clock: Arc<dyn Clock>,
    rules: GameRules,
    rng: Mutex<StdRng>,
    event_logger: Arc<dyn GameEventLogger>,
    pending_credits: Arc<PendingCredits>,
}

impl StartGameUseCase {
    pub fn new(
        games: Arc<dyn GameRepository>,
        questions: Arc<dyn QuestionBank>,
        accounts: Arc<dyn AccountStore>,
        clock: Arc<dyn Clock>,
        rules: GameRules,
    ) -> Self {
        Self {
            games,
            questions,
            accounts,
            clock,
            rules,
            rng: Mutex::new(StdRng::from_entropy()),
            event_logger: Arc::new(NoGameEventLogger),
            pending_credits: Arc::new(PendingCredits::new()),
        }
    }

    /// Use a seeded RNG so question selection is reproducible.
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

    /// Start a game for `player_id`, or return the one already running.
    pub async fn execute(&self, player_id: &PlayerId) -> Result<StartGameOutcome, StartGameError> {
        let now = self.clock.now();

        if let Some(mut existing) = self.games.find_in_progress_for(player_id).await? {
            match existing.time_out(&self.rules, now) {
                Some(settlement) => {
                    debug!("Expired game {} timed out before new start", existing.id());
                    match self.games.save(&existing).await {
                        Ok(()) => {
                            settle(
                                self.accounts.as_ref(),
                                self.event_logger.as_ref(),
                                &self.pending_credits,
                                &settlement,
                            )
                            .await?
                        }
                        Err(RepositoryError::Conflict(reason)) => {
                            debug!(
                                "Game {} changed before it could be timed out: {}",
                                existing.id(),
                                reason
                            );
                            if let Some(current) = self.games.find(existing.id()).await?
                                && !current.is_finished()
                            {
                                return Ok(StartGameOutcome::AlreadyInProgress(current));
                            }
                        }
                        Err(e) => return Err(e.into()),
                    }
                }
                None => {
                    info!(
                        "Player {} already has game {} in progress",
                        player_id,
                        existing.id()
                    );
                    return Ok(StartGameOutcome::AlreadyInProgress(existing));
                }
            }
        }

        let level_count = self.rules.level_count();
        let mut pool = QuestionPool::new();
        for level in 0..level_count {
            for question in self.questions.questions_at_level(level).await? {
                pool.add(question);
            }
        }

        let selected = {
            let mut rng = lock_rng(&self.rng);
            select_questions(&pool, level_count, &mut *rng)?
        };

        let id = self.games.next_id().await?;
        let game = Game::new(id, player_id.clone(), selected, now)?;
        self.games.create(&game).await?;

        info!(
            "Started game {} for player {} ({} levels)",
            game.id(),
            player_id,
            level_count
        );
        self.event_logger.log(GameEvent::new(
            "game_started",
            serde_json::json!({
                "game_id": game.id(),
                "player_id": player_id,
                "levels": level_count,
                "questions": game
                    .game_questions()
                    .iter()
                    .map(|gq| gq.question().id())
                    .collect::<Vec<_>>(),
            }),
        ));

        Ok(StartGameOutcome::Started(game))
    }
}
