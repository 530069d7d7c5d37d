//! Sweep Expired Games use case.
//!
//! Periodic complement to the lazy expiry check: times out every in-progress
//! game past its limit and retries credits that failed earlier. Safe to run
//! any number of times.

use crate::ports::account_store::{AccountError, AccountStore};
use crate::ports::clock::Clock;
use crate::ports::game_event_logger::{GameEventLogger, NoGameEventLogger};
use crate::ports::game_repository::{GameRepository, RepositoryError};
use crate::use_cases::pending_credits::PendingCredits;
use crate::use_cases::shared::settle;
use ladder_domain::GameRules;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug)]
pub enum SweepError {
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),

    #[error("Account error: {0}")]
    Account(#[from] AccountError),
}

pub struct SweepExpiredGamesUseCase {
    games: Arc<dyn GameRepository>,
    accounts: Arc<dyn AccountStore>,
    clock: Arc<dyn Clock>,
    rules: GameRules,
    event_logger: Arc<dyn GameEventLogger>,
    pending_credits: Arc<PendingCredits>,
}

impl SweepExpiredGamesUseCase {
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
            event_logger: Arc::new(NoGameEventLogger),
            pending_credits: Arc::new(PendingCredits::new()),
        }
    }

    pub fn with_event_logger(mut self, logger: Arc<dyn GameEventLogger>) -> Self {
        self.event_logger = logger;
        self
    }

    /// Retry credits queued by the other use cases.
    pub fn with_pending_credits(mut self, pending: Arc<PendingCredits>) -> Self {
        self.pending_credits = pending;
        self
    }

    /// Time out every expired in-progress game. Returns how many were timed out.
    pub async fn execute(&self) -> Result<usize, SweepError> {
        self.pending_credits
            .retry(self.accounts.as_ref(), self.event_logger.as_ref())
            .await;

        let now = self.clock.now();
        let mut timed_out = 0;

        for mut game in self.games.in_progress().await? {
            let Some(settlement) = game.time_out(&self.rules, now) else {
                continue;
            };
            debug!("Sweep: timing out game {}", game.id());
            match self.games.save(&game).await {
                Ok(()) => {}
                // Finished by a concurrent operation, which also settled it.
                Err(RepositoryError::Conflict(reason)) => {
                    debug!("Sweep: skipping game {}: {}", game.id(), reason);
                    continue;
                }
                Err(e) => return Err(e.into()),
            }
            settle(
                self.accounts.as_ref(),
                self.event_logger.as_ref(),
                &self.pending_credits,
                &settlement,
            )
            .await?;
            timed_out += 1;
        }

        if timed_out > 0 {
            info!("Sweep timed out {} expired game(s)", timed_out);
        }
        Ok(timed_out)
    }
}
