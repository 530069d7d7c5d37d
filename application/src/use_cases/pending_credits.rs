//! Credits owed for games that finished but could not be paid out yet.

use crate::ports::account_store::AccountStore;
use crate::ports::game_event_logger::GameEventLogger;
use crate::use_cases::shared::{credit, lock};
use ladder_domain::Settlement;
use std::sync::Mutex;
use tracing::{info, warn};

/// Queue of settlements whose balance credit failed after the game was saved.
///
/// Shared by every use case that settles games. The sweeper drains it on each
/// pass; credits are idempotent per game id, so a retry of a credit that did
/// reach the store pays nothing extra.
#[derive(Debug, Default)]
pub struct PendingCredits {
    queue: Mutex<Vec<Settlement>>,
}

impl PendingCredits {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, settlement: Settlement) {
        let mut queue = lock(&self.queue);
        if !queue.iter().any(|s| s.game_id == settlement.game_id) {
            queue.push(settlement);
        }
    }

    pub fn len(&self) -> usize {
        lock(&self.queue).len()
    }

    pub fn is_empty(&self) -> bool {
        lock(&self.queue).is_empty()
    }

    /// Retry every queued credit. Returns how many went through; the rest
    /// stay queued.
    pub async fn retry(&self, accounts: &dyn AccountStore, logger: &dyn GameEventLogger) -> usize {
        let due = std::mem::take(&mut *lock(&self.queue));
        let mut paid = 0;

        for settlement in due {
            match credit(accounts, logger, &settlement).await {
                Ok(()) => paid += 1,
                Err(e) => {
                    warn!(
                        "Retry of credit for game {} failed: {}",
                        settlement.game_id, e
                    );
                    self.push(settlement);
                }
            }
        }

        if paid > 0 {
            info!("Applied {} pending credit(s)", paid);
        }
        paid
    }
}
