//! Shared helpers for use cases.
//!
//! Settlement of a terminal transition (credit + audit log) and RNG access,
//! used by StartGame, PlayGame and SweepExpiredGames.

use crate::ports::account_store::{AccountError, AccountStore};
use crate::ports::game_event_logger::{GameEvent, GameEventLogger};
use crate::use_cases::pending_credits::PendingCredits;
use ladder_domain::Settlement;
use rand::rngs::StdRng;
use std::sync::{Mutex, MutexGuard};
use tracing::{error, info, warn};

/// Record a finished game and credit its prize.
///
/// Must run after the terminal state has been saved. The credit is keyed by
/// game id, so a retried settlement never pays twice. A failed credit is
/// queued on `pending` for the sweeper to retry before the error is returned.
pub(crate) async fn settle(
    accounts: &dyn AccountStore,
    logger: &dyn GameEventLogger,
    pending: &PendingCredits,
    settlement: &Settlement,
) -> Result<(), AccountError> {
    info!(
        "Game {} finished ({}), prize {}",
        settlement.game_id, settlement.reason, settlement.amount
    );
    logger.log(GameEvent::new(
        "game_finished",
        serde_json::json!({
            "game_id": settlement.game_id,
            "player_id": settlement.player_id,
            "reason": settlement.reason,
            "prize": settlement.amount,
        }),
    ));

    if !settlement.needs_credit() {
        return Ok(());
    }

    if let Err(e) = credit(accounts, logger, settlement).await {
        error!(
            "Credit of {} for game {} failed, queued for retry: {}",
            settlement.amount, settlement.game_id, e
        );
        logger.log(GameEvent::new(
            "credit_failed",
            serde_json::json!({
                "game_id": settlement.game_id,
                "player_id": settlement.player_id,
                "amount": settlement.amount,
                "error": e.to_string(),
            }),
        ));
        pending.push(settlement.clone());
        return Err(e);
    }
    Ok(())
}

/// Apply one settlement's credit and log it.
pub(crate) async fn credit(
    accounts: &dyn AccountStore,
    logger: &dyn GameEventLogger,
    settlement: &Settlement,
) -> Result<(), AccountError> {
    let applied = accounts
        .credit_balance(&settlement.player_id, settlement.amount, settlement.game_id)
        .await?;

    if applied {
        logger.log(GameEvent::new(
            "balance_credited",
            serde_json::json!({
                "game_id": settlement.game_id,
                "player_id": settlement.player_id,
                "amount": settlement.amount,
            }),
        ));
    } else {
        warn!(
            "Credit for game {} was already applied; skipping",
            settlement.game_id
        );
    }
    Ok(())
}

/// Lock a std mutex, recovering it if a previous holder panicked.
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Lock the shared RNG.
pub(crate) fn lock_rng(rng: &Mutex<StdRng>) -> MutexGuard<'_, StdRng> {
    lock(rng)
}
