//! In-memory [`AccountStore`].

use async_trait::async_trait;
use ladder_application::ports::account_store::{AccountError, AccountStore};
use ladder_domain::{GameId, PlayerId, Prize};
use std::collections::{HashMap, HashSet};
use tokio::sync::RwLock;
use tracing::debug;

#[derive(Default)]
struct Ledger {
    balances: HashMap<PlayerId, Prize>,
    applied: HashSet<GameId>,
}

/// Player balances plus the set of games already credited.
///
/// Unknown players start at a zero balance.
#[derive(Default)]
pub struct InMemoryAccountStore {
    ledger: RwLock<Ledger>,
}

impl InMemoryAccountStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AccountStore for InMemoryAccountStore {
    async fn credit_balance(
        &self,
        player_id: &PlayerId,
        amount: Prize,
        game_id: GameId,
    ) -> Result<bool, AccountError> {
        let mut ledger = self.ledger.write().await;

        if ledger.applied.contains(&game_id) {
            return Ok(false);
        }

        let current = ledger.balances.get(player_id).copied().unwrap_or(0);
        let updated = current
            .checked_add(amount)
            .ok_or_else(|| AccountError::Overflow(player_id.to_string()))?;

        ledger.balances.insert(player_id.clone(), updated);
        ledger.applied.insert(game_id);
        debug!(
            "Credited {} to player {} for game {} (balance {})",
            amount, player_id, game_id, updated
        );
        Ok(true)
    }

    async fn balance(&self, player_id: &PlayerId) -> Result<Prize, AccountError> {
        Ok(self
            .ledger
            .read()
            .await
            .balances
            .get(player_id)
            .copied()
            .unwrap_or(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_credit_accumulates() {
        let store = InMemoryAccountStore::new();
        let alice = PlayerId::new("alice");

        assert!(store.credit_balance(&alice, 500, GameId::new(1)).await.unwrap());
        assert!(store.credit_balance(&alice, 1000, GameId::new(2)).await.unwrap());

        assert_eq!(store.balance(&alice).await.unwrap(), 1500);
        assert_eq!(store.balance(&"bob".into()).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_credit_is_idempotent_per_game() {
        let store = InMemoryAccountStore::new();
        let alice = PlayerId::new("alice");

        assert!(store.credit_balance(&alice, 500, GameId::new(1)).await.unwrap());
        assert!(!store.credit_balance(&alice, 500, GameId::new(1)).await.unwrap());

        assert_eq!(store.balance(&alice).await.unwrap(), 500);
    }

    #[tokio::test]
    async fn test_overflow_leaves_balance_untouched() {
        let store = InMemoryAccountStore::new();
        let alice = PlayerId::new("alice");
        store
            .credit_balance(&alice, Prize::MAX, GameId::new(1))
            .await
            .unwrap();

        let err = store
            .credit_balance(&alice, 1, GameId::new(2))
            .await
            .unwrap_err();

        assert!(matches!(err, AccountError::Overflow(_)));
        assert_eq!(store.balance(&alice).await.unwrap(), Prize::MAX);
        // A failed credit is not recorded as applied
        assert!(
            !store
                .ledger
                .read()
                .await
                .applied
                .contains(&GameId::new(2))
        );
    }
}
