//! Test doubles shared by the use case tests.

use crate::ports::account_store::{AccountError, AccountStore};
use crate::ports::clock::Clock;
use crate::ports::game_event_logger::{GameEvent, GameEventLogger};
use crate::ports::game_repository::{GameRepository, RepositoryError};
use crate::ports::question_bank::{QuestionBank, QuestionBankError};
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use ladder_domain::{AnswerKey, Game, GameId, PlayerId, Prize, Question, QuestionId};
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

// ==================== Clock ====================

pub(crate) struct FixedClock {
    now: Mutex<DateTime<Utc>>,
}

impl FixedClock {
    pub(crate) fn new(now: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    pub(crate) fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap();
        *now += by;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}

// ==================== Repository ====================

#[derive(Default)]
pub(crate) struct MockGameRepository {
    games: Mutex<HashMap<GameId, Game>>,
    next_id: AtomicU64,
    pub(crate) fail_create: bool,
    outdated_read: Mutex<Option<Game>>,
}

impl MockGameRepository {
    pub(crate) fn failing_create() -> Self {
        Self {
            fail_create: true,
            ..Default::default()
        }
    }

    pub(crate) fn get(&self, id: GameId) -> Option<Game> {
        self.games.lock().unwrap().get(&id).cloned()
    }

    pub(crate) fn insert(&self, game: Game) {
        self.games.lock().unwrap().insert(game.id(), game);
    }

    /// Hand `game` to the next read (`find`, `find_in_progress_for` or
    /// `in_progress`) instead of the stored state, as if it had been read just
    /// before another writer's save.
    pub(crate) fn read_outdated_once(&self, game: Game) {
        *self.outdated_read.lock().unwrap() = Some(game);
    }

    fn take_outdated(&self) -> Option<Game> {
        self.outdated_read.lock().unwrap().take()
    }
}

#[async_trait]
impl GameRepository for MockGameRepository {
    async fn next_id(&self) -> Result<GameId, RepositoryError> {
        Ok(GameId::new(self.next_id.fetch_add(1, Ordering::SeqCst) + 1))
    }

    async fn create(&self, game: &Game) -> Result<(), RepositoryError> {
        if self.fail_create {
            return Err(RepositoryError::Storage("disk full".to_string()));
        }
        self.games.lock().unwrap().insert(game.id(), game.clone());
        Ok(())
    }

    async fn find(&self, id: GameId) -> Result<Option<Game>, RepositoryError> {
        if let Some(game) = self.take_outdated() {
            return Ok(Some(game));
        }
        Ok(self.get(id))
    }

    async fn find_in_progress_for(
        &self,
        player_id: &PlayerId,
    ) -> Result<Option<Game>, RepositoryError> {
        if let Some(game) = self.take_outdated() {
            return Ok(Some(game));
        }
        Ok(self
            .games
            .lock()
            .unwrap()
            .values()
            .find(|g| g.is_owned_by(player_id) && !g.is_finished())
            .cloned())
    }

    async fn save(&self, game: &Game) -> Result<(), RepositoryError> {
        let mut games = self.games.lock().unwrap();
        let Some(stored) = games.get_mut(&game.id()) else {
            return Err(RepositoryError::NotFound(game.id()));
        };
        if !game.supersedes(stored) {
            return Err(RepositoryError::Conflict(format!(
                "game {} moved on to revision {}",
                game.id(),
                stored.revision()
            )));
        }
        *stored = game.clone();
        Ok(())
    }

    async fn in_progress(&self) -> Result<Vec<Game>, RepositoryError> {
        if let Some(game) = self.take_outdated() {
            return Ok(vec![game]);
        }
        Ok(self
            .games
            .lock()
            .unwrap()
            .values()
            .filter(|g| !g.is_finished())
            .cloned()
            .collect())
    }

    async fn count(&self) -> Result<usize, RepositoryError> {
        Ok(self.games.lock().unwrap().len())
    }
}

// ==================== Accounts ====================

#[derive(Default)]
pub(crate) struct MockAccounts {
    balances: Mutex<HashMap<PlayerId, Prize>>,
    applied: Mutex<HashSet<GameId>>,
    failing: AtomicBool,
}

impl MockAccounts {
    /// Make every credit fail with a storage error until switched back.
    pub(crate) fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub(crate) fn balance_of(&self, player: &str) -> Prize {
        self.balances
            .lock()
            .unwrap()
            .get(&PlayerId::new(player))
            .copied()
            .unwrap_or(0)
    }
}

#[async_trait]
impl AccountStore for MockAccounts {
    async fn credit_balance(
        &self,
        player_id: &PlayerId,
        amount: Prize,
        game_id: GameId,
    ) -> Result<bool, AccountError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(AccountError::Storage("ledger unavailable".to_string()));
        }
        if !self.applied.lock().unwrap().insert(game_id) {
            return Ok(false);
        }
        *self
            .balances
            .lock()
            .unwrap()
            .entry(player_id.clone())
            .or_insert(0) += amount;
        Ok(true)
    }

    async fn balance(&self, player_id: &PlayerId) -> Result<Prize, AccountError> {
        Ok(self.balance_of(player_id.as_str()))
    }
}

// ==================== Question bank ====================

pub(crate) struct MockQuestionBank {
    questions: Vec<Question>,
}

impl MockQuestionBank {
    /// `count` questions spread round-robin over `levels` levels.
    pub(crate) fn generate(count: usize, levels: usize) -> Self {
        let questions = (0..count)
            .map(|i| {
                Question::new(
                    QuestionId::new(i as u64 + 1),
                    format!("Question {}?", i + 1),
                    [
                        "one".to_string(),
                        "two".to_string(),
                        "three".to_string(),
                        "four".to_string(),
                    ],
                    AnswerKey::ALL[i % 4],
                    i % levels,
                )
            })
            .collect();
        Self { questions }
    }
}

#[async_trait]
impl QuestionBank for MockQuestionBank {
    async fn questions_at_level(&self, level: usize) -> Result<Vec<Question>, QuestionBankError> {
        Ok(self
            .questions
            .iter()
            .filter(|q| q.level() == level)
            .cloned()
            .collect())
    }

    async fn count(&self) -> Result<usize, QuestionBankError> {
        Ok(self.questions.len())
    }
}

// ==================== Event logger ====================

#[derive(Default)]
pub(crate) struct RecordingLogger {
    events: Mutex<Vec<&'static str>>,
}

impl RecordingLogger {
    pub(crate) fn events(&self) -> Vec<&'static str> {
        self.events.lock().unwrap().clone()
    }
}

impl GameEventLogger for RecordingLogger {
    fn log(&self, event: GameEvent) {
        self.events.lock().unwrap().push(event.event_type);
    }
}
