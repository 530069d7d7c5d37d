//! Rules a game is played under.

use crate::core::error::GameError;
use crate::ladder::PrizeLadder;
use chrono::{DateTime, Duration, Utc};

/// Default time limit for one game: 35 minutes.
pub const DEFAULT_TIME_LIMIT_SECS: i64 = 35 * 60;

/// Longest accepted time limit: one week.
pub const MAX_TIME_LIMIT_SECS: i64 = 7 * 24 * 60 * 60;

/// Convert a configured limit in seconds to a [`Duration`].
///
/// Values outside `1..=MAX_TIME_LIMIT_SECS` are an error rather than a
/// chrono panic.
pub fn time_limit_from_seconds(seconds: i64) -> Result<Duration, GameError> {
    let invalid = GameError::InvalidTimeLimit {
        seconds,
        max: MAX_TIME_LIMIT_SECS,
    };
    if !(1..=MAX_TIME_LIMIT_SECS).contains(&seconds) {
        return Err(invalid);
    }
    Duration::try_seconds(seconds).ok_or(invalid)
}

/// Prize ladder plus time limit.
///
/// Supplied from configuration so neither the ladder size nor its values
/// are baked into the state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRules {
    pub ladder: PrizeLadder,
    pub time_limit: Duration,
}

impl GameRules {
    pub fn new(ladder: PrizeLadder, time_limit: Duration) -> Self {
        Self { ladder, time_limit }
    }

    pub fn with_time_limit_seconds(mut self, seconds: i64) -> Result<Self, GameError> {
        self.time_limit = time_limit_from_seconds(seconds)?;
        Ok(self)
    }

    /// Number of questions per game.
    pub fn level_count(&self) -> usize {
        self.ladder.len()
    }

    /// Whether a game created at `created_at` has run past the limit at `now`.
    pub fn is_expired(&self, created_at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        now.signed_duration_since(created_at) > self.time_limit
    }
}

impl Default for GameRules {
    fn default() -> Self {
        Self {
            ladder: PrizeLadder::classic(),
            time_limit: Duration::seconds(DEFAULT_TIME_LIMIT_SECS),
        }
    }
}
