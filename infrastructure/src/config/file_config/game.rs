//! Game configuration from TOML (`[game]` section)
//!
//! ```toml
//! [game]
//! time_limit_seconds = 2100   # 35 minutes
//! seed = 42                   # optional, makes question selection and help reproducible
//! ```

use super::ConfigIssue;
use chrono::Duration;
use ladder_domain::core::error::GameError;
use ladder_domain::game::rules::{DEFAULT_TIME_LIMIT_SECS, time_limit_from_seconds};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGameConfig {
    /// Seconds a game may run before it times out
    pub time_limit_seconds: i64,
    /// RNG seed for question selection and help outcomes
    pub seed: Option<u64>,
}

impl Default for FileGameConfig {
    fn default() -> Self {
        Self {
            time_limit_seconds: DEFAULT_TIME_LIMIT_SECS,
            seed: None,
        }
    }
}

impl FileGameConfig {
    pub fn time_limit(&self) -> Result<Duration, GameError> {
        time_limit_from_seconds(self.time_limit_seconds)
    }

    pub(super) fn validate(&self) -> Vec<ConfigIssue> {
        match self.time_limit() {
            Ok(_) => Vec::new(),
            Err(e) => vec![ConfigIssue::error(
                "game.time_limit_seconds",
                format!("game.time_limit_seconds: {}", e),
            )],
        }
    }
}
