//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted into domain types on demand.

mod game;
mod ladder;
mod logging;
mod questions;

pub use game::FileGameConfig;
pub use ladder::FileLadderConfig;
pub use logging::FileLoggingConfig;
pub use questions::FileQuestionsConfig;

use ladder_domain::{GameError, GameRules};
use serde::{Deserialize, Serialize};

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the configuration cannot work at all.
    Error,
    /// Non-fatal: the configuration works but may not behave as expected.
    Warning,
}

/// A detected issue in the configuration.
#[derive(Debug, Clone)]
pub struct ConfigIssue {
    pub severity: Severity,
    /// Dotted path of the offending field (e.g. `ladder.prizes`).
    pub field: String,
    pub message: String,
}

impl ConfigIssue {
    pub fn error(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn warning(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Game timing and randomness
    pub game: FileGameConfig,
    /// Prize ladder table
    pub ladder: FileLadderConfig,
    /// Question bank source
    pub questions: FileQuestionsConfig,
    /// Structured event log
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        issues.extend(self.game.validate());
        issues.extend(self.ladder.validate());
        issues.extend(self.questions.validate());
        issues
    }

    /// Whether any issue is fatal.
    pub fn has_errors(&self) -> bool {
        self.validate()
            .iter()
            .any(|i| i.severity == Severity::Error)
    }

    /// Build the rules games are played under.
    pub fn rules(&self) -> Result<GameRules, GameError> {
        Ok(GameRules::new(
            self.ladder.to_ladder()?,
            self.game.time_limit()?,
        ))
    }
}
