//! Game status, derived from the recorded finish and never stored on its own.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Why a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinishReason {
    Won,
    CashedOut,
    TimedOut,
    Failed,
}

impl FinishReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            FinishReason::Won => "won",
            FinishReason::CashedOut => "cashed_out",
            FinishReason::TimedOut => "timed_out",
            FinishReason::Failed => "failed",
        }
    }
}

impl std::fmt::Display for FinishReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Terminal record of a game: when and why it ended.
///
/// Time and reason travel together so a finished game can never be observed
/// with one set and the other missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finish {
    pub at: DateTime<Utc>,
    pub reason: FinishReason,
}

/// Status of a game as seen by callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    InProgress,
    Won,
    CashedOut,
    TimedOut,
    Failed,
}

impl GameStatus {
    /// Derive the status from an optional finish record.
    pub fn from_finish(finish: Option<&Finish>) -> Self {
        match finish.map(|f| f.reason) {
            None => GameStatus::InProgress,
            Some(FinishReason::Won) => GameStatus::Won,
            Some(FinishReason::CashedOut) => GameStatus::CashedOut,
            Some(FinishReason::TimedOut) => GameStatus::TimedOut,
            Some(FinishReason::Failed) => GameStatus::Failed,
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::InProgress => "in_progress",
            GameStatus::Won => "won",
            GameStatus::CashedOut => "cashed_out",
            GameStatus::TimedOut => "timed_out",
            GameStatus::Failed => "failed",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            GameStatus::InProgress => "In progress",
            GameStatus::Won => "Won",
            GameStatus::CashedOut => "Cashed out",
            GameStatus::TimedOut => "Timed out",
            GameStatus::Failed => "Failed",
        }
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
