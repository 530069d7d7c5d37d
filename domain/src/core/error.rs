//! Domain error types

use crate::help::HelpType;
use thiserror::Error;

/// Domain-level errors raised by the ladder, the selector and the game state machine.
///
/// Time-limit expiry is deliberately absent: a timed out game is a normal
/// terminal transition, not a failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Game is already finished")]
    AlreadyFinished,

    #[error("Help '{0}' was already used in this game")]
    HelpAlreadyUsed(HelpType),

    #[error("Nothing to cash out at level 0")]
    NothingToCashOut,

    #[error("There is no previous level at level 0")]
    NoPreviousLevel,

    #[error("Not enough questions to fill level {level}")]
    InsufficientQuestions { level: usize },

    #[error("Invalid prize ladder: {0}")]
    InvalidLadder(String),

    #[error("Invalid game questions: {0}")]
    InvalidGameQuestions(String),

    #[error("Time limit must be between 1 and {max} seconds, got {seconds}")]
    InvalidTimeLimit { seconds: i64, max: i64 },
}

impl GameError {
    /// Whether this error indicates a stale or malformed request from the caller,
    /// as opposed to a configuration/data problem.
    pub fn is_caller_error(&self) -> bool {
        matches!(
            self,
            GameError::AlreadyFinished
                | GameError::HelpAlreadyUsed(_)
                | GameError::NothingToCashOut
                | GameError::NoPreviousLevel
        )
    }
}
