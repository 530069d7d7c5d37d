//! Question bank port
//!
//! Read-only access to the shared pool of questions, keyed by difficulty level.

use async_trait::async_trait;
use ladder_domain::Question;
use thiserror::Error;

/// Errors that can occur while reading the question bank
#[derive(Error, Debug)]
pub enum QuestionBankError {
    #[error("Question bank unavailable: {0}")]
    Unavailable(String),

    #[error("Invalid question data: {0}")]
    InvalidData(String),
}

/// Shared question bank
///
/// Implementations live in the infrastructure layer.
#[async_trait]
pub trait QuestionBank: Send + Sync {
    /// All questions of the given difficulty level.
    async fn questions_at_level(&self, level: usize) -> Result<Vec<Question>, QuestionBankError>;

    /// Total number of questions in the bank.
    async fn count(&self) -> Result<usize, QuestionBankError>;
}
