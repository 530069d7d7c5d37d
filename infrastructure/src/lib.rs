//! Infrastructure layer for quiz-ladder
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod clock;
pub mod config;
pub mod logging;
pub mod persistence;
pub mod question_bank;

// Re-export commonly used types
pub use clock::SystemClock;
pub use config::{
    ConfigIssue, ConfigLoader, FileConfig, FileGameConfig, FileLadderConfig, FileLoggingConfig,
    FileQuestionsConfig, Severity,
};
pub use logging::JsonlGameEventLogger;
pub use persistence::{InMemoryAccountStore, InMemoryGameRepository};
pub use question_bank::{QuestionFileError, StaticQuestionBank};
