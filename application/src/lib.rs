//! Application layer for quiz-ladder
//!
//! This crate contains use cases and port definitions.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    account_store::{AccountError, AccountStore},
    clock::Clock,
    game_event_logger::{GameEvent, GameEventLogger, NoGameEventLogger},
    game_repository::{GameRepository, RepositoryError},
    question_bank::{QuestionBank, QuestionBankError},
};
pub use use_cases::game_result::GameResult;
pub use use_cases::pending_credits::PendingCredits;
pub use use_cases::play_game::{PlayGameError, PlayGameUseCase};
pub use use_cases::start_game::{StartGameError, StartGameOutcome, StartGameUseCase};
pub use use_cases::sweep_expired::{SweepError, SweepExpiredGamesUseCase};
