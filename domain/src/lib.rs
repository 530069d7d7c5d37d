//! Domain layer for quiz-ladder
//!
//! This crate contains the core game rules, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Ladder
//!
//! A player climbs a fixed sequence of difficulty-increasing questions. Each
//! correct answer completes a level; the [`PrizeLadder`] maps completed levels
//! to prizes, and some levels are *fireproof*: once passed, their prize is kept
//! even after a later wrong answer or timeout.
//!
//! ## Game
//!
//! [`Game`] is the aggregate root. Its status is derived from how (and whether)
//! it finished: `InProgress`, then exactly one of `Won`, `CashedOut`,
//! `TimedOut` or `Failed`.
//!
//! ## Help
//!
//! Two one-time aids per game, computed by the [`help`] engine: audience votes
//! and fifty-fifty.

pub mod core;
pub mod game;
pub mod help;
pub mod ladder;
pub mod selection;

// Re-export commonly used types
pub use core::{
    error::GameError,
    ids::{GameId, PlayerId, QuestionId},
    question::{AnswerKey, ParseAnswerKeyError, Question},
};
pub use game::{
    Finish, FinishReason, Game, GameQuestion, GameRules, GameSnapshot, GameStatus, Settlement,
};
pub use help::{AudienceVotes, FiftyFifty, HelpHash, HelpType, ParseHelpTypeError};
pub use ladder::{Prize, PrizeLadder};
pub use selection::{QuestionPool, select_questions};
