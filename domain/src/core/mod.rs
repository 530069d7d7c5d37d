//! Core domain concepts shared across all subdomains.
//!
//! - [`question::Question`] - an immutable question from the shared bank
//! - [`question::AnswerKey`] - one of the four answer slots `a..d`
//! - [`ids`] - identifiers for games, players and questions
//! - [`error::GameError`] - domain-level errors

pub mod error;
pub mod ids;
pub mod question;
