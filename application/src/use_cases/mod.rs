//! Use cases
//!
//! Application-level operations that orchestrate domain logic. Every mutating
//! request passes the lifecycle guard here (ownership, then time-limit
//! expiry) before the game state machine is touched.

pub mod game_result;
pub mod pending_credits;
pub mod play_game;
pub(crate) mod shared;
pub mod start_game;
pub mod sweep_expired;

#[cfg(test)]
pub(crate) mod test_support;
