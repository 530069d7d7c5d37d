//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod account_store;
pub mod clock;
pub mod game_event_logger;
pub mod game_repository;
pub mod question_bank;
