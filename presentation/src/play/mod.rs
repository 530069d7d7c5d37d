//! Interactive play module
//!
//! Provides a readline-based game loop on top of the start and play use cases.

mod command;
mod repl;

pub use command::PlayCommand;
pub use repl::PlayRepl;
