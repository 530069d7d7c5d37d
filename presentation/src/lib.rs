//! Presentation layer for quiz-ladder
//!
//! This crate contains CLI definitions, output formatters,
//! and the interactive play loop.

pub mod cli;
pub mod output;
pub mod play;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputFormat};
pub use output::console::ConsoleFormatter;
pub use output::formatter::OutputFormatter;
pub use output::json::JsonFormatter;
pub use play::{PlayCommand, PlayRepl};
