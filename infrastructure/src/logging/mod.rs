//! Logging infrastructure: structured game event logging.
//!
//! [`JsonlGameEventLogger`] implements the application-layer
//! [`GameEventLogger`](ladder_application::GameEventLogger) port by appending
//! one JSON object per line.

mod jsonl_logger;

pub use jsonl_logger::JsonlGameEventLogger;
