//! Port for structured game event logging.
//!
//! Defines the [`GameEventLogger`] trait for recording lifecycle events
//! (game started, help used, game finished, balance credited) to a structured
//! audit log.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostic messages, while this port captures every state
//! transition in a machine-readable format (JSONL).

use serde_json::Value;

/// A structured game event for logging.
///
/// Each event has a type string and a JSON payload containing event-specific
/// fields. The adapter stamps the time when writing.
pub struct GameEvent {
    /// Event type identifier (e.g., "game_started", "game_finished").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl GameEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for logging game events to a structured log.
///
/// Implementations write each event as a single record (e.g., one JSONL line).
/// `log` is synchronous and non-fallible so a logging failure never disturbs
/// a game transition.
pub trait GameEventLogger: Send + Sync {
    /// Record a game event.
    fn log(&self, event: GameEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoGameEventLogger;

impl GameEventLogger for NoGameEventLogger {
    fn log(&self, _event: GameEvent) {}
}
