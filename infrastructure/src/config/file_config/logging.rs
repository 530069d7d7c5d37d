//! Logging configuration from TOML (`[logging]` section)
//!
//! ```toml
//! [logging]
//! event_log = "~/.local/share/quiz-ladder/events.jsonl"
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// JSONL file receiving one record per game event; disabled when unset
    pub event_log: Option<PathBuf>,
}
