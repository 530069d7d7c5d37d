//! Question bank configuration from TOML (`[questions]` section)
//!
//! ```toml
//! [questions]
//! path = "data/questions.toml"
//! ```

use super::ConfigIssue;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileQuestionsConfig {
    /// Path to the question bank file
    pub path: Option<PathBuf>,
}

impl FileQuestionsConfig {
    pub(super) fn validate(&self) -> Vec<ConfigIssue> {
        match &self.path {
            Some(path) if !path.exists() => vec![ConfigIssue::error(
                "questions.path",
                format!("question bank file not found: {}", path.display()),
            )],
            _ => Vec::new(),
        }
    }
}
