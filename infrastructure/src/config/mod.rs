//! Configuration file loading for quiz-ladder
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. Environment: `QUIZ_LADDER_<SECTION>__<KEY>`
//! 2. `--config <path>` specified file
//! 3. Project root: `./quiz-ladder.toml` or `./.quiz-ladder.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/quiz-ladder/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigIssue, FileConfig, FileGameConfig, FileLadderConfig, FileLoggingConfig,
    FileQuestionsConfig, Severity,
};
pub use loader::ConfigLoader;
