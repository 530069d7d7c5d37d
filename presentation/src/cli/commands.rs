//! CLI command definitions

use clap::{Parser, ValueEnum};
use ladder_domain::PlayerId;
use std::path::PathBuf;

/// Output format for game state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Colored, human-readable screens
    #[default]
    Text,
    /// One JSON document per update
    Json,
}

/// CLI arguments for quiz-ladder
#[derive(Parser, Debug)]
#[command(name = "quiz-ladder")]
#[command(author, version, about = "Climb the prize ladder one question at a time")]
#[command(long_about = r#"
quiz-ladder is a single-player quiz game. Each correct answer moves you one
rung up the prize ladder; a wrong answer drops you to the last fireproof
level you passed. You may cash out at any time, and each game offers one
"ask the audience" and one 50/50.

Configuration files are loaded from (in priority order):
1. QUIZ_LADDER_<SECTION>__<KEY> environment variables
2. --config <path>       Explicit config file
3. ./quiz-ladder.toml    Project-level config
4. ~/.config/quiz-ladder/config.toml   Global config

Example:
  quiz-ladder --questions data/questions.toml
  quiz-ladder -p alice --seed 42
  QUIZ_LADDER_GAME__TIME_LIMIT_SECONDS=300 quiz-ladder
"#)]
pub struct Cli {
    /// Player name (defaults to $USER)
    #[arg(short, long, value_name = "NAME")]
    pub player: Option<String>,

    /// Question bank file (overrides [questions] path)
    #[arg(long, value_name = "PATH")]
    pub questions: Option<PathBuf>,

    /// Seed for question selection and help outcomes
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Seconds a game may run before it times out
    #[arg(long, value_name = "SECONDS")]
    pub time_limit: Option<i64>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: OutputFormat,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the welcome banner and hints
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

impl Cli {
    /// The player to act as: `--player`, then `$USER`, then `player`.
    pub fn player_id(&self) -> PlayerId {
        self.player
            .clone()
            .or_else(|| std::env::var("USER").ok())
            .filter(|name| !name.trim().is_empty())
            .map(PlayerId::new)
            .unwrap_or_else(|| PlayerId::new("player"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults() {
        let cli = Cli::parse_from(["quiz-ladder"]);
        assert_eq!(cli.output, OutputFormat::Text);
        assert_eq!(cli.verbose, 0);
        assert!(cli.seed.is_none());
        assert!(!cli.no_config);
    }

    #[test]
    fn test_parse_flags() {
        let cli = Cli::parse_from([
            "quiz-ladder",
            "-p",
            "alice",
            "--seed",
            "7",
            "--time-limit",
            "60",
            "-o",
            "json",
            "-vv",
            "--questions",
            "q.toml",
        ]);
        assert_eq!(cli.player_id(), PlayerId::new("alice"));
        assert_eq!(cli.seed, Some(7));
        assert_eq!(cli.time_limit, Some(60));
        assert_eq!(cli.output, OutputFormat::Json);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.questions, Some(PathBuf::from("q.toml")));
    }
}
