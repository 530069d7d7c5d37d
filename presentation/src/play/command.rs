//! Parsing of REPL input lines

use ladder_domain::{AnswerKey, HelpType};

/// One line of player input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayCommand {
    Answer(AnswerKey),
    Help(HelpType),
    TakeMoney,
    Status,
    Ladder,
    Balance,
    NewGame,
    Usage,
    Quit,
    Unknown(String),
}

impl PlayCommand {
    /// Parse a trimmed line. Returns `None` for blank input.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        let Some(cmd) = line.strip_prefix('/') else {
            return Some(
                line.parse::<AnswerKey>()
                    .map(PlayCommand::Answer)
                    .unwrap_or_else(|_| PlayCommand::Unknown(line.to_string())),
            );
        };

        let command = match cmd.to_ascii_lowercase().as_str() {
            "quit" | "exit" | "q" => PlayCommand::Quit,
            "help" | "h" | "?" => PlayCommand::Usage,
            "take" | "cash" => PlayCommand::TakeMoney,
            "status" | "s" => PlayCommand::Status,
            "ladder" => PlayCommand::Ladder,
            "balance" => PlayCommand::Balance,
            "new" => PlayCommand::NewGame,
            other => other
                .parse::<HelpType>()
                .map(PlayCommand::Help)
                .unwrap_or_else(|_| PlayCommand::Unknown(line.to_string())),
        };
        Some(command)
    }
}
