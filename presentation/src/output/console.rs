//! Console output formatter for games

use crate::output::formatter::OutputFormatter;
use colored::Colorize;
use ladder_application::GameResult;
use ladder_domain::{
    AnswerKey, AudienceVotes, Game, GameQuestion, GameStatus, HelpType, Prize, PrizeLadder,
};

const BAR_WIDTH: usize = 30;

/// Formats games for console display
pub struct ConsoleFormatter {
    ladder: PrizeLadder,
}

impl ConsoleFormatter {
    pub fn new(ladder: PrizeLadder) -> Self {
        Self { ladder }
    }

    /// Format the open question with any aids already applied to it
    pub fn format_question(&self, game: &Game, gq: &GameQuestion) -> String {
        let mut output = String::new();
        let level = gq.level();

        output.push_str(&Self::header(&format!(
            "Question {} of {} for {}",
            level + 1,
            game.level_count(),
            Self::money(self.ladder.prize_for(level + 1))
        )));
        output.push('\n');
        output.push_str(&format!("\n{}\n\n", gq.question().text().bold()));

        let remaining = gq.help_hash().fifty_fifty.as_ref();
        for (key, text) in gq.question().answers() {
            let label = format!("{})", key.as_str().to_uppercase());
            if remaining.is_some_and(|ff| !ff.contains(key)) {
                output.push_str(&format!("  {} {}\n", label.dimmed(), "-".dimmed()));
            } else {
                output.push_str(&format!("  {} {}\n", label.yellow().bold(), text));
            }
        }

        if let Some(votes) = &gq.help_hash().audience_help {
            output.push_str(&format!("\n{}\n", "The audience says:".cyan().bold()));
            output.push_str(&Self::format_votes(votes));
        }

        output.push_str(&format!("\n{}\n", self.format_standing(game)));
        output
    }

    /// Banked and guaranteed amounts plus remaining aids
    pub fn format_standing(&self, game: &Game) -> String {
        let level = game.current_level();
        let aids = HelpType::ALL
            .iter()
            .map(|help| {
                if game.help_used(*help) {
                    help.display_name().dimmed().strikethrough().to_string()
                } else {
                    help.display_name().green().to_string()
                }
            })
            .collect::<Vec<_>>()
            .join(", ");

        format!(
            "{} {}   {} {}   {} {}",
            "Banked:".cyan(),
            Self::money(self.ladder.prize_for(level)),
            "Safe:".cyan(),
            Self::money(self.ladder.fireproof_prize_for(level)),
            "Aids:".cyan(),
            aids
        )
    }

    /// Audience shares as horizontal bars
    pub fn format_votes(votes: &AudienceVotes) -> String {
        votes
            .iter()
            .map(|(key, share)| {
                let filled = usize::from(share) * BAR_WIDTH / 100;
                format!(
                    "  {} {:>3}% {}\n",
                    key.as_str().to_uppercase().yellow(),
                    share,
                    "#".repeat(filled).cyan()
                )
            })
            .collect()
    }

    /// The full ladder, top prize first, marking the player's position
    pub fn format_ladder(&self, current_level: usize) -> String {
        let mut output = String::new();
        for (index, prize) in self.ladder.prizes().iter().enumerate().rev() {
            let marker = if index == current_level { ">" } else { " " };
            let line = format!("{} {:>2}  {:>12}", marker, index + 1, Self::money(*prize));
            let line = if index < current_level {
                line.dimmed().to_string()
            } else if index == current_level {
                line.yellow().bold().to_string()
            } else if self.ladder.is_fireproof(index) {
                line.green().bold().to_string()
            } else {
                line
            };
            output.push_str(&line);
            output.push('\n');
        }
        output
    }

    /// Closing message for a finished game
    pub fn format_finish(&self, game: &Game) -> String {
        let prize = Self::money(game.prize());
        let message = match game.status() {
            GameStatus::Won => format!("You answered every question and won {}!", prize)
                .green()
                .bold()
                .to_string(),
            GameStatus::CashedOut => format!("You took the money: {}.", prize)
                .green()
                .to_string(),
            GameStatus::TimedOut => format!("Time is up. You leave with {}.", prize)
                .yellow()
                .to_string(),
            GameStatus::Failed => {
                let reveal = game
                    .current_game_question()
                    .map(|gq| Self::reveal(gq.correct_answer_key(), gq))
                    .unwrap_or_default();
                format!("Wrong answer.{} You leave with {}.", reveal, prize)
                    .red()
                    .to_string()
            }
            GameStatus::InProgress => return String::new(),
        };

        format!(
            "{}\n{}\n{}",
            Self::header(&format!("Game {} over", game.id())),
            message,
            Self::footer()
        )
    }

    fn reveal(key: AnswerKey, gq: &GameQuestion) -> String {
        format!(
            " The correct answer was {}) {}.",
            key.as_str().to_uppercase(),
            gq.question().answer(key)
        )
    }

    /// Group thousands: `1000000` becomes `$1,000,000`
    pub fn money(amount: Prize) -> String {
        let digits = amount.to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(c);
        }
        format!("${}", grouped)
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn footer() -> String {
        "=".repeat(60).cyan().to_string()
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_game(&self, game: &Game) -> String {
        if game.is_finished() {
            return self.format_finish(game);
        }
        match game.current_game_question() {
            Some(gq) => self.format_question(game, gq),
            None => self.format_standing(game),
        }
    }

    fn format_result(&self, result: &GameResult) -> String {
        let mut output = self.format_game(&result.game);
        if result.credited() > 0 {
            output.push_str(&format!(
                "\n{} {}\n",
                Self::money(result.credited()).green().bold(),
                "credited to your balance".dimmed()
            ));
        }
        output
    }

    fn format_answer(&self, result: &GameResult) -> String {
        if result.status() == GameStatus::InProgress {
            return format!(
                "{}\n\n{}",
                "Correct!".green().bold(),
                self.format_result(result)
            );
        }
        self.format_result(result)
    }
}
