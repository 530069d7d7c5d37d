//! REPL (Read-Eval-Print Loop) for interactive play

use super::command::PlayCommand;
use crate::output::console::ConsoleFormatter;
use crate::output::formatter::OutputFormatter;
use colored::Colorize;
use ladder_application::{
    AccountStore, GameResult, PlayGameError, PlayGameUseCase, StartGameUseCase,
};
use ladder_domain::{AnswerKey, Game, GameError, GameId, HelpType, PlayerId};
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use std::sync::Arc;

/// Interactive game REPL for a single player
pub struct PlayRepl {
    start: StartGameUseCase,
    play: PlayGameUseCase,
    accounts: Arc<dyn AccountStore>,
    player: PlayerId,
    formatter: Box<dyn OutputFormatter>,
    show_banner: bool,
    game_id: Option<GameId>,
}

impl PlayRepl {
    /// Create a new PlayRepl rendering with the console formatter
    pub fn new(
        start: StartGameUseCase,
        play: PlayGameUseCase,
        accounts: Arc<dyn AccountStore>,
        player: PlayerId,
    ) -> Self {
        let formatter = Box::new(ConsoleFormatter::new(play.rules().ladder.clone()));
        Self {
            start,
            play,
            accounts,
            player,
            formatter,
            show_banner: true,
            game_id: None,
        }
    }

    /// Replace the output formatter
    pub fn with_formatter(mut self, formatter: Box<dyn OutputFormatter>) -> Self {
        self.formatter = formatter;
        self
    }

    /// Set whether to print the welcome banner
    pub fn with_banner(mut self, show: bool) -> Self {
        self.show_banner = show;
        self
    }

    /// Run the interactive REPL
    pub async fn run(&mut self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        let history_path = dirs::data_dir().map(|p| p.join("quiz-ladder").join("history.txt"));

        if let Some(ref path) = history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        if self.show_banner {
            self.print_welcome();
        }
        self.start_game().await;

        loop {
            let readline = rl.readline(&self.prompt());

            match readline {
                Ok(line) => {
                    let Some(command) = PlayCommand::parse(&line) else {
                        continue;
                    };
                    let _ = rl.add_history_entry(line.trim());

                    if self.dispatch(command).await {
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        if let Some(ref path) = history_path {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    fn prompt(&self) -> String {
        format!("{}> ", self.player)
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│            quiz-ladder - Let's play         │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("Player: {}", self.player);
        println!(
            "Time limit: {} minutes per game",
            self.play.rules().time_limit.num_minutes()
        );
        Self::print_usage();
    }

    fn print_usage() {
        println!();
        println!("Commands:");
        println!("  a, b, c, d       - Answer the current question");
        println!("  /audience        - Ask the audience (once per game)");
        println!("  /5050            - Remove two wrong answers (once per game)");
        println!("  /take            - Take the money and stop");
        println!("  /status          - Show the current question again");
        println!("  /ladder          - Show the prize ladder");
        println!("  /balance         - Show your balance");
        println!("  /new             - Start a new game");
        println!("  /help, /h, /?    - Show this help");
        println!("  /quit, /exit, /q - Exit");
        println!();
    }

    /// Handle one command. Returns true if should exit.
    async fn dispatch(&mut self, command: PlayCommand) -> bool {
        match command {
            PlayCommand::Quit => {
                println!("Bye!");
                return true;
            }
            PlayCommand::Usage => Self::print_usage(),
            PlayCommand::Answer(key) => self.answer(key).await,
            PlayCommand::Help(help_type) => self.use_help(help_type).await,
            PlayCommand::TakeMoney => self.take_money().await,
            PlayCommand::Status => self.status().await,
            PlayCommand::Ladder => self.ladder().await,
            PlayCommand::Balance => self.balance().await,
            PlayCommand::NewGame => self.start_game().await,
            PlayCommand::Unknown(input) => {
                println!("Unknown command: {}", input);
                println!("Answer with a, b, c or d. Type /help for available commands");
            }
        }
        false
    }

    async fn start_game(&mut self) {
        match self.start.execute(&self.player).await {
            Ok(outcome) => {
                if !outcome.is_new() {
                    println!(
                        "{}",
                        format!("Resuming game {} already in progress.", outcome.game().id())
                            .yellow()
                    );
                }
                let game = outcome.into_game();
                self.game_id = Some(game.id());
                println!("{}", self.formatter.format_game(&game));
            }
            Err(e) => eprintln!("{} {}", "Error:".red().bold(), e),
        }
    }

    async fn answer(&mut self, key: AnswerKey) {
        let Some(game_id) = self.require_game() else {
            return;
        };
        match self.play.answer(game_id, &self.player, key.as_str()).await {
            Ok(result) => {
                println!("{}", self.formatter.format_answer(&result));
                if result.game.is_finished() {
                    Self::print_game_over_hint(&result.game);
                }
            }
            Err(e) => Self::print_play_error(&e),
        }
    }

    async fn use_help(&mut self, help_type: HelpType) {
        let Some(game_id) = self.require_game() else {
            return;
        };
        let result = self.play.use_help(game_id, &self.player, help_type).await;
        self.render(result);
    }

    async fn take_money(&mut self) {
        let Some(game_id) = self.require_game() else {
            return;
        };
        let result = self.play.take_money(game_id, &self.player).await;
        self.render(result);
    }

    async fn status(&mut self) {
        let Some(game_id) = self.require_game() else {
            return;
        };
        let result = self.play.show(game_id, &self.player).await;
        self.render(result);
    }

    async fn ladder(&self) {
        let level = match self.game_id {
            Some(game_id) => self
                .play
                .show(game_id, &self.player)
                .await
                .map(|r| r.game.current_level())
                .unwrap_or(0),
            None => 0,
        };
        let formatter = ConsoleFormatter::new(self.play.rules().ladder.clone());
        println!("{}", formatter.format_ladder(level));
    }

    async fn balance(&self) {
        match self.accounts.balance(&self.player).await {
            Ok(amount) => println!(
                "{} {}",
                "Balance:".cyan().bold(),
                ConsoleFormatter::money(amount)
            ),
            Err(e) => eprintln!("{} {}", "Error:".red().bold(), e),
        }
    }

    fn require_game(&self) -> Option<GameId> {
        if self.game_id.is_none() {
            println!("No game yet. Type /new to start one.");
        }
        self.game_id
    }

    fn render(&self, result: Result<GameResult, PlayGameError>) {
        match result {
            Ok(result) => {
                println!("{}", self.formatter.format_result(&result));
                if result.game.is_finished() {
                    Self::print_game_over_hint(&result.game);
                }
            }
            Err(e) => Self::print_play_error(&e),
        }
    }

    fn print_play_error(error: &PlayGameError) {
        eprintln!("{} {}", "Error:".red().bold(), describe_play_error(error));
    }

    fn print_game_over_hint(game: &Game) {
        println!(
            "{}",
            format!("Game {} is {}. Type /new to play again.", game.id(), game.status()).dimmed()
        );
    }
}

/// Player-facing wording for a rejected move.
fn describe_play_error(error: &PlayGameError) -> String {
    match error.game_error() {
        Some(GameError::AlreadyFinished) => {
            "This game is over. Type /new to play again.".to_string()
        }
        Some(GameError::HelpAlreadyUsed(help_type)) => {
            format!("{} was already used in this game.", help_type.display_name())
        }
        Some(GameError::NothingToCashOut) => {
            "Answer at least one question before taking the money.".to_string()
        }
        _ => error.to_string(),
    }
}
