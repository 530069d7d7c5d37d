//! CLI entrypoint for quiz-ladder
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use ladder_application::{
    AccountStore, Clock, GameEventLogger, GameRepository, NoGameEventLogger, PendingCredits,
    PlayGameUseCase, StartGameUseCase, SweepExpiredGamesUseCase,
};
use ladder_infrastructure::{
    ConfigLoader, FileConfig, InMemoryAccountStore, InMemoryGameRepository,
    JsonlGameEventLogger, Severity, StaticQuestionBank, SystemClock,
};
use ladder_presentation::{Cli, JsonFormatter, OutputFormat, PlayRepl};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const DEFAULT_QUESTIONS_PATH: &str = "data/questions.toml";
const SWEEP_INTERVAL: Duration = Duration::from_secs(30);

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(());
    }

    info!("Starting quiz-ladder");

    // === Configuration ===
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };
    apply_cli_overrides(&mut config, &cli);
    check_config(&config)?;

    let rules = config.rules().context("Invalid game rules")?;

    // === Dependency Injection ===
    let questions_path = config
        .questions
        .path
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_QUESTIONS_PATH));
    let bank = StaticQuestionBank::load(&questions_path)
        .with_context(|| format!("Could not load questions from {}", questions_path.display()))?;
    let missing = bank.missing_levels(rules.level_count());
    if !missing.is_empty() {
        warn!("Question bank has no questions for levels {:?}", missing);
    }

    let games: Arc<dyn GameRepository> = Arc::new(InMemoryGameRepository::new());
    let accounts: Arc<dyn AccountStore> = Arc::new(InMemoryAccountStore::new());
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let event_logger = event_logger(&config);
    let pending_credits = Arc::new(PendingCredits::new());

    let mut start = StartGameUseCase::new(
        games.clone(),
        Arc::new(bank),
        accounts.clone(),
        clock.clone(),
        rules.clone(),
    )
    .with_event_logger(event_logger.clone())
    .with_pending_credits(pending_credits.clone());
    let mut play =
        PlayGameUseCase::new(games.clone(), accounts.clone(), clock.clone(), rules.clone())
            .with_event_logger(event_logger.clone())
            .with_pending_credits(pending_credits.clone());
    if let Some(seed) = config.game.seed {
        start = start.with_seed(seed);
        play = play.with_seed(seed.wrapping_add(1));
    }

    let sweep = SweepExpiredGamesUseCase::new(games, accounts.clone(), clock, rules)
        .with_event_logger(event_logger)
        .with_pending_credits(pending_credits);
    spawn_sweeper(sweep);

    let mut repl = PlayRepl::new(start, play, accounts, cli.player_id()).with_banner(!cli.quiet);
    if cli.output == OutputFormat::Json {
        repl = repl.with_formatter(Box::new(JsonFormatter));
    }

    repl.run().await?;
    Ok(())
}

fn apply_cli_overrides(config: &mut FileConfig, cli: &Cli) {
    if let Some(path) = &cli.questions {
        config.questions.path = Some(path.clone());
    }
    if let Some(seed) = cli.seed {
        config.game.seed = Some(seed);
    }
    if let Some(seconds) = cli.time_limit {
        config.game.time_limit_seconds = seconds;
    }
}

/// Log warnings, fail on errors.
fn check_config(config: &FileConfig) -> Result<()> {
    let mut errors = Vec::new();
    for issue in config.validate() {
        match issue.severity {
            Severity::Warning => warn!("{}: {}", issue.field, issue.message),
            Severity::Error => errors.push(format!("  {}: {}", issue.field, issue.message)),
        }
    }
    if !errors.is_empty() {
        bail!("Invalid configuration:\n{}", errors.join("\n"));
    }
    Ok(())
}

fn event_logger(config: &FileConfig) -> Arc<dyn GameEventLogger> {
    let Some(path) = &config.logging.event_log else {
        return Arc::new(NoGameEventLogger);
    };
    match JsonlGameEventLogger::new(path) {
        Some(logger) => {
            info!("Game events logged to {}", logger.path().display());
            Arc::new(logger)
        }
        None => Arc::new(NoGameEventLogger),
    }
}

/// Time out abandoned games in the background.
fn spawn_sweeper(sweep: SweepExpiredGamesUseCase) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(SWEEP_INTERVAL);
        loop {
            interval.tick().await;
            if let Err(e) = sweep.execute().await {
                warn!("Expired game sweep failed: {}", e);
            }
        }
    });
}
