use std::{io, path::PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use kinematics::{ProblemInstance, RandomSource, UniformSource};
use session::{report, Session};
use shared::protocol::ProblemReport;
use tracing_subscriber::EnvFilter;

mod config;
mod display;
mod repl;

use config::{load_settings, validate_tolerance, Settings};
use repl::Repl;

const FALLBACK_LOG_FILTER: &str = "info";

#[derive(Parser, Debug)]
#[command(name = "trainer", about = "Practice absolute segment and relative ankle angles")]
struct Cli {
    #[arg(long, default_value = "trainer.toml")]
    config: PathBuf,
    /// Seed for reproducible problems.
    #[arg(long)]
    seed: Option<u64>,
    /// Accepted distance from the reference angle, in degrees.
    #[arg(long, allow_negative_numbers = true)]
    tolerance: Option<f64>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Interactive practice session (default).
    Play,
    /// Print one problem as JSON.
    Generate {
        #[arg(long)]
        dorsiflexed: bool,
        #[arg(long)]
        answers: bool,
    },
}

/// Command-line flags override file and environment settings.
fn apply_cli(settings: &mut Settings, cli: &Cli) -> Result<()> {
    if let Some(seed) = cli.seed {
        settings.seed = Some(seed);
    }
    if let Some(tolerance) = cli.tolerance {
        settings.tolerance = validate_tolerance(tolerance).context("in --tolerance")?;
    }
    Ok(())
}

/// Parsed log filter, or the fallback plus the parse error to report once
/// logging is up.
fn log_filter(directives: &str) -> (EnvFilter, Option<String>) {
    match EnvFilter::try_new(directives) {
        Ok(filter) => (filter, None),
        Err(err) => (EnvFilter::new(FALLBACK_LOG_FILTER), Some(err.to_string())),
    }
}

fn generate(source: &mut dyn UniformSource, dorsiflexed: bool, answers: bool) -> ProblemReport {
    let mut problem = ProblemInstance::generic(source);
    if dorsiflexed {
        problem = problem.dorsiflexed(source);
    }
    report(&problem, answers)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut settings = load_settings(&cli.config)?;
    apply_cli(&mut settings, &cli)?;

    let (filter, rejected) = log_filter(&settings.log_filter);
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
    if let Some(error) = rejected {
        tracing::warn!(
            filter = %settings.log_filter,
            %error,
            fallback = FALLBACK_LOG_FILTER,
            "invalid log filter"
        );
    }
    tracing::debug!(?settings, config = %cli.config.display(), "settings loaded");

    let mut source = RandomSource::from_seed_option(settings.seed);

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => {
            let session = Session::new(source, settings.tolerance)?;
            tracing::info!(session = %session.id(), seed = ?settings.seed, "practice session started");
            let mut repl = Repl::new(session, settings.plot_path);
            let stdin = io::stdin();
            repl.run(stdin.lock(), &mut io::stdout())?;
            tracing::info!(phase = ?repl.session().phase(), "practice session ended");
        }
        Command::Generate {
            dorsiflexed,
            answers,
        } => {
            let view = generate(&mut source, dorsiflexed, answers);
            println!("{}", serde_json::to_string_pretty(&view)?);
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
