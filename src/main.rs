//! Noughts - terminal tic-tac-toe.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use noughts::AppConfig;
use tracing::{info, instrument};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load(&cli.config)
        .with_context(|| format!("Failed to load {}", cli.config.display()))?;

    match cli.command {
        Command::Play {
            mode,
            ai_delay_ms,
            seed,
        } => {
            let config = config.with_overrides(mode, ai_delay_ms, seed);
            noughts::tui::run_tui(&config).await
        }
        Command::Simulate { games, seed } => {
            initialize_tracing();
            run_simulation(games, seed.or(*config.seed()))
        }
    }
}

/// Plays `games` headless games and prints the tally as JSON.
#[instrument]
fn run_simulation(games: u32, seed: Option<u64>) -> Result<()> {
    info!("Starting simulation");
    let scores = noughts::simulate(games, seed)?;
    println!("{}", serde_json::to_string_pretty(&scores)?);
    Ok(())
}

fn initialize_tracing() {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "info,noughts=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
