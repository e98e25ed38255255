//! Command-line interface for noughts.

use clap::{Parser, Subcommand};
use noughts_core::Mode;
use std::path::PathBuf;

/// Noughts - tic-tac-toe against a friend or the computer
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(long, global = true, default_value = "noughts.toml")]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// Game mode (pvp or pvai)
        #[arg(short, long)]
        mode: Option<Mode>,

        /// Pause before the AI replies, in milliseconds
        #[arg(long)]
        ai_delay_ms: Option<u64>,

        /// Seed for the AI's random tie-breaks
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Let the AI play itself and print the tally as JSON
    Simulate {
        /// Number of games to play
        #[arg(short, long, default_value = "100")]
        games: u32,

        /// Seed for the AI's random tie-breaks
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_play_parses_mode() {
        let cli = Cli::parse_from(["noughts", "play", "--mode", "pvai", "--ai-delay-ms", "0"]);
        assert_eq!(cli.config, PathBuf::from("noughts.toml"));
        match cli.command {
            Command::Play {
                mode, ai_delay_ms, ..
            } => {
                assert_eq!(mode, Some(Mode::PlayerVsAi));
                assert_eq!(ai_delay_ms, Some(0));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_unknown_mode_rejected() {
        assert!(Cli::try_parse_from(["noughts", "play", "--mode", "solo"]).is_err());
    }

    #[test]
    fn test_simulate_with_global_config() {
        let cli = Cli::parse_from(["noughts", "simulate", "--games", "3", "--config", "x.toml"]);
        assert_eq!(cli.config, PathBuf::from("x.toml"));
        assert!(matches!(cli.command, Command::Simulate { games: 3, seed: None }));
    }
}
