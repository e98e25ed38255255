//! Noughts - terminal tic-tac-toe
//!
//! The rules and the AI live in `noughts_core`; this crate wires them to a
//! terminal UI.
//!
//! # Architecture
//!
//! - **Controller**: owns the engine and schedules the AI's delayed reply
//! - **TUI**: ratatui front end reading [`noughts_core::GameSnapshot`]s
//! - **Simulate**: headless self-play
//! - **Config**: `noughts.toml` settings
//!
//! # Example
//!
//! ```
//! use noughts::simulate;
//!
//! let scores = simulate(10, Some(42)).unwrap();
//! assert_eq!(scores.games(), 10);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod controller;
mod simulate;

pub mod tui;

pub use config::{AppConfig, ConfigError};
pub use controller::{ControllerEvent, GameController};
pub use simulate::simulate;
