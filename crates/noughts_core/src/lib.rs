//! Tic-tac-toe rule engine and heuristic opponent.
//!
//! # Architecture
//!
//! - **Engine**: [`GameEngine`] owns board, turn, move history, mode and scores
//! - **Rules**: pure win/draw evaluation shared by the engine and the AI
//! - **AI**: [`HeuristicStrategy`], a one-ply rule list with injectable tie-breaks
//! - **Snapshot**: [`GameSnapshot`], the read-only view handed to a UI
//!
//! The engine does not depend on the AI and runs headless.
//!
//! # Example
//!
//! ```
//! use noughts_core::{Actor, GameEngine, HeuristicStrategy, Mode, Player, GameStatus};
//!
//! let mut engine = GameEngine::with_mode(Mode::PlayerVsAi);
//! let mut ai = HeuristicStrategy::seeded(42);
//!
//! engine.play(Actor::Human, 0).unwrap();
//! let reply = ai.select(engine.board(), Player::O, Player::X).unwrap();
//! assert_eq!(reply.to_index(), 4);
//! engine.play(Actor::Ai, reply.to_index()).unwrap();
//! assert_eq!(engine.status(), GameStatus::Active);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod engine;
mod mode;
mod position;
mod snapshot;
mod state;
mod types;

pub mod ai;
pub mod contracts;
pub mod invariants;
pub mod rules;

pub use action::{Actor, Move, MoveError};
pub use ai::{Chooser, FirstChooser, HeuristicStrategy, MoveStrategy, RandomChooser};
pub use engine::{GameEngine, MoveResult, Outcome};
pub use mode::{DRAW_MESSAGE, Mode};
pub use position::Position;
pub use rules::{LineKind, WinningLine};
pub use snapshot::GameSnapshot;
pub use state::{GameState, GameStatus, Scores};
pub use types::{Board, BoardParseError, Player, Square};
