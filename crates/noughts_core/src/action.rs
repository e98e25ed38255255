//! First-class action types for tic-tac-toe.
//!
//! Moves are domain events, not side effects. Once the engine records
//! one it is never edited or removed until the next reset.

use super::{Player, Position};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A recorded move: who played where, and when.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    player: Player,
    position: Position,
    /// 1-based index of this move in the game's history.
    move_number: u32,
    timestamp: DateTime<Utc>,
}

impl Move {
    /// Returns the player who made this move.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the position of this move.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Returns the 1-based move number.
    pub fn move_number(&self) -> u32 {
        self.move_number
    }

    /// Returns when the move was recorded.
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Move {}: {} -> {}",
            self.move_number,
            self.player,
            self.position.label()
        )
    }
}

/// Who is attempting a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Actor {
    /// A person at the keyboard.
    Human,
    /// The heuristic opponent.
    #[display("AI")]
    Ai,
}

/// Error that can occur when validating or applying a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// Index outside 0-8.
    #[display("Position {} is out of range (must be 0-8)", _0)]
    OutOfRange(usize),

    /// The target cell already holds a mark.
    #[display("{} is already taken by {}", position, occupant)]
    CellOccupied {
        /// The occupied cell.
        position: Position,
        /// Who holds it.
        occupant: Player,
    },

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// The actor tried to move while the other side is to play.
    #[display("Not your turn, waiting for {}", _0)]
    NotYourTurn(Player),

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}
