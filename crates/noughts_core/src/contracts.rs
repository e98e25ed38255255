//! Contract-based validation for tic-tac-toe.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use super::action::{Actor, MoveError};
use super::engine::GameEngine;
use super::invariants::{EngineInvariants, InvariantSet};
use super::Position;
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(after)} - must hold after applying action
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the game has not reached a terminal state.
pub struct GameActive;

impl GameActive {
    /// Fails with [`MoveError::GameOver`] once the game is won or drawn.
    pub fn check(engine: &GameEngine) -> Result<(), MoveError> {
        if engine.status().is_terminal() {
            Err(MoveError::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the index names one of the nine cells.
pub struct InRange;

impl InRange {
    /// Converts the raw index, failing with [`MoveError::OutOfRange`].
    pub fn check(index: usize) -> Result<Position, MoveError> {
        Position::from_index(index).ok_or(MoveError::OutOfRange(index))
    }
}

/// Precondition: the cell at the move's position must be empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Fails with [`MoveError::CellOccupied`] naming the current occupant.
    pub fn check(engine: &GameEngine, position: Position) -> Result<(), MoveError> {
        match engine.board().get(position).occupant() {
            Some(occupant) => Err(MoveError::CellOccupied { position, occupant }),
            None => Ok(()),
        }
    }
}

/// Precondition: the actor controls the symbol that is to move.
pub struct ActorsTurn;

impl ActorsTurn {
    /// Fails with [`MoveError::NotYourTurn`] carrying the symbol that is to move.
    #[instrument(skip(engine), fields(mode = %engine.mode(), to_move = %engine.current_player()))]
    pub fn check(engine: &GameEngine, actor: Actor) -> Result<(), MoveError> {
        let to_move = engine.current_player();
        let ai_to_move = engine.mode().is_ai(to_move);
        let allowed = match actor {
            Actor::Human => !ai_to_move,
            Actor::Ai => ai_to_move,
        };

        if allowed {
            Ok(())
        } else {
            warn!(%actor, "Move attempted out of turn");
            Err(MoveError::NotYourTurn(to_move))
        }
    }
}

/// Composite precondition: game active, index in range, cell empty.
///
/// Checked in that order, so every attempt after a terminal outcome
/// reports [`MoveError::GameOver`].
pub struct LegalMove;

impl LegalMove {
    /// Validates all rule-level preconditions and returns the target cell.
    pub fn check(engine: &GameEngine, index: usize) -> Result<Position, MoveError> {
        GameActive::check(engine)?;
        let position = InRange::check(index)?;
        CellIsEmpty::check(engine, position)?;
        Ok(position)
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move actions.
///
/// Preconditions:
/// - Game is active
/// - Index is on the board
/// - Cell is empty
///
/// Postconditions:
/// - Board is the replay of the move history
/// - Players alternate starting with X
/// - History, move numbers and move count agree
pub struct MoveContract;

impl Contract<GameEngine, usize> for MoveContract {
    fn pre(engine: &GameEngine, index: &usize) -> Result<(), MoveError> {
        LegalMove::check(engine, *index).map(|_| ())
    }

    fn post(after: &GameEngine) -> Result<(), MoveError> {
        EngineInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}
