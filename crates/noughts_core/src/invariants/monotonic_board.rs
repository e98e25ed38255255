//! Monotonic board invariant: squares never change once set.

use super::super::{Board, GameEngine, Square};
use super::Invariant;

/// Invariant: Board squares are monotonic (never overwritten).
///
/// Once a square transitions from Empty to Occupied, it never changes.
/// This is verified by replaying the move history and comparing.
pub struct MonotonicBoardInvariant;

impl Invariant<GameEngine> for MonotonicBoardInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let mut reconstructed = Board::new();

        for mov in engine.state().moves() {
            if !reconstructed.is_empty(mov.position()) {
                return false;
            }
            reconstructed.set(mov.position(), Square::Occupied(mov.player()));
        }

        reconstructed == *engine.board()
    }

    fn description() -> &'static str {
        "Board squares are monotonic (never overwritten)"
    }
}
