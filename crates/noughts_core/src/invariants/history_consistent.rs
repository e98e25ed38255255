//! History consistency invariant: history, move numbers and board agree.

use super::super::GameEngine;
use super::Invariant;

/// Invariant: the move record matches the board.
///
/// - history length equals the number of occupied squares
/// - `total_moves` equals the history length
/// - move numbers run 1, 2, 3, ... in order
pub struct HistoryConsistentInvariant;

impl Invariant<GameEngine> for HistoryConsistentInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let state = engine.state();
        let history = state.moves();

        let numbered = history
            .iter()
            .zip(1u32..)
            .all(|(mov, expected)| mov.move_number() == expected);

        numbered
            && history.len() == engine.board().occupied_count()
            && state.total_moves() as usize == history.len()
    }

    fn description() -> &'static str {
        "History length matches occupied squares and move numbers run 1..n"
    }
}
