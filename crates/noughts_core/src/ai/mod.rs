//! Move selection for the computer opponent.
//!
//! [`HeuristicStrategy`] is a greedy one-ply rule list: win, block, center,
//! corner, anything. It does not search deeper, so it can miss wins that
//! need a two-move setup. Random tie-breaks go through an injected
//! [`Chooser`] so the rule order can be tested deterministically.

mod chooser;
mod heuristic;

pub use chooser::{Chooser, FirstChooser, RandomChooser};
pub use heuristic::HeuristicStrategy;

use super::{Board, Player, Position};

/// Anything that can pick a move for one side.
pub trait MoveStrategy: Send {
    /// Picks an empty cell for `ai`, or `None` when the board is full.
    fn choose_move(&mut self, board: &Board, ai: Player, opponent: Player) -> Option<Position>;
}
