//! Full-board detection.

use super::super::Board;
use super::win::check_winner;

/// No empty cell left.
pub fn is_full(board: &Board) -> bool {
    board.occupied_count() == 9
}

/// A full board with no completed line.
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && check_winner(board).is_none()
}
