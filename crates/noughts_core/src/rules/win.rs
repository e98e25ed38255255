//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Geometry of a winning line.
///
/// Only used to describe a win in logs and snapshots; game logic never
/// branches on it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum LineKind {
    /// One of the three horizontal lines.
    Row,
    /// One of the three vertical lines.
    Column,
    /// One of the two diagonals.
    Diagonal,
}

impl LineKind {
    /// Classifies a position triple: a row tuple, else a column tuple, else diagonal.
    pub fn classify(positions: &[Position; 3]) -> Self {
        let matches_kind = |kind: LineKind| {
            LINES
                .iter()
                .any(|line| line.kind == kind && line.positions == *positions)
        };

        if matches_kind(LineKind::Row) {
            LineKind::Row
        } else if matches_kind(LineKind::Column) {
            LineKind::Column
        } else {
            LineKind::Diagonal
        }
    }
}

/// One of the eight fixed winning lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinningLine {
    positions: [Position; 3],
    kind: LineKind,
}

impl WinningLine {
    const fn new(positions: [Position; 3], kind: LineKind) -> Self {
        Self { positions, kind }
    }

    /// The three positions of the line in ascending order.
    pub fn positions(&self) -> [Position; 3] {
        self.positions
    }

    /// The line as board indices.
    pub fn indices(&self) -> [usize; 3] {
        self.positions.map(Position::to_index)
    }

    /// Row, column or diagonal.
    pub fn kind(&self) -> LineKind {
        self.kind
    }

    /// Returns the player holding all three squares, if any.
    pub fn owner(&self, board: &Board) -> Option<Player> {
        let [a, b, c] = self.positions;
        let sq = board.get(a);
        if sq != Square::Empty && sq == board.get(b) && sq == board.get(c) {
            sq.occupant()
        } else {
            None
        }
    }
}

/// Winning lines in evaluation order: rows, then columns, then diagonals.
pub const LINES: [WinningLine; 8] = {
    use LineKind::{Column, Diagonal, Row};
    use Position::*;
    [
        // Rows
        WinningLine::new([TopLeft, TopCenter, TopRight], Row),
        WinningLine::new([MiddleLeft, Center, MiddleRight], Row),
        WinningLine::new([BottomLeft, BottomCenter, BottomRight], Row),
        // Columns
        WinningLine::new([TopLeft, MiddleLeft, BottomLeft], Column),
        WinningLine::new([TopCenter, Center, BottomCenter], Column),
        WinningLine::new([TopRight, MiddleRight, BottomRight], Column),
        // Diagonals
        WinningLine::new([TopLeft, Center, BottomRight], Diagonal),
        WinningLine::new([TopRight, Center, BottomLeft], Diagonal),
    ]
};

/// Finds the first completed line, scanning [`LINES`] in order.
#[instrument(skip(board))]
pub fn find_winning_line(board: &Board) -> Option<(Player, WinningLine)> {
    LINES
        .iter()
        .find_map(|line| line.owner(board).map(|player| (player, *line)))
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise.
pub fn check_winner(board: &Board) -> Option<Player> {
    find_winning_line(board).map(|(player, _)| player)
}
