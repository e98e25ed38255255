//! Core domain types for tic-tac-toe.

use super::position::Position;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Player in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the player holding this square, if any.
    pub fn occupant(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Creates a board from squares in row-major order.
    pub fn from_squares(squares: [Square; 9]) -> Self {
        Self { squares }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Sets the square at the given position.
    pub fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Number of occupied squares.
    pub fn occupied_count(&self) -> usize {
        self.squares.iter().filter(|s| **s != Square::Empty).count()
    }

    /// Returns a copy of the board with `player` placed at `pos`.
    ///
    /// Used for hypothetical placements; the original board is untouched.
    pub fn with_mark(&self, pos: Position, player: Player) -> Self {
        let mut scratch = self.clone();
        scratch.set(pos, Square::Occupied(player));
        scratch
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty squares show their 1-based key so the grid doubles as a keypad legend.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.squares[pos] {
                    Square::Empty => (pos + 1).to_string(),
                    Square::Occupied(player) => player.to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Error parsing a board from its compact text form.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum BoardParseError {
    /// Wrong number of cells.
    #[display("Expected 9 cells, found {}", _0)]
    WrongLength(usize),
    /// Unknown cell character.
    #[display("Unexpected cell character {:?}", _0)]
    BadCell(char),
}

impl std::error::Error for BoardParseError {}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parses nine cells written as `X`, `O` or `.`/`-`/`_` for empty.
    ///
    /// Whitespace and `|` separators are ignored, so `"XO.|.X.|..O"` works.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '|')
            .map(|c| match c.to_ascii_uppercase() {
                'X' => Ok(Square::Occupied(Player::X)),
                'O' => Ok(Square::Occupied(Player::O)),
                '.' | '-' | '_' => Ok(Square::Empty),
                other => Err(BoardParseError::BadCell(other)),
            })
            .collect::<Result<Vec<_>, _>>()?;

        let squares: [Square; 9] = cells
            .as_slice()
            .try_into()
            .map_err(|_| BoardParseError::WrongLength(cells.len()))?;

        Ok(Self::from_squares(squares))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_compact_board() {
        let board: Board = "XO.|.X.|..O".parse().unwrap();
        assert_eq!(board.get(Position::TopLeft), Square::Occupied(Player::X));
        assert_eq!(board.get(Position::TopCenter), Square::Occupied(Player::O));
        assert_eq!(board.get(Position::BottomRight), Square::Occupied(Player::O));
        assert_eq!(board.occupied_count(), 4);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!("XO".parse::<Board>(), Err(BoardParseError::WrongLength(2)));
        assert_eq!(
            "XOZ......".parse::<Board>(),
            Err(BoardParseError::BadCell('Z'))
        );
    }

    #[test]
    fn test_with_mark_leaves_original() {
        let board = Board::new();
        let scratch = board.with_mark(Position::Center, Player::O);
        assert!(board.is_empty(Position::Center));
        assert_eq!(scratch.get(Position::Center), Square::Occupied(Player::O));
    }

    #[test]
    fn test_display_shows_keys_for_empty() {
        let board: Board = "X........".parse().unwrap();
        assert_eq!(board.display(), "X|2|3\n-+-+-\n4|5|6\n-+-+-\n7|8|9");
    }
}
