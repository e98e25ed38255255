//! Key bindings and cursor movement.

use crossterm::event::KeyCode;
use noughts_core::Position;

/// What a key press asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Play the cell with this index.
    Place(usize),
    /// Play the cell under the cursor.
    PlaceCursor,
    /// Move the cursor by an arrow key.
    Cursor(KeyCode),
    /// Switch between player-vs-player and player-vs-AI.
    ToggleMode,
    /// Start a new game.
    Reset,
    /// Leave the UI.
    Quit,
}

/// Maps a key to an action. Unbound keys yield `None`.
pub fn action_for(key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::Char(c @ '1'..='9') => c.to_digit(10).map(|d| Action::Place(d as usize - 1)),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::PlaceCursor),
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => Some(Action::Cursor(key)),
        KeyCode::Char('m') => Some(Action::ToggleMode),
        KeyCode::Char('r') => Some(Action::Reset),
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        _ => None,
    }
}

/// Moves the cursor one cell, stopping at the edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let index = cursor.to_index();
    let (row, col) = (index / 3, index % 3);

    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        _ => (row, col),
    };

    Position::from_index(row * 3 + col).unwrap_or(cursor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_are_one_based() {
        assert_eq!(action_for(KeyCode::Char('1')), Some(Action::Place(0)));
        assert_eq!(action_for(KeyCode::Char('9')), Some(Action::Place(8)));
        assert_eq!(action_for(KeyCode::Char('0')), None);
    }

    #[test]
    fn test_cursor_stops_at_edges() {
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Up), Position::TopLeft);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Left), Position::TopLeft);
        assert_eq!(move_cursor(Position::BottomRight, KeyCode::Right), Position::BottomRight);
        assert_eq!(move_cursor(Position::Center, KeyCode::Down), Position::BottomCenter);
        assert_eq!(move_cursor(Position::Center, KeyCode::Left), Position::MiddleLeft);
    }
}
