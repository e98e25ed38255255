//! Per-game record and session-wide score tally.

use super::action::Move;
use super::{Player, Position};
use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

/// Where the game stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Moves are accepted.
    Active,
    /// Someone completed a line.
    Won(Player),
    /// Board full, no line.
    Drawn,
}

impl GameStatus {
    /// True for [`GameStatus::Won`] and [`GameStatus::Drawn`].
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::Active)
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::Active => write!(f, "active"),
            GameStatus::Won(player) => write!(f, "won by {}", player),
            GameStatus::Drawn => write!(f, "draw"),
        }
    }
}

/// Everything recorded about the current game.
///
/// Created empty at game start and at every reset. Moves are only ever
/// appended. At most one of `winner` and `is_draw` is set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    moves: Vec<Move>,
    winner: Option<Player>,
    winning_combination: Option<[Position; 3]>,
    total_moves: u32,
    start_time: Option<DateTime<Utc>>,
    end_time: Option<DateTime<Utc>>,
    is_draw: bool,
}

impl GameState {
    /// Creates the empty record for a fresh game.
    pub fn new() -> Self {
        Self::default()
    }

    /// Move history in play order.
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Winner, once the game is won.
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// The completed line, once the game is won.
    pub fn winning_combination(&self) -> Option<[Position; 3]> {
        self.winning_combination
    }

    /// Number of moves played.
    pub fn total_moves(&self) -> u32 {
        self.total_moves
    }

    /// Time of the first move.
    pub fn start_time(&self) -> Option<DateTime<Utc>> {
        self.start_time
    }

    /// Time the game reached a terminal state.
    pub fn end_time(&self) -> Option<DateTime<Utc>> {
        self.end_time
    }

    /// True once the game ended without a line.
    pub fn is_draw(&self) -> bool {
        self.is_draw
    }

    /// Derived status.
    pub fn status(&self) -> GameStatus {
        match (self.winner, self.is_draw) {
            (Some(player), _) => GameStatus::Won(player),
            (None, true) => GameStatus::Drawn,
            (None, false) => GameStatus::Active,
        }
    }

    /// Time from first move to the end of the game, if both are known.
    pub fn duration(&self) -> Option<TimeDelta> {
        Some(self.end_time? - self.start_time?)
    }

    pub(crate) fn record_move(&mut self, mov: Move) {
        if self.moves.is_empty() {
            self.start_time = Some(mov.timestamp());
        }
        self.moves.push(mov);
        self.total_moves += 1;
    }

    pub(crate) fn record_win(&mut self, winner: Player, line: [Position; 3], at: DateTime<Utc>) {
        self.winner = Some(winner);
        self.winning_combination = Some(line);
        self.end_time = Some(at);
    }

    pub(crate) fn record_draw(&mut self, at: DateTime<Utc>) {
        self.is_draw = true;
        self.end_time = Some(at);
    }
}

/// Win/draw tally for the session.
///
/// Survives resets and mode changes; only ever incremented.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Scores {
    x: u32,
    o: u32,
    draw: u32,
}

impl Scores {
    /// All tallies at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wins recorded for `player`.
    pub fn wins(&self, player: Player) -> u32 {
        match player {
            Player::X => self.x,
            Player::O => self.o,
        }
    }

    /// Draws recorded.
    pub fn draws(&self) -> u32 {
        self.draw
    }

    /// Games recorded in total.
    pub fn games(&self) -> u32 {
        self.x + self.o + self.draw
    }

    /// Tallies a finished game. Active status is ignored.
    pub(crate) fn record(&mut self, status: GameStatus) {
        match status {
            GameStatus::Won(Player::X) => self.x += 1,
            GameStatus::Won(Player::O) => self.o += 1,
            GameStatus::Drawn => self.draw += 1,
            GameStatus::Active => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_is_derived_from_record() {
        let mut state = GameState::new();
        assert_eq!(state.status(), GameStatus::Active);

        let now = Utc::now();
        state.record_move(Move::new(Player::X, Position::Center, 1, now));
        assert_eq!(state.start_time(), Some(now));
        assert_eq!(state.duration(), None);

        state.record_draw(now + TimeDelta::milliseconds(250));
        assert_eq!(state.status(), GameStatus::Drawn);
        assert_eq!(state.duration(), Some(TimeDelta::milliseconds(250)));
    }

    #[test]
    fn test_scores_tally() {
        let mut scores = Scores::new();
        scores.record(GameStatus::Won(Player::O));
        scores.record(GameStatus::Drawn);
        scores.record(GameStatus::Active);
        scores.record(GameStatus::Won(Player::O));
        assert_eq!(scores.wins(Player::X), 0);
        assert_eq!(scores.wins(Player::O), 2);
        assert_eq!(scores.draws(), 1);
        assert_eq!(scores.games(), 3);
    }
}
