//! Authoritative game engine.
//!
//! [`GameEngine`] owns the board, the player to move, the per-game record,
//! the mode and the session's scores. Every state transition goes through
//! [`GameEngine::apply_move`] or [`GameEngine::reset`].

use super::action::{Actor, Move, MoveError};
use super::contracts::{ActorsTurn, Contract, GameActive, LegalMove, MoveContract};
use super::mode::Mode;
use super::rules::{self, LineKind, WinningLine};
use super::snapshot::GameSnapshot;
use super::state::{GameState, GameStatus, Scores};
use super::{Board, Player, Position, Square};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// What a successful move led to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Game continues with the other player.
    Continue,
    /// The mover completed a line.
    Win {
        /// Who won.
        winner: Player,
        /// The completed line.
        line: WinningLine,
    },
    /// Board full with no line.
    Draw,
}

/// Result of [`GameEngine::apply_move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveResult {
    mov: Move,
    outcome: Outcome,
}

impl MoveResult {
    /// The move that was recorded.
    pub fn recorded(&self) -> &Move {
        &self.mov
    }

    /// What the move led to.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// True if the move ended the game.
    pub fn is_terminal(&self) -> bool {
        !matches!(self.outcome, Outcome::Continue)
    }

    /// The winner, if the move won.
    pub fn winner(&self) -> Option<Player> {
        match self.outcome {
            Outcome::Win { winner, .. } => Some(winner),
            _ => None,
        }
    }

    /// The completed line, if the move won.
    pub fn winning_combination(&self) -> Option<[Position; 3]> {
        match self.outcome {
            Outcome::Win { line, .. } => Some(line.positions()),
            _ => None,
        }
    }

    /// Row, column or diagonal, if the move won.
    pub fn win_type(&self) -> Option<LineKind> {
        match self.outcome {
            Outcome::Win { line, .. } => Some(line.kind()),
            _ => None,
        }
    }
}

/// Tic-tac-toe game engine.
///
/// State machine: `Active` until a line is completed (`Won`) or the board
/// fills (`Drawn`). Terminal states reject every move until [`reset`].
///
/// [`reset`]: GameEngine::reset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEngine {
    pub(crate) board: Board,
    pub(crate) to_move: Player,
    state: GameState,
    scores: Scores,
    mode: Mode,
}

impl GameEngine {
    /// Creates a player-vs-player engine with zeroed scores.
    #[instrument]
    pub fn new() -> Self {
        Self::with_mode(Mode::default())
    }

    /// Creates an engine in the given mode with zeroed scores.
    #[instrument]
    pub fn with_mode(mode: Mode) -> Self {
        Self {
            board: Board::new(),
            to_move: Player::X,
            state: GameState::new(),
            scores: Scores::new(),
            mode,
        }
    }

    /// Returns a reference to the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose symbol goes down next.
    ///
    /// After a win this stays on the winner.
    pub fn current_player(&self) -> Player {
        self.to_move
    }

    /// Returns the current game record.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the session's scores.
    pub fn scores(&self) -> &Scores {
        &self.scores
    }

    /// Returns the mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.state.status()
    }

    /// True while moves are accepted.
    pub fn is_active(&self) -> bool {
        !self.status().is_terminal()
    }

    /// True iff `index` is on the board, the cell is empty and the game is active.
    pub fn is_valid_move(&self, index: usize) -> bool {
        MoveContract::pre(self, &index).is_ok()
    }

    /// Places the current player's mark at `index` and evaluates the result.
    ///
    /// Lines are scanned rows, columns, diagonals; a full board without a
    /// line is a draw; otherwise the turn passes to the opponent. Terminal
    /// outcomes are tallied in [`scores`](Self::scores).
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] once the game is won or drawn
    /// - [`MoveError::OutOfRange`] for indices above 8
    /// - [`MoveError::CellOccupied`] if the cell holds a mark
    ///
    /// A failed call leaves the engine untouched.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn apply_move(&mut self, index: usize) -> Result<MoveResult, MoveError> {
        let position = LegalMove::check(self, index)?;

        let player = self.to_move;
        let now = Utc::now();
        let mov = Move::new(player, position, self.state.total_moves() + 1, now);

        self.board.set(position, Square::Occupied(player));
        self.state.record_move(mov);

        info!(
            move_number = mov.move_number(),
            %player,
            position = index,
            "Move {}: Player {} at position {}",
            mov.move_number(),
            player,
            index
        );

        let outcome = if let Some((winner, line)) = rules::find_winning_line(&self.board) {
            self.state.record_win(winner, line.positions(), now);
            self.scores.record(GameStatus::Won(winner));
            info!(
                %winner,
                win_type = %line.kind(),
                winning_combination = ?line.indices(),
                duration_ms = self.duration_ms(),
                "Game won"
            );
            Outcome::Win { winner, line }
        } else if rules::is_full(&self.board) {
            self.state.record_draw(now);
            self.scores.record(GameStatus::Drawn);
            info!(
                duration_ms = self.duration_ms(),
                total_moves = self.state.total_moves(),
                "Game ended in a draw"
            );
            Outcome::Draw
        } else {
            self.to_move = player.opponent();
            Outcome::Continue
        };

        #[cfg(debug_assertions)]
        MoveContract::post(self)?;

        debug!(
            board = %self.board.display(),
            current_player = %self.to_move,
            total_moves = self.state.total_moves(),
            active = self.is_active(),
            "Current game state"
        );

        Ok(MoveResult { mov, outcome })
    }

    /// Attempts a move on behalf of `actor`.
    ///
    /// This is the entry point for a presentation layer. In player-vs-AI
    /// mode the human may only move while X is to play and the AI only
    /// while O is to play; in player-vs-player mode the AI never moves.
    ///
    /// # Errors
    ///
    /// [`MoveError::GameOver`] first, then [`MoveError::NotYourTurn`], then
    /// everything [`apply_move`](Self::apply_move) reports.
    #[instrument(skip(self))]
    pub fn play(&mut self, actor: Actor, index: usize) -> Result<MoveResult, MoveError> {
        GameActive::check(self)?;
        ActorsTurn::check(self, actor)?;
        self.apply_move(index)
    }

    /// Starts a fresh game. Scores and mode are kept.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        if !self.state.moves().is_empty() {
            let history: Vec<String> = self.state.moves().iter().map(Move::to_string).collect();
            info!(
                final_board = %self.board.display(),
                total_moves = self.state.total_moves(),
                winner = %self.state.winner().map_or("Draw".to_string(), |p| p.to_string()),
                duration_ms = self.duration_ms(),
                ?history,
                "Game summary"
            );
        }

        self.board = Board::new();
        self.to_move = Player::X;
        self.state = GameState::new();

        info!(mode = %self.mode, "New game started");
    }

    /// Switches mode and starts a fresh game. Scores are kept.
    #[instrument(skip(self))]
    pub fn set_mode(&mut self, mode: Mode) {
        debug!(from = %self.mode, to = %mode, "Changing mode");
        self.mode = mode;
        self.reset();
    }

    /// Everything a UI needs to render the current state.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::from_engine(self)
    }

    fn duration_ms(&self) -> i64 {
        self.state
            .duration()
            .map_or(0, |duration| duration.num_milliseconds())
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_move_records_start_time() {
        let mut engine = GameEngine::new();
        let result = engine.apply_move(4).unwrap();
        assert_eq!(result.outcome(), Outcome::Continue);
        assert_eq!(result.recorded().move_number(), 1);
        assert_eq!(
            engine.state().start_time(),
            Some(result.recorded().timestamp())
        );
        assert_eq!(engine.state().end_time(), None);
        assert_eq!(engine.current_player(), Player::O);
    }

    #[test]
    fn test_win_sets_record_and_score() {
        let mut engine = GameEngine::new();
        for index in [0, 3, 1, 4] {
            engine.apply_move(index).unwrap();
        }
        let result = engine.apply_move(2).unwrap();

        assert_eq!(result.winner(), Some(Player::X));
        assert_eq!(result.win_type(), Some(LineKind::Row));
        assert_eq!(
            engine.state().winning_combination(),
            Some([Position::TopLeft, Position::TopCenter, Position::TopRight])
        );
        assert!(engine.state().end_time().is_some());
        assert_eq!(engine.scores().wins(Player::X), 1);
        assert_eq!(engine.current_player(), Player::X);
        assert!(!engine.is_active());
    }

    #[test]
    fn test_is_valid_move_has_no_side_effects() {
        let engine = GameEngine::new();
        let before = engine.clone();
        assert!(engine.is_valid_move(0));
        assert!(!engine.is_valid_move(9));
        assert_eq!(engine, before);
    }

    #[test]
    fn test_set_mode_resets_but_keeps_scores() {
        let mut engine = GameEngine::new();
        for index in [0, 3, 1, 4, 2] {
            engine.apply_move(index).unwrap();
        }
        engine.set_mode(Mode::PlayerVsAi);

        assert_eq!(engine.mode(), Mode::PlayerVsAi);
        assert!(engine.is_active());
        assert_eq!(engine.state(), &GameState::new());
        assert_eq!(engine.scores().wins(Player::X), 1);
    }
}
