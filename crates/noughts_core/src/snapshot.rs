//! Read-only view of the engine for presentation layers.

use super::engine::GameEngine;
use super::mode::{DRAW_MESSAGE, Mode};
use super::state::{GameStatus, Scores};
use super::{Player, Position};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Everything a UI needs after a move or reset.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Cells in row-major order.
    board: [Option<Player>; 9],
    /// Player to move (the winner, once won).
    current_player: Player,
    /// Active, won or drawn.
    status: GameStatus,
    /// Session tallies.
    scores: Scores,
    /// Mode the game is played in.
    mode: Mode,
    /// Cells to highlight once the game is won.
    winning_combination: Option<[usize; 3]>,
    /// Result message when terminal, turn prompt otherwise.
    message: String,
    /// Moves played so far.
    total_moves: u32,
}

impl GameSnapshot {
    /// Captures the engine's current state.
    pub fn from_engine(engine: &GameEngine) -> Self {
        let status = engine.status();
        let mode = engine.mode();
        let message = match status {
            GameStatus::Active => mode.turn_prompt(engine.current_player()),
            GameStatus::Won(winner) => mode.win_message(winner),
            GameStatus::Drawn => DRAW_MESSAGE.to_string(),
        };

        Self {
            board: engine.board().squares().map(|square| square.occupant()),
            current_player: engine.current_player(),
            status,
            scores: *engine.scores(),
            mode,
            winning_combination: engine
                .state()
                .winning_combination()
                .map(|line| line.map(Position::to_index)),
            message,
            total_moves: engine.state().total_moves(),
        }
    }

    /// True if `index` is part of the winning line.
    pub fn is_highlighted(&self, index: usize) -> bool {
        self.winning_combination
            .is_some_and(|line| line.contains(&index))
    }
}
