//! Game mode selection.

use super::Player;
use serde::{Deserialize, Serialize};

/// Game mode - who is the opponent?
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumString,
    strum::Display,
    strum::EnumIter,
)]
pub enum Mode {
    /// Two humans sharing the board.
    #[default]
    #[serde(rename = "pvp")]
    #[strum(serialize = "pvp")]
    PlayerVsPlayer,
    /// Human as X against the heuristic AI as O.
    #[serde(rename = "pvai")]
    #[strum(serialize = "pvai")]
    PlayerVsAi,
}

impl Mode {
    /// Returns display name.
    pub fn name(&self) -> &'static str {
        match self {
            Mode::PlayerVsPlayer => "Player vs Player",
            Mode::PlayerVsAi => "Player vs AI",
        }
    }

    /// The symbol the AI controls, if any.
    pub fn ai_player(self) -> Option<Player> {
        match self {
            Mode::PlayerVsPlayer => None,
            Mode::PlayerVsAi => Some(Player::O),
        }
    }

    /// True if `player` is driven by the AI in this mode.
    pub fn is_ai(self, player: Player) -> bool {
        self.ai_player() == Some(player)
    }

    /// The other mode.
    pub fn toggle(self) -> Self {
        match self {
            Mode::PlayerVsPlayer => Mode::PlayerVsAi,
            Mode::PlayerVsAi => Mode::PlayerVsPlayer,
        }
    }

    /// Scoreboard label for `player`.
    pub fn player_label(self, player: Player) -> String {
        match (self, self.is_ai(player)) {
            (Mode::PlayerVsAi, true) => format!("AI ({})", player),
            (Mode::PlayerVsAi, false) => format!("You ({})", player),
            (Mode::PlayerVsPlayer, _) => format!("Player {}", player),
        }
    }

    /// Result line for a won game.
    pub fn win_message(self, winner: Player) -> String {
        match self {
            Mode::PlayerVsPlayer => format!("Player {} wins!", winner),
            Mode::PlayerVsAi if self.is_ai(winner) => "AI wins!".to_string(),
            Mode::PlayerVsAi => "You win!".to_string(),
        }
    }

    /// Prompt shown while `to_move` is expected to play.
    pub fn turn_prompt(self, to_move: Player) -> String {
        match self {
            Mode::PlayerVsPlayer => format!("Player {}'s turn", to_move),
            Mode::PlayerVsAi if self.is_ai(to_move) => "AI is thinking...".to_string(),
            Mode::PlayerVsAi => "Your turn".to_string(),
        }
    }
}

/// Result line for a drawn game, in every mode.
pub const DRAW_MESSAGE: &str = "It's a draw!";
