//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::super::{GameEngine, Player};
use super::Invariant;

/// Invariant: Players alternate turns.
///
/// Move history must show X, O, X, O, ... pattern and, while the game is
/// active, the player to move must be the one the pattern predicts.
pub struct AlternatingTurnInvariant;

impl Invariant<GameEngine> for AlternatingTurnInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let history = engine.state().moves();

        if let Some(first) = history.first()
            && first.player() != Player::X
        {
            return false;
        }

        if history
            .windows(2)
            .any(|pair| pair[0].player() == pair[1].player())
        {
            return false;
        }

        // A terminal game keeps the last mover as current player.
        if engine.status().is_terminal() {
            return true;
        }

        let expected_next = if history.len() % 2 == 0 {
            Player::X
        } else {
            Player::O
        };

        engine.current_player() == expected_next
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_game_holds() {
        assert!(AlternatingTurnInvariant::holds(&GameEngine::new()));
    }

    #[test]
    fn test_alternating_sequence_holds() {
        let mut engine = GameEngine::new();
        for index in [0, 4, 2, 6, 8] {
            engine.apply_move(index).unwrap();
        }
        assert!(AlternatingTurnInvariant::holds(&engine));
        assert_eq!(engine.current_player(), Player::O);
    }

    #[test]
    fn test_wrong_player_to_move_violates() {
        let mut engine = GameEngine::new();
        engine.apply_move(4).unwrap();
        engine.to_move = Player::X;
        assert!(!AlternatingTurnInvariant::holds(&engine));
    }
}
