//! Headless self-play.

use noughts_core::{GameEngine, HeuristicStrategy, MoveError, Player, Scores};
use tracing::{info, instrument, warn};

/// Plays `games` games of the heuristic against itself and returns the tally.
///
/// Both sides use one strategy; a `seed` makes the run reproducible.
///
/// # Errors
///
/// Only if the engine rejects a move the strategy chose.
#[instrument]
pub fn simulate(games: u32, seed: Option<u64>) -> Result<Scores, MoveError> {
    let mut strategy = match seed {
        Some(seed) => HeuristicStrategy::seeded(seed),
        None => HeuristicStrategy::random(),
    };
    let mut engine = GameEngine::new();

    for game in 1..=games {
        while engine.is_active() {
            let player = engine.current_player();
            let Some(position) = strategy.select(engine.board(), player, player.opponent()) else {
                warn!(game, "Strategy found no move on an active board");
                break;
            };
            engine.apply_move(position.to_index())?;
        }
        info!(game, status = %engine.status(), "Simulated game finished");
        engine.reset();
    }

    let scores = *engine.scores();
    info!(
        x = scores.wins(Player::X),
        o = scores.wins(Player::O),
        draws = scores.draws(),
        "Simulation complete"
    );
    Ok(scores)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_game_is_tallied() {
        let scores = simulate(12, Some(1)).unwrap();
        assert_eq!(scores.games(), 12);
    }

    #[test]
    fn test_seeded_runs_repeat() {
        assert_eq!(simulate(20, Some(5)).unwrap(), simulate(20, Some(5)).unwrap());
    }

    #[test]
    fn test_zero_games() {
        assert_eq!(simulate(0, None).unwrap(), Scores::new());
    }
}
