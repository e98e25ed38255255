//! Rule-priority move selection.

use super::super::rules::check_winner;
use super::super::{Board, Player, Position};
use super::{Chooser, MoveStrategy, RandomChooser};
use tracing::{debug, instrument};

/// Greedy one-ply heuristic.
///
/// First applicable rule wins:
/// 1. complete a line for `ai`
/// 2. block a line for `opponent`
/// 3. take the center
/// 4. take a random empty corner
/// 5. take a random empty cell
///
/// Cells are tried in ascending order for rules 1 and 2.
#[derive(Debug, Clone)]
pub struct HeuristicStrategy<C> {
    chooser: C,
}

impl<C: Chooser> HeuristicStrategy<C> {
    /// Creates a strategy that breaks ties with `chooser`.
    pub fn new(chooser: C) -> Self {
        Self { chooser }
    }

    /// Runs the rule list against `board`.
    #[instrument(skip(self, board), fields(board = %board.display()))]
    pub fn select(&mut self, board: &Board, ai: Player, opponent: Player) -> Option<Position> {
        let empty = Position::valid_moves(board);
        if empty.is_empty() {
            debug!("No move available");
            return None;
        }

        if let Some(pos) = completing_move(board, &empty, ai) {
            debug!(position = pos.to_index(), rule = "win", "AI chose position");
            return Some(pos);
        }

        if let Some(pos) = completing_move(board, &empty, opponent) {
            debug!(position = pos.to_index(), rule = "block", "AI chose position");
            return Some(pos);
        }

        if board.is_empty(Position::Center) {
            debug!(position = 4, rule = "center", "AI chose position");
            return Some(Position::Center);
        }

        let corners: Vec<Position> = empty.iter().copied().filter(|p| p.is_corner()).collect();
        let (pos, rule) = if corners.is_empty() {
            (self.chooser.choose(&empty), "any")
        } else {
            (self.chooser.choose(&corners), "corner")
        };
        debug!(position = pos.to_index(), rule, "AI chose position");
        Some(pos)
    }
}

impl HeuristicStrategy<RandomChooser> {
    /// Heuristic with OS-seeded random tie-breaks.
    pub fn random() -> Self {
        Self::new(RandomChooser::from_entropy())
    }

    /// Heuristic with reproducible tie-breaks.
    pub fn seeded(seed: u64) -> Self {
        Self::new(RandomChooser::seeded(seed))
    }
}

impl<C: Chooser> MoveStrategy for HeuristicStrategy<C> {
    fn choose_move(&mut self, board: &Board, ai: Player, opponent: Player) -> Option<Position> {
        self.select(board, ai, opponent)
    }
}

/// First empty cell (ascending) where `player` would complete a line.
///
/// Works on a scratch copy; `board` is never modified.
fn completing_move(board: &Board, empty: &[Position], player: Player) -> Option<Position> {
    empty
        .iter()
        .copied()
        .find(|pos| check_winner(&board.with_mark(*pos, player)) == Some(player))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::FirstChooser;

    fn first() -> HeuristicStrategy<FirstChooser> {
        HeuristicStrategy::new(FirstChooser)
    }

    /// Records the candidate lists it was offered.
    #[derive(Default)]
    struct Spy {
        offered: Vec<Vec<Position>>,
    }

    impl Chooser for Spy {
        fn choose(&mut self, candidates: &[Position]) -> Position {
            self.offered.push(candidates.to_vec());
            *candidates.last().unwrap()
        }
    }

    #[test]
    fn test_win_takes_priority_over_block() {
        let board: Board = "OO.|XX.|...".parse().unwrap();
        assert_eq!(
            first().select(&board, Player::O, Player::X),
            Some(Position::TopRight)
        );
    }

    #[test]
    fn test_blocks_opponent_line() {
        let board: Board = "XX.|O..|...".parse().unwrap();
        assert_eq!(
            first().select(&board, Player::O, Player::X),
            Some(Position::TopRight)
        );
    }

    #[test]
    fn test_lowest_winning_cell_first() {
        // O can win at 2 (top row) or 6 (left column); X threatens 6 too.
        let board: Board = "OO.|O..|.XX".parse().unwrap();
        assert_eq!(
            first().select(&board, Player::O, Player::X),
            Some(Position::TopRight)
        );
    }

    #[test]
    fn test_center_on_empty_board() {
        let mut strategy = HeuristicStrategy::random();
        for _ in 0..25 {
            assert_eq!(
                strategy.select(&Board::new(), Player::O, Player::X),
                Some(Position::Center)
            );
        }
    }

    #[test]
    fn test_corners_offered_when_center_taken() {
        let board: Board = "...|.X.|...".parse().unwrap();
        let mut strategy = HeuristicStrategy::new(Spy::default());
        let pos = strategy.select(&board, Player::O, Player::X);

        assert_eq!(pos, Some(Position::BottomRight));
        assert_eq!(strategy.chooser.offered, vec![Position::CORNERS.to_vec()]);
    }

    #[test]
    fn test_any_cell_when_corners_taken() {
        // X O X / . O X / O X O : no lines to win or block, only 3 is left.
        let board: Board = "XOX|.OX|OXO".parse().unwrap();
        let mut strategy = HeuristicStrategy::new(Spy::default());
        assert_eq!(
            strategy.select(&board, Player::X, Player::O),
            Some(Position::MiddleLeft)
        );
        assert_eq!(strategy.chooser.offered, vec![vec![Position::MiddleLeft]]);
    }

    #[test]
    fn test_full_board_has_no_move() {
        let board: Board = "XOX|OXX|OXO".parse().unwrap();
        assert_eq!(first().select(&board, Player::O, Player::X), None);
    }

    #[test]
    fn test_selection_does_not_touch_board() {
        let board: Board = "OO.|XX.|...".parse().unwrap();
        let before = board.clone();
        first().select(&board, Player::O, Player::X);
        assert_eq!(board, before);
    }
}
