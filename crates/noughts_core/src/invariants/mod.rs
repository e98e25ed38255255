//! Engine consistency checks.
//!
//! Each invariant is a zero-sized type so sets of them can be composed as
//! tuples. [`EngineInvariants`] runs after every accepted move in debug
//! builds, through [`crate::contracts::MoveContract`].

/// A property of `S` that no legal sequence of moves can break.
pub trait Invariant<S> {
    /// True if `state` satisfies the property.
    fn holds(state: &S) -> bool;

    /// One-line statement of the property, used in violation reports.
    fn description() -> &'static str;
}

/// A failed check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// [`Invariant::description`] of the failed check.
    pub description: String,
}

impl InvariantViolation {
    /// Wraps a description.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// Invariants checked as a group; implemented for 2- and 3-tuples.
pub trait InvariantSet<S> {
    /// Runs every member and collects all failures, not just the first.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn check<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

fn into_result(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);
        check::<S, I3>(state, &mut violations);
        into_result(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);
        into_result(violations)
    }
}

pub mod alternating_turn;
pub mod history_consistent;
pub mod monotonic_board;

pub use alternating_turn::AlternatingTurnInvariant;
pub use history_consistent::HistoryConsistentInvariant;
pub use monotonic_board::MonotonicBoardInvariant;

/// Everything the engine re-checks after a move.
pub type EngineInvariants = (
    MonotonicBoardInvariant,
    AlternatingTurnInvariant,
    HistoryConsistentInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameEngine, Player, Position, Square};

    #[test]
    fn test_invariant_set_holds_for_empty_game() {
        let engine = GameEngine::new();
        assert!(EngineInvariants::check_all(&engine).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let mut engine = GameEngine::new();
        for index in [0, 4, 2] {
            engine.apply_move(index).unwrap();
        }
        assert!(EngineInvariants::check_all(&engine).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_each_violation() {
        let mut engine = GameEngine::new();
        engine.apply_move(4).unwrap();
        engine.board.set(Position::TopLeft, Square::Occupied(Player::O));

        let violations = EngineInvariants::check_all(&engine).unwrap_err();
        assert_eq!(violations.len(), 2);
        assert!(violations.iter().any(|v| v.description == MonotonicBoardInvariant::description()));
        assert!(violations.iter().any(|v| v.description == HistoryConsistentInvariant::description()));
    }

    #[test]
    fn test_two_invariants_as_set() {
        let engine = GameEngine::new();
        type TwoInvariants = (MonotonicBoardInvariant, AlternatingTurnInvariant);
        assert!(TwoInvariants::check_all(&engine).is_ok());
    }
}
