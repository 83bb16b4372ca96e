//! First-class invariants for tic-tac-toe.
//!
//! Invariants are logical properties of a single game state. They are
//! checked after every move in debug builds and can be tested
//! independently.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for 3-tuples of invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns every violation, not just the first.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn check_one<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
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
        check_one::<S, I1>(state, &mut violations);
        check_one::<S, I2>(state, &mut violations);
        check_one::<S, I3>(state, &mut violations);
        into_result(violations)
    }
}

pub mod balanced_marks;
pub mod status_derived;
pub mod turn_matches_board;

pub use balanced_marks::BalancedMarksInvariant;
pub use status_derived::StatusDerivedInvariant;
pub use turn_matches_board::TurnMatchesBoardInvariant;

/// All single-state invariants of a game as a composable set.
pub type BoardInvariants = (
    BalancedMarksInvariant,
    TurnMatchesBoardInvariant,
    StatusDerivedInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameEngine, Mark, Position, Square};

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        let engine = GameEngine::new();
        assert!(BoardInvariants::check_all(&engine).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let mut engine = GameEngine::new();
        for index in [0, 4, 2, 1] {
            assert!(engine.apply_move(index));
        }
        assert!(BoardInvariants::check_all(&engine).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_every_violation() {
        let mut engine = GameEngine::new();
        engine.apply_move(4);
        // Two extra X marks: unbalanced, and the status no longer matches
        // once they complete a line.
        engine.board.set(Position::TopCenter, Square::Occupied(Mark::X));
        engine.board.set(Position::BottomCenter, Square::Occupied(Mark::X));

        let violations = BoardInvariants::check_all(&engine).unwrap_err();
        assert_eq!(violations.len(), 2);
        assert_eq!(violations[0].description, BalancedMarksInvariant::description());
        assert_eq!(violations[1].description, StatusDerivedInvariant::description());
    }
}
