//! Contract-based validation for tic-tac-toe moves.
//!
//! Contracts formalize Hoare-style reasoning around one move:
//! `{P(state, action)} action {Q(before, after)}`.

use crate::invariants::{BoardInvariants, InvariantSet};
use crate::{GameEngine, MoveError, Position, Square};
use tracing::{instrument, warn};

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the game has not been won or drawn.
pub struct GameRunning;

impl GameRunning {
    /// Fails with [`MoveError::GameOver`] once the game is terminal.
    #[instrument(skip(engine))]
    pub fn check(engine: &GameEngine) -> Result<(), MoveError> {
        if engine.status().is_running() {
            Ok(())
        } else {
            Err(MoveError::GameOver)
        }
    }
}

/// Precondition: the target square is empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Fails with [`MoveError::SquareOccupied`] for a taken square.
    #[instrument(skip(engine))]
    pub fn check(pos: Position, engine: &GameEngine) -> Result<(), MoveError> {
        if engine.board().is_empty(pos) {
            Ok(())
        } else {
            Err(MoveError::SquareOccupied(pos))
        }
    }
}

/// Composite precondition: the game is running and the square is empty.
///
/// A finished game reports [`MoveError::GameOver`] even when the square
/// is also taken.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(engine))]
    pub fn check(pos: Position, engine: &GameEngine) -> Result<(), MoveError> {
        GameRunning::check(engine)?;
        SquareIsEmpty::check(pos, engine)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for a single placement.
///
/// Preconditions:
/// - Game is running
/// - Square is empty
///
/// Postconditions:
/// - Exactly one square changed, from empty to the mover's mark
/// - The turn passed to the other mark
/// - Every [`BoardInvariants`] member holds
pub struct MoveContract;

impl Contract<GameEngine, Position> for MoveContract {
    fn pre(engine: &GameEngine, pos: &Position) -> Result<(), MoveError> {
        LegalMove::check(*pos, engine)
    }

    fn post(before: &GameEngine, after: &GameEngine) -> Result<(), MoveError> {
        let mut failures = Vec::new();

        let changed: Vec<(Square, Square)> = before
            .board()
            .squares()
            .iter()
            .zip(after.board().squares())
            .filter(|(b, a)| b != a)
            .map(|(b, a)| (*b, *a))
            .collect();
        match changed.as_slice() {
            [(Square::Empty, Square::Occupied(mark))] if *mark == before.turn() => {}
            _ => failures.push(format!(
                "Expected one empty square to take {}, found {} changes",
                before.turn(),
                changed.len()
            )),
        }

        if after.turn() != before.turn().opponent() {
            failures.push("Turn did not pass to the other mark".to_string());
        }

        if let Err(violations) = BoardInvariants::check_all(after) {
            failures.extend(violations.into_iter().map(|v| v.description));
        }

        if failures.is_empty() {
            Ok(())
        } else {
            let descriptions = failures.join("; ");
            warn!(%descriptions, "Move postcondition failed");
            Err(MoveError::InvariantViolation(format!(
                "Postcondition failed: {}",
                descriptions
            )))
        }
    }
}
