//! First-class action types for tic-tac-toe.
//!
//! An accepted move is returned to the caller as a value so a front end
//! can log or display it without diffing the board.

use crate::{Mark, Position};
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a mark placed at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The mark that was placed.
    pub mark: Mark,
    /// The position where the mark was placed.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(mark: Mark, position: Position) -> Self {
        Self { mark, position }
    }

    /// Returns the mark placed by this move.
    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// Returns the position of this move.
    pub fn position(&self) -> Position {
        self.position
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.position.label())
    }
}

/// Reason a move was rejected.
///
/// None of these leave a trace on the game state.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The game is already won or drawn.
    #[display("Game is already over")]
    GameOver,

    /// The index does not name a square.
    #[display("Position {} out of bounds (must be 0-8)", _0)]
    OutOfBounds(usize),

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}

impl MoveError {
    /// Returns true for the rejections a player can trigger in normal play.
    pub fn is_illegal_move(&self) -> bool {
        matches!(self, MoveError::SquareOccupied(_) | MoveError::GameOver)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_display() {
        let mov = Move::new(Mark::O, Position::BottomCenter);
        assert_eq!(mov.to_string(), "O -> Bottom-center");
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            MoveError::SquareOccupied(Position::Center).to_string(),
            "Square Center is already occupied"
        );
        assert_eq!(
            MoveError::OutOfBounds(12).to_string(),
            "Position 12 out of bounds (must be 0-8)"
        );
        assert!(MoveError::GameOver.is_illegal_move());
        assert!(!MoveError::OutOfBounds(9).is_illegal_move());
    }
}
