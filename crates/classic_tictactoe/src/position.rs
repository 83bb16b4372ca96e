//! Named board positions.

use super::types::Board;
use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator, IntoStaticStr};
use tracing::instrument;

/// A position on the tic-tac-toe board (0-8, row-major).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, IntoStaticStr,
)]
pub enum Position {
    /// Top-left (position 0)
    #[strum(serialize = "Top-left")]
    TopLeft,
    /// Top-center (position 1)
    #[strum(serialize = "Top-center")]
    TopCenter,
    /// Top-right (position 2)
    #[strum(serialize = "Top-right")]
    TopRight,
    /// Middle-left (position 3)
    #[strum(serialize = "Middle-left")]
    MiddleLeft,
    /// Center (position 4)
    #[strum(serialize = "Center")]
    Center,
    /// Middle-right (position 5)
    #[strum(serialize = "Middle-right")]
    MiddleRight,
    /// Bottom-left (position 6)
    #[strum(serialize = "Bottom-left")]
    BottomLeft,
    /// Bottom-center (position 7)
    #[strum(serialize = "Bottom-center")]
    BottomCenter,
    /// Bottom-right (position 8)
    #[strum(serialize = "Bottom-right")]
    BottomRight,
}

impl Position {
    /// All 9 positions in row-major order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Get label for this position (for display).
    pub fn label(self) -> &'static str {
        self.into()
    }

    /// Converts position to board index (0-8).
    pub const fn to_index(self) -> usize {
        self as usize
    }

    /// Creates position from board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Row of this position (0-2, top to bottom).
    pub fn row(self) -> usize {
        self.to_index() / 3
    }

    /// Column of this position (0-2, left to right).
    pub fn col(self) -> usize {
        self.to_index() % 3
    }

    /// Creates position from row and column, `None` outside the grid.
    pub fn from_row_col(row: usize, col: usize) -> Option<Self> {
        if row < 3 && col < 3 {
            Self::from_index(row * 3 + col)
        } else {
            None
        }
    }

    /// Filters positions by board state - returns only empty squares.
    #[instrument(skip(board))]
    pub fn empty_on(board: &Board) -> Vec<Position> {
        Self::iter().filter(|pos| board.is_empty(*pos)).collect()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Mark, Square};

    #[test]
    fn test_index_conversion_is_row_major() {
        for (index, pos) in Position::ALL.iter().enumerate() {
            assert_eq!(pos.to_index(), index);
            assert_eq!(Position::from_index(index), Some(*pos));
        }
        assert_eq!(Position::from_index(9), None);
    }

    #[test]
    fn test_row_col() {
        assert_eq!(Position::MiddleRight.row(), 1);
        assert_eq!(Position::MiddleRight.col(), 2);
        assert_eq!(Position::from_row_col(2, 0), Some(Position::BottomLeft));
        assert_eq!(Position::from_row_col(3, 0), None);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Position::TopLeft.label(), "Top-left");
        assert_eq!(Position::Center.to_string(), "Center");
    }

    #[test]
    fn test_empty_on_skips_occupied() {
        let mut board = Board::new();
        board.set(Position::Center, Square::Occupied(Mark::X));
        let empty = Position::empty_on(&board);
        assert_eq!(empty.len(), 8);
        assert!(!empty.contains(&Position::Center));
    }
}
