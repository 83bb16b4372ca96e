//! Draw detection logic for tic-tac-toe.

use super::win::find_winning_line;
use crate::Board;
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.filled() == 9
}

/// Checks if the game is a draw.
///
/// A draw occurs when the board is full and there is no winner.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && find_winning_line(board).is_none()
}
