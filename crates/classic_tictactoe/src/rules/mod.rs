//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating game state.
//! Rules are separated from board storage so the engine and the
//! contract checks can share one definition of "won" and "drawn".

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, WinningLine, find_winning_line};

use crate::{Board, Mark};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    Running,
    /// Game ended with `winner` holding `line`.
    Won {
        /// Mark that completed the line.
        winner: Mark,
        /// The completed line.
        line: WinningLine,
    },
    /// Board is full with no completed line.
    Draw,
}

impl GameStatus {
    /// Returns true while moves are still accepted.
    pub fn is_running(&self) -> bool {
        matches!(self, GameStatus::Running)
    }

    /// Returns the winning mark, if any.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            GameStatus::Won { winner, .. } => Some(*winner),
            _ => None,
        }
    }

    /// Returns the winning line, if any.
    pub fn line(&self) -> Option<WinningLine> {
        match self {
            GameStatus::Won { line, .. } => Some(*line),
            _ => None,
        }
    }
}

/// Derives the game status from a board.
///
/// A completed line takes precedence over a full board, so a move that
/// fills the last square and completes a line is a win.
#[instrument(skip(board))]
pub fn evaluate_status(board: &Board) -> GameStatus {
    if let Some((winner, line)) = find_winning_line(board) {
        GameStatus::Won { winner, line }
    } else if is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::Running
    }
}
