//! The mutable game engine a front end owns.

use crate::contracts::{Contract, MoveContract};
use crate::{
    Board, GameStatus, Mark, Move, MoveError, Position, Square, WinningLine, evaluate_status,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Tic-tac-toe game engine.
///
/// Holds the board, the mark to move and the status derived from the
/// board. Every accepted move replaces all three at once; a rejected
/// move touches none of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEngine {
    pub(crate) board: Board,
    pub(crate) turn: Mark,
    pub(crate) status: GameStatus,
}

impl GameEngine {
    /// Creates a new game: empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Mark::X,
            status: GameStatus::Running,
        }
    }

    /// Places the current mark at `index` (0-8), ignoring illegal moves.
    ///
    /// Returns whether the move was accepted. A rejected move (square
    /// taken, game over, index out of range) leaves the game unchanged.
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, index: usize) -> bool {
        match self.try_move(index) {
            Ok(_) => true,
            Err(e) => {
                debug!(error = %e, "Move ignored");
                false
            }
        }
    }

    /// Places the current mark at `index` (0-8).
    ///
    /// # Errors
    ///
    /// - [`MoveError::OutOfBounds`] if `index` is not a square
    /// - [`MoveError::GameOver`] if the game is won or drawn
    /// - [`MoveError::SquareOccupied`] if the square is taken
    /// - [`MoveError::InvariantViolation`] if the postcondition fails
    ///   (debug builds only)
    #[instrument(skip(self), fields(turn = %self.turn))]
    pub fn try_move(&mut self, index: usize) -> Result<Move, MoveError> {
        let pos = Position::from_index(index).ok_or(MoveError::OutOfBounds(index))?;
        MoveContract::pre(self, &pos)?;

        let mark = self.turn;
        let mut board = self.board;
        board.set(pos, Square::Occupied(mark));
        let next = Self {
            board,
            turn: mark.opponent(),
            status: evaluate_status(&board),
        };

        #[cfg(debug_assertions)]
        MoveContract::post(self, &next)?;

        *self = next;

        match self.status {
            GameStatus::Running => debug!(%mark, position = %pos, "Move applied"),
            GameStatus::Won { winner, line } => {
                info!(%winner, line = ?line.indices(), "Game won")
            }
            GameStatus::Draw => info!("Game ended in a draw"),
        }

        Ok(Move::new(mark, pos))
    }

    /// Returns the game to its initial state, whatever state it is in.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!(status = ?self.status, "Resetting game");
        *self = Self::new();
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark that moves next.
    pub fn turn(&self) -> Mark {
        self.turn
    }

    /// Returns the game status.
    pub fn status(&self) -> &GameStatus {
        &self.status
    }

    /// Returns the completed line once the game is won.
    pub fn winning_line(&self) -> Option<WinningLine> {
        self.status.line()
    }

    /// Returns the winner once the game is won.
    pub fn winner(&self) -> Option<Mark> {
        self.status.winner()
    }

    /// Returns true once the game is won or drawn.
    pub fn is_over(&self) -> bool {
        !self.status.is_running()
    }

    /// Positions that would accept a move right now.
    pub fn available_positions(&self) -> Vec<Position> {
        if self.is_over() {
            Vec::new()
        } else {
            Position::empty_on(&self.board)
        }
    }

    /// One-line, human-readable description of the game status.
    pub fn status_label(&self) -> String {
        match self.status {
            GameStatus::Running => format!("Current turn: {}", self.turn),
            GameStatus::Won { winner, .. } => format!("Winner: {}", winner),
            GameStatus::Draw => "Game ended in a draw!".to_string(),
        }
    }

    /// Copies out everything a front end renders.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: *self.board.squares(),
            turn: self.turn,
            status: self.status,
            winning_line: self
                .winning_line()
                .map(|line| line.indices().to_vec())
                .unwrap_or_default(),
            label: self.status_label(),
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Serializable view of a game, as read by a front end after each input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Squares in row-major order.
    pub board: [Square; 9],
    /// Mark that moves next.
    pub turn: Mark,
    /// Game status.
    pub status: GameStatus,
    /// Indices of the winning line, empty unless won.
    pub winning_line: Vec<usize>,
    /// Status label.
    pub label: String,
}
