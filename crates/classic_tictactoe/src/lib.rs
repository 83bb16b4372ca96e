//! Classic tic-tac-toe game engine.
//!
//! The crate owns the game state of a single 3x3 board and everything
//! derived from it. A front end drives it with two inputs and reads the
//! result back after each one.
//!
//! # Architecture
//!
//! - **Types**: marks, squares and the board
//! - **Rules**: pure win/draw evaluation over a board
//! - **Contracts**: pre/postconditions wrapped around every move
//! - **Engine**: the mutable [`GameEngine`] a front end owns
//!
//! # Example
//!
//! ```
//! use classic_tictactoe::{GameEngine, GameStatus, Mark};
//!
//! let mut engine = GameEngine::new();
//! for index in [0, 4, 1, 5, 2] {
//!     engine.apply_move(index);
//! }
//!
//! assert!(matches!(engine.status(), GameStatus::Won { winner: Mark::X, .. }));
//! assert_eq!(engine.status_label(), "Winner: X");
//!
//! engine.reset();
//! assert_eq!(engine.status_label(), "Current turn: X");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod engine;
mod invariants;
mod position;
mod rules;
mod types;

// Crate-level exports - Domain types
pub use position::Position;
pub use types::{Board, Mark, Square};

// Crate-level exports - Rules
pub use rules::{
    GameStatus, LINES, WinningLine, evaluate_status, find_winning_line, is_draw, is_full,
};

// Crate-level exports - Actions and errors
pub use action::{Move, MoveError};

// Crate-level exports - Verification
pub use contracts::{Contract, LegalMove, MoveContract};
pub use invariants::{
    BalancedMarksInvariant, BoardInvariants, Invariant, InvariantSet, InvariantViolation,
    StatusDerivedInvariant, TurnMatchesBoardInvariant,
};

// Crate-level exports - Engine
pub use engine::{GameEngine, GameSnapshot};
