//! Turn invariant: the side to move follows from the marks on the board.

use super::Invariant;
use crate::{GameEngine, Mark};

/// Invariant: it is X's turn exactly when both marks have been placed
/// equally often.
///
/// The turn flips on every accepted move, including the one that ends
/// the game, so this holds in terminal states too.
pub struct TurnMatchesBoardInvariant;

impl Invariant<GameEngine> for TurnMatchesBoardInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let board = engine.board();
        let expected = if board.count(Mark::X) == board.count(Mark::O) {
            Mark::X
        } else {
            Mark::O
        };
        engine.turn() == expected
    }

    fn description() -> &'static str {
        "Turn matches the marks on the board"
    }
}
