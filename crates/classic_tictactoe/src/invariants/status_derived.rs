//! Status invariant: the stored status is exactly what the board implies.

use super::Invariant;
use crate::{GameEngine, evaluate_status};

/// Invariant: status equals `evaluate_status(board)`.
pub struct StatusDerivedInvariant;

impl Invariant<GameEngine> for StatusDerivedInvariant {
    fn holds(engine: &GameEngine) -> bool {
        *engine.status() == evaluate_status(engine.board())
    }

    fn description() -> &'static str {
        "Status is derived from the board"
    }
}
