//! Balanced marks invariant: X never trails O and leads by at most one.

use super::Invariant;
use crate::{GameEngine, Mark};

/// Invariant: X count minus O count is 0 or 1.
///
/// X moves first and turns alternate, so any reachable board has
/// either equal counts or one extra X.
pub struct BalancedMarksInvariant;

impl Invariant<GameEngine> for BalancedMarksInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let x = engine.board().count(Mark::X);
        let o = engine.board().count(Mark::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X leads O by zero or one mark"
    }
}
