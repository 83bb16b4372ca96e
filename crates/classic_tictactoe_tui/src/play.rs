//! Scripted, non-interactive play.

use anyhow::{Context, Result};
use classic_tictactoe::GameEngine;
use tracing::{info, instrument, warn};

/// Clicks `moves` in order on a fresh game and renders the outcome.
///
/// Rejected clicks are logged and skipped, exactly as the interactive
/// board ignores them.
#[instrument]
pub fn run_play(moves: &[usize], json: bool) -> Result<String> {
    let mut engine = GameEngine::new();

    for &index in moves {
        if let Err(e) = engine.try_move(index) {
            warn!(index, error = %e, "Skipping rejected move");
        }
    }
    info!(label = %engine.status_label(), "Scripted game finished");

    if json {
        serde_json::to_string_pretty(&engine.snapshot()).context("Failed to serialize game")
    } else {
        Ok(format!("{}\n\n{}", engine.board().display(), engine.status_label()))
    }
}
