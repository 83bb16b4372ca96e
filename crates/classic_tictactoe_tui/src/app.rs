//! Application state and logic.

use crate::input::Input;
use classic_tictactoe::{GameEngine, Position};
use tracing::debug;

/// Main application state.
#[derive(Debug)]
pub struct App {
    engine: GameEngine,
    cursor: Position,
    show_indices: bool,
    quit: bool,
}

impl App {
    /// Creates a new application with a fresh game.
    pub fn new(show_indices: bool) -> Self {
        Self {
            engine: GameEngine::new(),
            cursor: Position::Center,
            show_indices,
            quit: false,
        }
    }

    /// Gets the current game.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Gets the cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Whether empty cells show their number.
    pub fn show_indices(&self) -> bool {
        self.show_indices
    }

    /// Whether the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Applies one input to the app.
    ///
    /// Illegal placements are forwarded to the engine like any other and
    /// simply leave the board as it was.
    pub fn handle(&mut self, input: Input) {
        debug!(?input, "Handling input");

        match input {
            Input::Cursor(pos) => self.cursor = pos,
            Input::Place(index) => {
                if self.engine.apply_move(index) {
                    if let Some(pos) = Position::from_index(index) {
                        self.cursor = pos;
                    }
                }
            }
            Input::Reset => self.engine.reset(),
            Input::Quit => self.quit = true,
            Input::Ignored => {}
        }
    }
}
