//! Keyboard mapping for the interactive board.

use classic_tictactoe::Position;
use crossterm::event::KeyCode;

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Move the cursor to a new position.
    Cursor(Position),
    /// Place a mark at the given index.
    Place(usize),
    /// Start over.
    Reset,
    /// Leave the app.
    Quit,
    /// Key has no binding.
    Ignored,
}

/// Maps a key press to an input, given the cursor position.
///
/// Digits 1-9 address cells 0-8 directly.
pub fn map_key(cursor: Position, key: KeyCode) -> Input {
    match key {
        KeyCode::Char('q') | KeyCode::Esc => Input::Quit,
        KeyCode::Char('r') => Input::Reset,
        KeyCode::Enter | KeyCode::Char(' ') => Input::Place(cursor.to_index()),
        KeyCode::Char(c @ '1'..='9') => Input::Place(c as usize - '1' as usize),
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
            Input::Cursor(move_cursor(cursor, key))
        }
        _ => Input::Ignored,
    }
}

/// Moves cursor based on arrow keys, stopping at the edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let target = match key {
        KeyCode::Up => row.checked_sub(1).map(|r| (r, col)),
        KeyCode::Down => Some((row + 1, col)),
        KeyCode::Left => col.checked_sub(1).map(|c| (row, c)),
        KeyCode::Right => Some((row, col + 1)),
        _ => None,
    };
    target
        .and_then(|(r, c)| Position::from_row_col(r, c))
        .unwrap_or(cursor)
}
