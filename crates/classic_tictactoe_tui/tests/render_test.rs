//! Render smoke tests against an in-memory terminal.

use classic_tictactoe_tui::{App, Input, ui};
use ratatui::{Terminal, backend::TestBackend, buffer::Buffer, style::Modifier};
use std::collections::BTreeSet;

fn render_buffer(app: &App) -> Buffer {
    let mut terminal = Terminal::new(TestBackend::new(60, 24)).expect("test terminal");
    terminal.draw(|f| ui::draw(f, app)).expect("draw");
    terminal.backend().buffer().clone()
}

fn render(app: &App) -> String {
    render_buffer(app)
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

fn play(moves: &[usize]) -> App {
    let mut app = App::new(true);
    for &index in moves {
        app.handle(Input::Place(index));
    }
    app
}

#[test]
fn test_fresh_game_shows_title_and_turn() {
    let screen = render(&App::new(true));
    assert!(screen.contains("TicTacToe Classic"));
    assert!(screen.contains("Current turn: X"));
    assert!(screen.contains("Reset Game"));
}

#[test]
fn test_win_is_announced() {
    let screen = render(&play(&[0, 4, 1, 5, 2]));
    assert!(screen.contains("Winner: X"));
}

#[test]
fn test_winning_line_is_highlighted() {
    let buffer = render_buffer(&play(&[0, 4, 1, 5, 2]));
    let area = buffer.area;

    let mut highlighted = Vec::new();
    let mut x_cells = 0;
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            let cell = &buffer[(x, y)];
            if cell.symbol() == "X" {
                x_cells += 1;
            }
            if cell.bg == ui::WIN_BACKGROUND {
                highlighted.push((x, y, cell.symbol().to_string()));
            }
        }
    }

    // Three X marks on the board plus the one in "Winner: X".
    assert_eq!(x_cells, 4);
    let marks: Vec<&str> = highlighted
        .iter()
        .map(|(_, _, s)| s.as_str())
        .filter(|s| !s.trim().is_empty())
        .collect();
    assert_eq!(marks, vec!["X", "X", "X"]);

    // Only the top row of the grid: three 13x3 cells sharing three lines.
    assert_eq!(highlighted.len(), 3 * 13 * 3);
    let rows: BTreeSet<u16> = highlighted.iter().map(|(_, y, _)| *y).collect();
    assert_eq!(rows.len(), 3);
}

#[test]
fn test_cursor_shown_only_while_running() {
    let reversed = |buffer: &Buffer| {
        buffer
            .content()
            .iter()
            .filter(|cell| cell.modifier.contains(Modifier::REVERSED))
            .count()
    };

    assert!(reversed(&render_buffer(&play(&[0, 4]))) > 0);
    assert_eq!(reversed(&render_buffer(&play(&[0, 4, 1, 5, 2]))), 0);
}

#[test]
fn test_draw_is_announced() {
    let mut app = App::new(false);
    for index in [0, 4, 8, 1, 7, 6, 2, 5, 3] {
        app.handle(Input::Place(index));
    }
    assert!(render(&app).contains("Game ended in a draw!"));
}

#[test]
fn test_tiny_terminal_does_not_panic() {
    let mut terminal = Terminal::new(TestBackend::new(10, 4)).expect("test terminal");
    let app = App::new(true);
    terminal.draw(|f| ui::draw(f, &app)).expect("draw");
}
