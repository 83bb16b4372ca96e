//! Tic-tac-toe board rendering.

use super::{ACCENT, MUTED, PRIMARY, SECONDARY, WIN_BACKGROUND};
use crate::app::App;
use classic_tictactoe::{Mark, Position, Square};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::Paragraph,
};

/// Renders the 3x3 grid, highlighting the cursor and any winning line.
pub fn render_board(frame: &mut Frame, area: Rect, app: &App) {
    let board_area = center_rect(area, 41, 11);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for row in 0..3 {
        render_row(frame, rows[row * 2], app, row);
        if row < 2 {
            render_separator(frame, rows[row * 2 + 1]);
        }
    }
}

fn render_row(frame: &mut Frame, area: Rect, app: &App, row: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(13),
            Constraint::Length(1),
            Constraint::Length(13),
            Constraint::Length(1),
            Constraint::Length(13),
        ])
        .split(area);

    for col in 0..3 {
        if let Some(pos) = Position::from_row_col(row, col) {
            render_cell(frame, cols[col * 2], app, pos);
        }
        if col < 2 {
            render_separator_vertical(frame, cols[col * 2 + 1]);
        }
    }
}

fn render_cell(frame: &mut Frame, area: Rect, app: &App, pos: Position) {
    let engine = app.engine();
    let winning = engine.winning_line().is_some_and(|line| line.contains(pos));

    let (symbol, mut style) = match engine.board().get(pos) {
        Square::Empty if app.show_indices() => (
            (pos.to_index() + 1).to_string(),
            Style::default().fg(MUTED),
        ),
        Square::Empty => (String::new(), Style::default().fg(MUTED)),
        Square::Occupied(Mark::X) => ("X".to_string(), Style::default().fg(SECONDARY)),
        Square::Occupied(Mark::O) => ("O".to_string(), Style::default().fg(ACCENT)),
    };

    style = if winning {
        style.bg(WIN_BACKGROUND).add_modifier(Modifier::BOLD)
    } else {
        style.bg(PRIMARY)
    };
    if pos == app.cursor() && !engine.is_over() {
        style = style.add_modifier(Modifier::REVERSED);
    }

    // Vertically center the symbol in the three-line cell.
    let text = format!("\n{}\n", symbol);
    let paragraph = Paragraph::new(text).style(style).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn render_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize)).style(Style::default().fg(MUTED));
    frame.render_widget(sep, area);
}

fn render_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│\n│\n│")
        .style(Style::default().fg(MUTED))
        .alignment(Alignment::Center);
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
