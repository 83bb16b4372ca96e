//! Stateless UI rendering for the interactive board.

mod board;

pub use board::render_board;

use crate::app::App;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Page and grid background.
pub const PRIMARY: Color = Color::Rgb(0xff, 0xff, 0xff);
/// X marks and body text.
pub const SECONDARY: Color = Color::Rgb(0x22, 0x22, 0x22);
/// O marks, the winning line and the reset hint.
pub const ACCENT: Color = Color::Rgb(0x4c, 0xaf, 0x50);
/// Background of winning cells.
pub const WIN_BACKGROUND: Color = Color::Rgb(0xe8, 0xff, 0xe8);
/// Cell numbers and separators.
pub const MUTED: Color = Color::Rgb(0xbb, 0xbb, 0xbb);
/// Status text while no one has won.
pub const NEUTRAL: Color = Color::Rgb(0x33, 0x33, 0x33);

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().style(Style::default().bg(PRIMARY)), area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(3), // Status
            Constraint::Min(11),   // Board
            Constraint::Length(3), // Help
        ])
        .split(area);

    let title = Paragraph::new("TicTacToe Classic")
        .style(Style::default().fg(SECONDARY).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM).border_style(Style::default().fg(MUTED)));
    frame.render_widget(title, chunks[0]);

    let engine = app.engine();
    let status_color = match engine.winner() {
        Some(classic_tictactoe::Mark::X) => SECONDARY,
        Some(classic_tictactoe::Mark::O) => ACCENT,
        None => NEUTRAL,
    };
    let status = Paragraph::new(engine.status_label())
        .style(Style::default().fg(status_color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(status, chunks[1]);

    render_board(frame, chunks[2], app);

    let help = Paragraph::new(Line::from(vec![
        Span::styled("←↑↓→", Style::default().fg(SECONDARY)),
        Span::styled(" move  ", Style::default().fg(MUTED)),
        Span::styled("Enter/1-9", Style::default().fg(SECONDARY)),
        Span::styled(" place  ", Style::default().fg(MUTED)),
        Span::styled("r", Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)),
        Span::styled(" Reset Game  ", Style::default().fg(MUTED)),
        Span::styled("q", Style::default().fg(SECONDARY)),
        Span::styled(" quit", Style::default().fg(MUTED)),
    ]))
    .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}
