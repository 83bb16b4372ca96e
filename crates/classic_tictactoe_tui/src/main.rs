//! Classic Tic-Tac-Toe - terminal entry point.

use anyhow::Result;
use clap::Parser;
use classic_tictactoe_tui::{
    App, Cli, Command, TuiConfig, init_file, init_stderr, map_key, run_play, ui,
};
use crossterm::{
    cursor::Show,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::{debug, error, info, instrument};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = TuiConfig::load(cli.config.as_deref())?;

    match cli.command {
        Command::Tui => run_tui(&config),
        Command::Play { moves, json } => {
            init_stderr(&config);
            println!("{}", run_play(&moves, json)?);
            Ok(())
        }
    }
}

/// Run the interactive board until the user quits.
fn run_tui(config: &TuiConfig) -> Result<()> {
    init_file(config)?;
    info!("Starting Classic Tic-Tac-Toe TUI");

    let _guard = TerminalGuard::enter()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let res = run_app(&mut terminal, App::new(config.show_indices()));

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

/// Raw mode and the alternate screen for as long as the guard lives.
///
/// Restores the terminal on drop, including when setup fails halfway.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode()?;
        let guard = Self;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        debug!("Restoring terminal");
        let _ = disable_raw_mode();
        let mut stdout = io::stdout();
        let _ = execute!(stdout, LeaveAlternateScreen, Show);
    }
}

/// Draw, wait for one key, apply it; repeat.
#[instrument(skip_all)]
fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, mut app: App) -> Result<()> {
    while !app.should_quit() {
        terminal.draw(|f| ui::draw(f, &app))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle(map_key(app.cursor(), key.code));
        }
    }

    info!("Quit requested");
    Ok(())
}
