//! Command-line interface for classic_tictactoe.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Classic Tic-Tac-Toe - two players, one terminal
#[derive(Parser, Debug)]
#[command(name = "classic_tictactoe")]
#[command(about = "Classic two-player tic-tac-toe", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Tui,

    /// Apply a sequence of cell indices (0-8) and print the result
    Play {
        /// Cell indices in the order they are clicked
        #[arg(required = true)]
        moves: Vec<usize>,

        /// Print the final game as JSON
        #[arg(long)]
        json: bool,
    },
}
