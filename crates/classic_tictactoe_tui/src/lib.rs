//! Terminal front end for classic_tictactoe.
//!
//! Renders a [`classic_tictactoe::GameEngine`] and forwards key presses
//! to it. All game rules live in the engine crate.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod input;
mod logging;
mod play;
pub mod ui;

pub use app::App;
pub use cli::{Cli, Command};
pub use config::{ConfigError, TuiConfig};
pub use input::{Input, map_key, move_cursor};
pub use logging::{init_file, init_stderr};
pub use play::run_play;
