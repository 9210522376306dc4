//! Terminal front end for the tic-tac-toe core.
//!
//! Renders the core's view model with ratatui and turns key presses into
//! session commands. Holds no game logic of its own.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod input;
mod ui;

pub use app::{App, Flow};
pub use cli::Cli;
pub use config::{ConfigError, TuiConfig};
pub use input::{Command, command_for, move_cursor};
pub use ui::draw;
