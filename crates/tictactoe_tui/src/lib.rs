//! Terminal front end for two-player tic-tac-toe.
//!
//! - **app**: owns the game and turns key presses and clicks into moves
//! - **ui**: draws the board, status line, and key help with ratatui
//! - **replay**: headless play from a list of cell numbers
//! - **config**: settings file plus command-line overrides
//! - **terminal**: raw mode and alternate screen setup, restored on every exit path

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod app;
pub mod cli;
pub mod config;
pub mod input;
pub mod replay;
pub mod terminal;
pub mod ui;

pub use app::App;
pub use cli::{Cli, Command};
pub use config::{ConfigError, DEFAULT_CONFIG_PATH, LogSettings, Settings};
pub use input::Action;
pub use replay::{Replay, ReplaySummary};
