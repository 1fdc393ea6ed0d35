//! Command-line interface for the tictactoe binary.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Settings file (TOML). Optional unless given explicitly.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log file for the interactive game
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Label for the first player's mark
    #[arg(long, global = true)]
    pub x_label: Option<String>,

    /// Label for the second player's mark
    #[arg(long, global = true)]
    pub o_label: Option<String>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq, Default)]
pub enum Command {
    /// Play interactively in the terminal
    #[default]
    Play,

    /// Apply cell numbers in order and print the resulting board
    Replay {
        /// Cell numbers 1-9, row-major from the top-left
        #[arg(value_parser = clap::value_parser!(u8).range(1..=9))]
        moves: Vec<u8>,

        /// Print a JSON snapshot instead of the board
        #[arg(long)]
        json: bool,
    },
}
