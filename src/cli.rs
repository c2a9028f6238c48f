//! Command-line interface for tictactoe_history.

use clap::{Parser, Subcommand};

/// Tic-tac-toe with move history and time travel
#[derive(Parser, Debug)]
#[command(name = "tictactoe_history")]
#[command(about = "Tic-tac-toe with a navigable move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults apply if it does not exist)
    #[arg(short, long, global = true, default_value = "tictactoe.toml")]
    pub config: std::path::PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Tui,

    /// Apply a sequence of actions to a new game and print the result
    Replay {
        /// Actions: 0-8 or a cell name (center, top-left, ...) places a mark, jump:N travels to step N, toggle flips the move list
        #[arg(required = true)]
        actions: Vec<String>,

        /// Print the final view as JSON
        #[arg(long)]
        json: bool,
    },
}
