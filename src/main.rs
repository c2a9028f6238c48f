//! tictactoe_history - unified CLI
//!
//! Interactive terminal play or scripted replay of a tic-tac-toe game.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use tictactoe_history::{
    AppConfig, GameView, LogTarget, init_tracing, parse_script, play_script, run_tui,
};
use tracing::{info, instrument};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load {}", cli.config.display()))?;

    // Initialize tracing before dispatch so command spans are recorded
    let target = match cli.command {
        Command::Tui => LogTarget::File,
        Command::Replay { .. } => LogTarget::Stderr,
    };
    init_tracing(&config, target)?;

    match cli.command {
        Command::Tui => run_tui(&config),
        Command::Replay { actions, json } => run_replay(&config, &actions, json),
    }
}

/// Run a scripted game and print the final view
#[instrument(skip_all, fields(count = actions.len(), json = json))]
fn run_replay(config: &AppConfig, actions: &[String], json: bool) -> Result<()> {
    info!("Replaying scripted game");

    let actions = parse_script(actions)?;
    let game = play_script(&actions, *config.initial_order())?;
    let view = GameView::from_game(&game);

    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print!("{view}");
    }

    Ok(())
}
