//! tictactoe_timeline - terminal tic-tac-toe with time travel.

use anyhow::{Context, Result};
use clap::Parser;
use tictactoe_timeline::{
    Cli, Command, GameConfig, init_file_logging, init_stderr_logging, render_summary, replay,
    run_tui,
};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = GameConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;

    match cli.command.unwrap_or(Command::Play { reversed: false }) {
        Command::Play { reversed } => {
            let config = if reversed {
                config.with_history_sort_reversed(true)
            } else {
                config
            };
            init_file_logging(&config)?;
            info!(?config, "Configuration loaded");
            run_tui(&config)
        }
        Command::Replay {
            moves,
            step,
            reversed,
            json,
        } => {
            init_stderr_logging(&config);
            info!(?config, "Configuration loaded");
            info!(moves = moves.len(), "Replaying moves");

            let game = replay(&moves, step)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&game)?);
            } else {
                let reversed = reversed || *config.history_sort_reversed();
                print!("{}", render_summary(&game, reversed));
            }
            Ok(())
        }
    }
}
