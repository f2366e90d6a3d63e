//! Command-line interface for tictactoe_timeline.

use crate::games::tictactoe::Position;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tic-tac-toe with move history navigation
#[derive(Parser, Debug)]
#[command(name = "tictactoe_timeline")]
#[command(about = "Terminal tic-tac-toe with time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Play {
        /// Show the move list newest first
        #[arg(long)]
        reversed: bool,
    },

    /// Replay a sequence of moves and print the result
    Replay {
        /// Moves in order, as keys 1-9 or labels such as `center`
        #[arg(required = true)]
        moves: Vec<Position>,

        /// History step to show after replaying (defaults to the last move)
        #[arg(long)]
        step: Option<usize>,

        /// Show the move list newest first
        #[arg(long)]
        reversed: bool,

        /// Print the history as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}
