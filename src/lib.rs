//! Tic-tac-toe with move history navigation.
//!
//! Every move appends a board snapshot to the game history. Any earlier step
//! can be shown again, and playing from it discards the later snapshots.
//!
//! # Architecture
//!
//! - **Games**: board, win detection, history and move list
//! - **TUI**: ratatui front end (`play` command)
//! - **Replay**: non-interactive rendering of a move sequence
//!
//! # Example
//!
//! ```
//! use tictactoe_timeline::{Game, GameStatus, Player, Position};
//!
//! let mut game = Game::replay(&[Position::Center, Position::TopLeft]).unwrap();
//! game.jump_to(1).unwrap();
//! assert_eq!(game.status(), GameStatus::InProgress { next: Player::O });
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod cli;
mod config;
mod games;
mod logging;
mod replay;
mod tui;

// Crate-level exports - Command line
pub use cli::{Cli, Command};

// Crate-level exports - Configuration
pub use config::{ConfigError, DEFAULT_CONFIG_PATH, GameConfig};

// Crate-level exports - Logging
pub use logging::{init_file_logging, init_stderr_logging};

// Crate-level exports - Replay
pub use replay::{ReplayError, render_summary, replay};

// Crate-level exports - Terminal UI
pub use tui::{App, AppTransition, Focus, run_tui};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, Game, GameStatus, HistoryEntry, MoveError, MoveListItem, ParsePositionError, Player,
    Position, Square, move_list, rules,
};
