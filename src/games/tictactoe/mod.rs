//! Tic-tac-toe with a navigable move history.

mod action;
mod history;
mod moves;
mod position;
pub mod rules;
mod types;

pub use action::MoveError;
pub use history::{Game, HistoryEntry};
pub use moves::{MoveListItem, move_list};
pub use position::{ParsePositionError, Position};
pub use types::{Board, GameStatus, Player, Square};
