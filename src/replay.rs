//! Non-interactive replay of a move sequence.

use crate::games::tictactoe::{Game, MoveError, Position, move_list};
use derive_more::{Display, Error};
use tracing::{info, instrument};

/// A replay that could not be applied.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ReplayError {
    /// A move in the sequence was rejected.
    #[display("Move {index} ({position}) rejected")]
    Move {
        /// 1-based index of the move in the sequence.
        index: usize,
        /// Position the move targeted.
        position: Position,
        /// Why it was rejected.
        source: MoveError,
    },
    /// The requested step does not exist.
    #[display("{_0}")]
    Step(#[error(not(source))] MoveError),
}

/// Plays `moves` from a fresh game and optionally jumps to `step`.
#[instrument]
pub fn replay(moves: &[Position], step: Option<usize>) -> Result<Game, ReplayError> {
    let mut game = Game::new();
    for (i, position) in moves.iter().enumerate() {
        game.play(*position).map_err(|source| ReplayError::Move {
            index: i + 1,
            position: *position,
            source,
        })?;
    }
    if let Some(step) = step {
        game.jump_to(step).map_err(ReplayError::Step)?;
    }
    info!(steps = game.len() - 1, shown = game.step_number(), "Replay complete");
    Ok(game)
}

/// Text rendering: board, status line, then the move list.
///
/// `>` marks the step shown.
pub fn render_summary(game: &Game, reversed: bool) -> String {
    let mut out = game.board().display();
    out.push_str("\n\n");
    out.push_str(&game.status().to_string());
    out.push_str("\n\n");
    for item in move_list(game, reversed) {
        let marker = if *item.selected() { '>' } else { ' ' };
        out.push_str(&format!("{} {}\n", marker, item));
    }
    out
}
