//! Move errors for tic-tac-toe.

use super::Position;

/// Error that can occur when playing a move or navigating history.
///
/// A rejected move leaves the game exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(#[error(not(source))] Position),

    /// The board shown already has a winner.
    #[display("Game is already over")]
    GameOver,

    /// The requested step is not in the history.
    #[display("Step {step} is out of range (history has {len} entries)")]
    StepOutOfRange {
        /// Requested step.
        step: usize,
        /// Number of history entries.
        len: usize,
    },
}
