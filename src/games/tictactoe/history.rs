//! Move history with time travel.
//!
//! A [`Game`] keeps every board snapshot since the start plus a pointer to
//! the step being shown. Playing from a past step discards the snapshots
//! after it; jumping only moves the pointer.

use super::action::MoveError;
use super::types::{Board, GameStatus, Player, Square};
use super::Position;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// One snapshot in the history: the board and the move that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, derive_new::new)]
pub struct HistoryEntry {
    /// Board after the move.
    board: Board,
    /// Where the move was played; `None` for the starting board.
    move_location: Option<Position>,
}

impl HistoryEntry {
    /// The empty starting board.
    pub fn start() -> Self {
        Self::new(Board::new(), None)
    }
}

/// Tic-tac-toe game with a navigable, append-only history.
///
/// Invariants:
/// - `history` is never empty and starts with the empty board
/// - `step < history.len()`
/// - entry `i` holds exactly `i` marks, alternating X and O
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Game {
    history: Vec<HistoryEntry>,
    step: usize,
}

impl Game {
    /// Creates a new game with X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![HistoryEntry::start()],
            step: 0,
        }
    }

    /// Plays a new game from the given positions.
    ///
    /// # Errors
    ///
    /// Returns the first rejected move.
    #[instrument]
    pub fn replay(positions: &[Position]) -> Result<Self, MoveError> {
        let mut game = Self::new();
        for pos in positions {
            game.play(*pos)?;
        }
        Ok(game)
    }

    /// Returns every snapshot, oldest first.
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Number of snapshots, including the starting board.
    pub fn len(&self) -> usize {
        self.history.len()
    }

    /// Always false: the starting board is never removed.
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// The step currently shown.
    pub fn step_number(&self) -> usize {
        self.step
    }

    /// The snapshot currently shown.
    pub fn current(&self) -> &HistoryEntry {
        // step < len holds for every constructed Game
        &self.history[self.step]
    }

    /// The board currently shown.
    pub fn board(&self) -> &Board {
        self.current().board()
    }

    /// Player to move at the current step: X on even steps, O on odd.
    pub fn next_player(&self) -> Player {
        if self.step % 2 == 0 {
            Player::X
        } else {
            Player::O
        }
    }

    /// Winner on the board currently shown.
    pub fn winner(&self) -> Option<Player> {
        self.board().winner()
    }

    /// Status line for the current step.
    pub fn status(&self) -> GameStatus {
        if let Some(winner) = self.winner() {
            GameStatus::Won(winner)
        } else if self.step == 9 {
            GameStatus::Draw
        } else {
            GameStatus::InProgress {
                next: self.next_player(),
            }
        }
    }

    /// Plays the current player's mark at `pos`.
    ///
    /// Snapshots after the current step are discarded first, so playing
    /// from a past step starts a new timeline.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] if the shown board already has a winner
    /// - [`MoveError::SquareOccupied`] if `pos` is taken
    ///
    /// The game is unchanged on error.
    #[instrument(skip(self), fields(step = self.step, player = %self.next_player()))]
    pub fn play(&mut self, pos: Position) -> Result<&HistoryEntry, MoveError> {
        let board = self.board();
        if board.winner().is_some() {
            warn!("Move rejected: game is over");
            return Err(MoveError::GameOver);
        }
        if !board.is_empty(pos) {
            warn!("Move rejected: square occupied");
            return Err(MoveError::SquareOccupied(pos));
        }

        let mut board = board.clone();
        board.set(pos, Square::Occupied(self.next_player()));

        let discarded = self.history.len() - (self.step + 1);
        if discarded > 0 {
            debug!(discarded, "Discarding future snapshots");
        }
        self.history.truncate(self.step + 1);
        self.history.push(HistoryEntry::new(board, Some(pos)));
        self.step = self.history.len() - 1;

        info!(step = self.step, status = %self.status(), "Move applied");
        Ok(self.current())
    }

    /// Shows the snapshot at `step` without changing the history.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::StepOutOfRange`] if `step` is not in the history.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, step: usize) -> Result<(), MoveError> {
        if step >= self.history.len() {
            return Err(MoveError::StepOutOfRange {
                step,
                len: self.history.len(),
            });
        }
        self.step = step;
        debug!(next = %self.next_player(), "Jumped to step");
        Ok(())
    }

    /// Starts over with an empty history.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        *self = Self::new();
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Position::*;

    #[test]
    fn test_new_game_has_start_entry() {
        let game = Game::new();
        assert_eq!(game.len(), 1);
        assert!(!game.is_empty());
        assert_eq!(game.step_number(), 0);
        assert_eq!(game.current(), &HistoryEntry::start());
        assert_eq!(game.next_player(), Player::X);
        assert_eq!(game.status(), GameStatus::InProgress { next: Player::X });
    }

    #[test]
    fn test_play_appends_snapshot_and_toggles_turn() {
        let mut game = Game::new();
        let entry = game.play(Center).expect("valid move").clone();

        assert_eq!(entry.move_location(), &Some(Center));
        assert_eq!(entry.board().get(Center), Square::Occupied(Player::X));
        assert_eq!(game.len(), 2);
        assert_eq!(game.step_number(), 1);
        assert_eq!(game.next_player(), Player::O);
        // The starting snapshot is untouched.
        assert!(game.history()[0].board().is_empty(Center));
    }

    #[test]
    fn test_occupied_square_rejected_without_change() {
        let mut game = Game::replay(&[Center]).expect("valid replay");
        let before = game.clone();

        assert_eq!(game.play(Center), Err(MoveError::SquareOccupied(Center)));
        assert_eq!(game, before);
    }

    #[test]
    fn test_move_after_win_rejected() {
        let mut game =
            Game::replay(&[TopLeft, Center, TopCenter, BottomLeft, TopRight]).expect("valid replay");
        assert_eq!(game.status(), GameStatus::Won(Player::X));

        let before = game.clone();
        assert_eq!(game.play(BottomRight), Err(MoveError::GameOver));
        assert_eq!(game, before);
    }

    #[test]
    fn test_jump_sets_turn_from_parity() {
        let mut game = Game::replay(&[Center, TopLeft, BottomRight]).expect("valid replay");
        assert_eq!(game.next_player(), Player::O);

        game.jump_to(1).expect("step in range");
        assert_eq!(game.next_player(), Player::O);
        game.jump_to(2).expect("step in range");
        assert_eq!(game.next_player(), Player::X);
        game.jump_to(0).expect("step in range");
        assert_eq!(game.next_player(), Player::X);
        assert_eq!(game.len(), 4);
    }

    #[test]
    fn test_jump_out_of_range() {
        let mut game = Game::new();
        assert_eq!(
            game.jump_to(1),
            Err(MoveError::StepOutOfRange { step: 1, len: 1 })
        );
        assert_eq!(game.step_number(), 0);
    }

    #[test]
    fn test_play_from_past_discards_future() {
        let mut game = Game::replay(&[Center, TopLeft, BottomRight]).expect("valid replay");
        game.jump_to(1).expect("step in range");

        game.play(TopRight).expect("valid move");

        assert_eq!(game.len(), 3);
        assert_eq!(game.step_number(), 2);
        assert_eq!(game.history()[2].move_location(), &Some(TopRight));
        assert_eq!(game.board().get(TopRight), Square::Occupied(Player::O));
        assert!(game.board().is_empty(TopLeft));
    }

    #[test]
    fn test_rejected_move_from_past_keeps_future() {
        let mut game = Game::replay(&[Center, TopLeft, BottomRight]).expect("valid replay");
        game.jump_to(1).expect("step in range");

        assert!(game.play(Center).is_err());
        assert_eq!(game.len(), 4);
        assert_eq!(game.step_number(), 1);
    }

    #[test]
    fn test_jump_back_before_win_allows_play() {
        let mut game =
            Game::replay(&[TopLeft, Center, TopCenter, BottomLeft, TopRight]).expect("valid replay");
        game.jump_to(4).expect("step in range");

        assert_eq!(game.status(), GameStatus::InProgress { next: Player::X });
        game.play(BottomRight).expect("valid move");
        assert_eq!(game.len(), 6);
    }

    #[test]
    fn test_draw_at_step_nine() {
        let game = Game::replay(&[
            TopLeft,
            Center,
            TopRight,
            TopCenter,
            MiddleLeft,
            MiddleRight,
            BottomCenter,
            BottomLeft,
            BottomRight,
        ])
        .expect("valid replay");
        assert_eq!(game.step_number(), 9);
        assert!(game.board().is_full());
        assert_eq!(game.status(), GameStatus::Draw);
    }

    #[test]
    fn test_win_on_last_square_beats_draw() {
        // X O X / O O X / O X X, X completes the right column last.
        let game = Game::replay(&[
            TopLeft,
            TopCenter,
            TopRight,
            MiddleLeft,
            MiddleRight,
            Center,
            BottomCenter,
            BottomLeft,
            BottomRight,
        ])
        .expect("valid replay");
        assert_eq!(game.step_number(), 9);
        assert_eq!(game.status(), GameStatus::Won(Player::X));
    }

    #[test]
    fn test_snapshots_alternate_marks() {
        let game = Game::replay(&[Center, TopLeft, BottomRight, TopRight]).expect("valid replay");
        let mut expected = Player::X;
        for (i, entry) in game.history().iter().enumerate() {
            assert_eq!(entry.board().marks(), i);
            if let Some(pos) = entry.move_location() {
                assert_eq!(entry.board().get(*pos), Square::Occupied(expected));
                expected = expected.opponent();
            }
        }
        assert!(!game.board().is_full());
    }

    #[test]
    fn test_restart() {
        let mut game = Game::replay(&[Center, TopLeft]).expect("valid replay");
        game.restart();
        assert_eq!(game, Game::new());
    }
}
