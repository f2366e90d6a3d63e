//! Application state and key handling.

use crate::GameConfig;
use crate::games::tictactoe::{Game, MoveListItem, Position, move_list};
use crossterm::event::{KeyCode, KeyEvent};
use tracing::{debug, info, instrument, warn};

use super::input::move_cursor;

/// Pane receiving navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The 3x3 board.
    #[default]
    Board,
    /// The move list.
    Moves,
}

impl Focus {
    /// Switches to the other pane.
    pub fn toggle(self) -> Self {
        match self {
            Self::Board => Self::Moves,
            Self::Moves => Self::Board,
        }
    }
}

/// What the event loop should do after a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppTransition {
    /// Keep running.
    Stay,
    /// Exit the application.
    Quit,
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    game: Game,
    cursor: Position,
    focus: Focus,
    selected_step: usize,
    history_sort_reversed: bool,
    message: Option<String>,
}

impl App {
    /// Creates a new application.
    #[instrument(skip(config))]
    pub fn new(config: &GameConfig) -> Self {
        Self {
            game: Game::new(),
            cursor: Position::Center,
            focus: Focus::default(),
            selected_step: 0,
            history_sort_reversed: *config.history_sort_reversed(),
            message: None,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Focused pane.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Step highlighted in the move list.
    pub fn selected_step(&self) -> usize {
        self.selected_step
    }

    /// True when the move list shows the newest move first.
    pub fn history_sort_reversed(&self) -> bool {
        self.history_sort_reversed
    }

    /// Feedback from the last action, if any.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Move list in display order.
    pub fn moves(&self) -> Vec<MoveListItem> {
        move_list(&self.game, self.history_sort_reversed)
    }

    /// Handles a key press.
    #[instrument(skip(self), fields(focus = ?self.focus))]
    pub fn handle_key(&mut self, key: KeyEvent) -> AppTransition {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                info!("User quit");
                return AppTransition::Quit;
            }
            KeyCode::Tab => {
                self.focus = self.focus.toggle();
                self.selected_step = self.game.step_number();
            }
            KeyCode::Char('s') | KeyCode::Char('S') => self.toggle_history_sort(),
            KeyCode::Char('r') | KeyCode::Char('R') => self.restart(),
            code => match self.focus {
                Focus::Board => self.handle_board_key(code),
                Focus::Moves => self.handle_moves_key(code),
            },
        }
        AppTransition::Stay
    }

    fn handle_board_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, code);
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.play(self.cursor),
            KeyCode::Char(c) => {
                if let Some(pos) = Position::from_key(c) {
                    self.cursor = pos;
                    self.play(pos);
                }
            }
            _ => {}
        }
    }

    fn handle_moves_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Up => self.select_previous(),
            KeyCode::Down => self.select_next(),
            KeyCode::Enter | KeyCode::Char(' ') => self.jump_to(self.selected_step),
            _ => {}
        }
    }

    /// Plays the current player's mark at `pos`.
    #[instrument(skip(self))]
    pub fn play(&mut self, pos: Position) {
        let player = self.game.next_player();
        match self.game.play(pos) {
            Ok(_) => {
                debug!(%player, %pos, "Move applied to UI state");
                self.message = Some(format!("{} played {}", player, pos.label()));
            }
            Err(e) => {
                warn!(error = %e, "Move ignored");
                self.message = Some(e.to_string());
            }
        }
        self.selected_step = self.game.step_number();
    }

    /// Shows the board at `step`.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, step: usize) {
        match self.game.jump_to(step) {
            Ok(()) => {
                self.selected_step = step;
                self.message = Some(if step == 0 {
                    "Showing game start".to_string()
                } else {
                    format!("Showing move #{}", step)
                });
            }
            Err(e) => {
                warn!(error = %e, "Jump ignored");
                self.message = Some(e.to_string());
            }
        }
    }

    /// Flips the move list order.
    #[instrument(skip(self))]
    pub fn toggle_history_sort(&mut self) {
        self.history_sort_reversed = !self.history_sort_reversed;
        debug!(reversed = self.history_sort_reversed, "Toggled history sort");
    }

    /// Restarts the game.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.game.restart();
        self.cursor = Position::Center;
        self.selected_step = 0;
        self.message = Some("Game restarted. Player X's turn.".to_string());
    }

    /// Index of the selected step within [`App::moves`].
    pub fn selected_index(&self) -> usize {
        if self.history_sort_reversed {
            self.game.len() - 1 - self.selected_step
        } else {
            self.selected_step
        }
    }

    fn select_previous(&mut self) {
        let count = self.game.len();
        let i = match self.selected_index() {
            i if i > 0 => i - 1,
            _ => count - 1,
        };
        self.select_index(i);
    }

    fn select_next(&mut self) {
        let count = self.game.len();
        self.select_index((self.selected_index() + 1) % count);
    }

    fn select_index(&mut self, index: usize) {
        self.selected_step = if self.history_sort_reversed {
            self.game.len() - 1 - index
        } else {
            index
        };
    }
}
