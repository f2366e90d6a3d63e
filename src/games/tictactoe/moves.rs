//! Move list view model.

use super::Position;
use super::history::Game;
use derive_getters::Getters;
use serde::Serialize;
use tracing::instrument;

/// One row of the move list: a link back to a step in the history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct MoveListItem {
    /// History step this item jumps to.
    step: usize,
    /// `Go to game start` or `Go to move #n`.
    description: String,
    /// Where the move at this step was played.
    location: Option<Position>,
    /// True for the step currently shown.
    selected: bool,
}

impl MoveListItem {
    /// Coordinates suffix, e.g. ` - (2, 3)`; empty for the starting board.
    pub fn location_label(&self) -> String {
        self.location
            .map(|pos| format!(" - ({}, {})", pos.row(), pos.column()))
            .unwrap_or_default()
    }
}

impl std::fmt::Display for MoveListItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.description, self.location_label())
    }
}

/// Builds the move list for `game`, newest first when `reversed`.
#[instrument(skip(game), fields(len = game.len()))]
pub fn move_list(game: &Game, reversed: bool) -> Vec<MoveListItem> {
    let mut items: Vec<MoveListItem> = game
        .history()
        .iter()
        .enumerate()
        .map(|(step, entry)| MoveListItem {
            step,
            description: if step == 0 {
                "Go to game start".to_string()
            } else {
                format!("Go to move #{}", step)
            },
            location: *entry.move_location(),
            selected: step == game.step_number(),
        })
        .collect();

    if reversed {
        items.reverse();
    }
    items
}
