//! Board-level operations

use super::BoardStore;
use crate::defaults;
use crate::types::{Board, BoardId};

impl BoardStore {
    /// Select a board unconditionally.
    ///
    /// No existence check: the caller is expected to pass an id it just
    /// observed. A stale selection simply makes `active_board()` return
    /// `None`.
    pub fn set_active_board(&mut self, id: BoardId) {
        if self.active_board.as_ref() == Some(&id) {
            return;
        }
        self.active_board = Some(id);
        self.touch();
    }

    /// Append a new board with the fixed three-list starter template and
    /// select it. Returns the new board's id.
    pub fn create_board(&mut self, title: impl Into<String>) -> BoardId {
        let board = Board::new(title)
            .with_background_color(defaults::DEFAULT_BOARD_COLOR)
            .with_lists(defaults::starter_lists());
        let id = board.id.clone();

        self.boards.push(board);
        self.active_board = Some(id.clone());
        self.touch();
        id
    }

    /// Rename a board. No-op when the id is unknown.
    pub fn update_board_title(&mut self, id: &BoardId, title: impl Into<String>) {
        if let Some(board) = self.find_board_mut(id) {
            board.title = title.into();
            self.touch();
        }
    }

    /// Recolor a board. No-op when the id is unknown.
    pub fn update_board_background(&mut self, id: &BoardId, color: impl Into<String>) {
        if let Some(board) = self.find_board_mut(id) {
            board.background_color = Some(color.into());
            self.touch();
        }
    }

    /// Remove a board. If the removed board was selected, the first
    /// remaining board becomes active, or none when the store is empty.
    pub fn delete_board(&mut self, id: &BoardId) {
        let before = self.boards.len();
        self.boards.retain(|b| &b.id != id);
        if self.boards.len() == before {
            return;
        }

        if self.active_board.as_ref() == Some(id) {
            self.active_board = self.boards.first().map(|b| b.id.clone());
        }
        self.touch();
    }
}
