//! List-level operations, including list reordering

use super::BoardStore;
use crate::types::{BoardId, List, ListId};

impl BoardStore {
    /// Append an empty list to a board. Returns the new list's id, or
    /// `None` when the board is unknown.
    pub fn create_list(&mut self, board_id: &BoardId, title: impl Into<String>) -> Option<ListId> {
        let board = self.find_board_mut(board_id)?;
        let list = List::new(title);
        let id = list.id.clone();
        board.lists.push(list);
        self.touch();
        Some(id)
    }

    /// Rename a list. No-op when board or list is unknown.
    pub fn update_list_title(
        &mut self,
        board_id: &BoardId,
        list_id: &ListId,
        title: impl Into<String>,
    ) {
        if let Some(list) = self
            .find_board_mut(board_id)
            .and_then(|b| b.find_list_mut(list_id))
        {
            list.title = title.into();
            self.touch();
        }
    }

    /// Recolor a list. No-op when board or list is unknown.
    pub fn update_list_background(
        &mut self,
        board_id: &BoardId,
        list_id: &ListId,
        color: impl Into<String>,
    ) {
        if let Some(list) = self
            .find_board_mut(board_id)
            .and_then(|b| b.find_list_mut(list_id))
        {
            list.background_color = Some(color.into());
            self.touch();
        }
    }

    /// Remove a list and, implicitly, all its cards.
    pub fn delete_list(&mut self, board_id: &BoardId, list_id: &ListId) {
        let Some(board) = self.find_board_mut(board_id) else {
            return;
        };
        let before = board.lists.len();
        board.lists.retain(|l| &l.id != list_id);
        if board.lists.len() != before {
            self.touch();
        }
    }

    /// Reorder a board's lists by position: remove at `source_index`,
    /// reinsert at `destination_index` in the shortened sequence.
    ///
    /// An out-of-range source index is a no-op; a destination index past
    /// the post-removal length appends at the end.
    pub fn move_list(&mut self, board_id: &BoardId, source_index: usize, destination_index: usize) {
        let Some(board) = self.find_board_mut(board_id) else {
            return;
        };
        if source_index >= board.lists.len() {
            return;
        }
        if source_index == destination_index {
            return;
        }

        let list = board.lists.remove(source_index);
        let insert_at = destination_index.min(board.lists.len());
        board.lists.insert(insert_at, list);
        self.touch();
    }
}
