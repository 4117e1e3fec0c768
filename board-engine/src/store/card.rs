//! Card-level operations: CRUD, labels, and the move/reorder algorithm

use super::BoardStore;
use crate::types::{BoardId, Card, CardId, CardPatch, Label, LabelId, ListId};

impl BoardStore {
    /// Append a new card (no description, no labels) to a list. Returns
    /// the new card's id, or `None` when board or list is unknown.
    pub fn create_card(
        &mut self,
        board_id: &BoardId,
        list_id: &ListId,
        title: impl Into<String>,
    ) -> Option<CardId> {
        let list = self
            .find_board_mut(board_id)
            .and_then(|b| b.find_list_mut(list_id))?;
        let card = Card::new(title);
        let id = card.id.clone();
        list.cards.push(card);
        self.touch();
        Some(id)
    }

    /// Merge a partial update into a card. Unspecified fields are left
    /// unchanged; `id` and `created_at` are not patchable at all.
    pub fn update_card(
        &mut self,
        board_id: &BoardId,
        list_id: &ListId,
        card_id: &CardId,
        patch: CardPatch,
    ) {
        if let Some(card) = self.find_card_mut(board_id, list_id, card_id) {
            card.apply(patch);
            self.touch();
        }
    }

    /// Recolor a card. Equivalent to `update_card` restricted to the
    /// background color.
    pub fn update_card_background(
        &mut self,
        board_id: &BoardId,
        list_id: &ListId,
        card_id: &CardId,
        color: impl Into<String>,
    ) {
        self.update_card(
            board_id,
            list_id,
            card_id,
            CardPatch::new().with_background_color(color),
        );
    }

    /// Remove a card from its list.
    pub fn delete_card(&mut self, board_id: &BoardId, list_id: &ListId, card_id: &CardId) {
        let Some(list) = self
            .find_board_mut(board_id)
            .and_then(|b| b.find_list_mut(list_id))
        else {
            return;
        };
        let before = list.cards.len();
        list.cards.retain(|c| &c.id != card_id);
        if list.cards.len() != before {
            self.touch();
        }
    }

    /// Attach a label to a card. Idempotent on the label id: a second
    /// attachment with the same id is ignored.
    pub fn add_label_to_card(
        &mut self,
        board_id: &BoardId,
        list_id: &ListId,
        card_id: &CardId,
        label: Label,
    ) {
        let Some(card) = self.find_card_mut(board_id, list_id, card_id) else {
            return;
        };
        if card.has_label(&label.id) {
            tracing::debug!("label {} already attached to card {}", label.id, card_id);
            return;
        }
        card.labels.push(label);
        self.touch();
    }

    /// Detach all labels with the given id from a card.
    pub fn remove_label_from_card(
        &mut self,
        board_id: &BoardId,
        list_id: &ListId,
        card_id: &CardId,
        label_id: &LabelId,
    ) {
        let Some(card) = self.find_card_mut(board_id, list_id, card_id) else {
            return;
        };
        let before = card.labels.len();
        card.labels.retain(|l| &l.id != label_id);
        if card.labels.len() != before {
            self.touch();
        }
    }

    /// Move a card between positions and possibly between lists.
    ///
    /// Splice-out-then-splice-in: the card at `source_index` is removed
    /// from the source list, then reinserted at `destination_index` - for
    /// a same-list move that index is interpreted against the already
    /// shortened sequence, not swapped. A destination index past the end
    /// appends; an out-of-range source index is a no-op, as is an
    /// unresolvable board or list id. The total card count across the
    /// board is always preserved.
    pub fn move_card(
        &mut self,
        board_id: &BoardId,
        source_list_id: &ListId,
        destination_list_id: &ListId,
        source_index: usize,
        destination_index: usize,
    ) {
        let Some(board) = self.find_board_mut(board_id) else {
            return;
        };
        let (Some(src), Some(dst)) = (
            board.list_index(source_list_id),
            board.list_index(destination_list_id),
        ) else {
            return;
        };
        if source_index >= board.lists[src].cards.len() {
            return;
        }

        let card = board.lists[src].cards.remove(source_index);
        let target = if src == dst { src } else { dst };
        let insert_at = destination_index.min(board.lists[target].cards.len());
        board.lists[target].cards.insert(insert_at, card);
        self.touch();
    }

    fn find_card_mut(
        &mut self,
        board_id: &BoardId,
        list_id: &ListId,
        card_id: &CardId,
    ) -> Option<&mut Card> {
        self.find_board_mut(board_id)
            .and_then(|b| b.find_list_mut(list_id))
            .and_then(|l| l.find_card_mut(card_id))
    }
}
