//! Drag-interaction collaborator
//!
//! Translates gesture events into store operations through a typed
//! contract. A session tracks which list the dragged card currently
//! belongs to, so a cross-list relocation is applied exactly once (the
//! moment membership changes, mid-gesture) and the same-list index fix
//! exactly once (at gesture end) - the two phases cannot double-apply.

use crate::store::BoardStore;
use crate::types::{BoardId, CardId, ListId};

/// What is being dragged. Decided at the gesture boundary, before any
/// event reaches the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragItem {
    /// A card, together with the list it started in
    Card { id: CardId, list_id: ListId },
    /// A whole list
    List { id: ListId },
}

/// The element currently under the pointer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropTarget {
    /// Hovering a card: insert at that card's position
    Card { id: CardId, list_id: ListId },
    /// Hovering a list body: append at the end
    List { id: ListId },
}

impl DropTarget {
    /// The list this target resolves to
    fn list_id(&self) -> &ListId {
        match self {
            Self::Card { list_id, .. } => list_id,
            Self::List { id } => id,
        }
    }
}

/// One drag gesture, from initiation to drop.
///
/// Feed every intermediate "drag over" event to [`update`](Self::update)
/// and the final drop to [`complete`](Self::complete). Redundant
/// intermediate events are tolerated; each call is independently
/// consistent against the store's current state.
#[derive(Debug)]
pub struct DragSession {
    board_id: BoardId,
    item: DragItem,
}

impl DragSession {
    /// Start a session for the given board and dragged item
    pub fn begin(board_id: BoardId, item: DragItem) -> Self {
        Self { board_id, item }
    }

    /// The dragged item, with card list membership kept current as the
    /// session relocates it
    pub fn item(&self) -> &DragItem {
        &self.item
    }

    /// Intermediate drag-over event.
    ///
    /// Only a dragged card crossing into a different list has any effect
    /// here: it is relocated immediately so the UI reflects the move, and
    /// the session's tracked membership is updated so the relocation
    /// happens once per crossing. Same-list hovers wait for `complete`.
    pub fn update(&mut self, store: &mut BoardStore, target: &DropTarget) {
        let DragItem::Card { id, list_id } = self.item.clone() else {
            return;
        };
        let target_list = target.list_id().clone();
        if target_list == list_id {
            return;
        }

        let Some(board) = store.find_board(&self.board_id) else {
            return;
        };
        let Some(source_index) = board
            .find_list(&list_id)
            .and_then(|l| l.card_index(&id))
        else {
            return;
        };
        let Some(over_list) = board.find_list(&target_list) else {
            return;
        };
        let destination_index = match target {
            DropTarget::Card { id: over_id, .. } => match over_list.card_index(over_id) {
                Some(i) => i,
                None => return,
            },
            DropTarget::List { .. } => over_list.cards.len(),
        };

        store.move_card(
            &self.board_id,
            &list_id,
            &target_list,
            source_index,
            destination_index,
        );

        self.item = DragItem::Card {
            id,
            list_id: target_list,
        };
    }

    /// Gesture completion.
    ///
    /// Finalizes what `update` deliberately left alone: same-list card
    /// reordering, and list reordering within the board. Dropping on
    /// nothing (cancelled gesture) or onto the dragged element itself is
    /// a no-op.
    pub fn complete(self, store: &mut BoardStore, target: Option<&DropTarget>) {
        let Some(target) = target else {
            return;
        };

        match &self.item {
            DragItem::List { id } => {
                let DropTarget::List { id: over_id } = target else {
                    return;
                };
                if over_id == id {
                    return;
                }
                let Some(board) = store.find_board(&self.board_id) else {
                    return;
                };
                let (Some(source_index), Some(destination_index)) =
                    (board.list_index(id), board.list_index(over_id))
                else {
                    return;
                };
                store.move_list(&self.board_id, source_index, destination_index);
            }
            DragItem::Card { id, list_id } => {
                let DropTarget::Card {
                    id: over_id,
                    list_id: over_list_id,
                } = target
                else {
                    return;
                };
                if over_id == id {
                    return;
                }
                // Cross-list drops were already applied during `update`,
                // so only a same-list index correction remains.
                if over_list_id != list_id {
                    return;
                }
                let Some(list) = store
                    .find_board(&self.board_id)
                    .and_then(|b| b.find_list(list_id))
                else {
                    return;
                };
                let (Some(source_index), Some(destination_index)) =
                    (list.card_index(id), list.card_index(over_id))
                else {
                    return;
                };
                store.move_card(
                    &self.board_id,
                    list_id,
                    list_id,
                    source_index,
                    destination_index,
                );
            }
        }
    }
}
