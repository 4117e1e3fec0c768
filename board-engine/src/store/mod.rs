//! BoardStore - the canonical board/list/card state container
//!
//! Single-writer, synchronous: every mutation runs to completion under
//! `&mut self` before anything else can observe state. Mutations that
//! reference an unknown id are silent no-ops; callers only ever reference
//! ids they just observed, so a no-op beats a crash for a UI action.

mod board;
mod card;
mod list;

use crate::defaults;
use crate::error::Result;
use crate::storage::Storage;
use crate::types::{Board, BoardId};
use serde::{Deserialize, Serialize};

/// Holds every board plus the pointer to the currently selected one.
///
/// The `version` counter bumps on every state-changing operation (and only
/// those - no-ops leave it alone), so consumers detect change with a single
/// integer compare instead of deep equality.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardStore {
    pub(crate) boards: Vec<Board>,
    pub(crate) active_board: Option<BoardId>,
    #[serde(skip)]
    version: u64,
}

impl BoardStore {
    /// Create a store with the seeded default board, selected.
    ///
    /// There is no empty state: the application always has at least one
    /// navigable board on first launch.
    pub fn new() -> Self {
        let board = defaults::default_board();
        let active = board.id.clone();
        Self {
            boards: vec![board],
            active_board: Some(active),
            version: 0,
        }
    }

    /// Hydrate from a prior snapshot, or fall back to the default store
    pub fn load_or_default(storage: &Storage) -> Result<Self> {
        match storage.load()? {
            Some(store) => Ok(store),
            None => Ok(Self::new()),
        }
    }

    // =========================================================================
    // Read accessors
    // =========================================================================

    /// All boards, in creation order
    pub fn boards(&self) -> &[Board] {
        &self.boards
    }

    /// Id of the currently selected board, if any
    pub fn active_board_id(&self) -> Option<&BoardId> {
        self.active_board.as_ref()
    }

    /// The currently selected board. `None` when nothing is selected or
    /// the selection points at a board that no longer exists.
    pub fn active_board(&self) -> Option<&Board> {
        let id = self.active_board.as_ref()?;
        self.boards.iter().find(|b| &b.id == id)
    }

    /// Monotonic change counter, reset on load
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Find a board by id
    pub fn find_board(&self, id: &BoardId) -> Option<&Board> {
        self.boards.iter().find(|b| &b.id == id)
    }

    pub(crate) fn find_board_mut(&mut self, id: &BoardId) -> Option<&mut Board> {
        self.boards.iter_mut().find(|b| &b.id == id)
    }

    /// Record that state changed
    pub(crate) fn touch(&mut self) {
        self.version += 1;
    }
}

impl Default for BoardStore {
    fn default() -> Self {
        Self::new()
    }
}
