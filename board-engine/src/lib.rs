//! Kanban board state engine with snapshot persistence
//!
//! This crate is the state-management core of a single-user kanban board
//! editor: boards hold ordered lists, lists hold ordered cards, cards carry
//! labels and metadata. It owns the data model, the mutation operations
//! (create/update/delete/move at every granularity), and the index
//! arithmetic behind drag-and-drop reordering. Rendering, gesture
//! recognition, and form handling are callers, not concerns.
//!
//! ## Overview
//!
//! - **Single owned store** - [`BoardStore`] is an explicit state container
//!   handed to collaborators, never an ambient global
//! - **No-op over panic** - mutations referencing unknown ids silently
//!   preserve state; callers only use ids they just observed
//! - **Change counter** - every effective mutation bumps
//!   [`BoardStore::version`], so consumers detect change with an integer
//!   compare
//! - **Snapshot persistence** - the whole store serializes to one JSON file
//!   under a fixed namespace; saving is fire-and-forget after the mutation
//!   is already published
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use board_engine::{BoardStore, Storage};
//!
//! # fn example() -> board_engine::Result<()> {
//! let storage = Storage::new("/path/to/data");
//! let mut store = BoardStore::load_or_default(&storage)?;
//!
//! let board_id = store.create_board("Release planning");
//! let board = store.active_board().expect("just created");
//! let todo = board.lists[0].id.clone();
//! store.create_card(&board_id, &todo, "Cut the branch");
//!
//! storage.persist(&store);
//! # Ok(())
//! # }
//! ```
//!
//! ## Move semantics
//!
//! [`BoardStore::move_card`] and [`BoardStore::move_list`] use
//! splice-out-then-splice-in semantics: the item is removed first, and the
//! destination index is interpreted against the sequence as it exists at
//! insertion time. The [`drag`] module wraps these in a typed per-gesture
//! session so live cross-list relocation and end-of-gesture reordering each
//! apply exactly once.

pub mod defaults;
pub mod drag;
mod error;
mod storage;
mod store;
pub mod types;

pub use drag::{DragItem, DragSession, DropTarget};
pub use error::{Result, StoreError};
pub use storage::{Storage, StorageLock, STORAGE_NAMESPACE};
pub use store::BoardStore;

// Re-export commonly used types
pub use types::{Board, BoardId, Card, CardId, CardPatch, Label, LabelId, List, ListId};
