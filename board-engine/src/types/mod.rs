//! Core types for the board engine

mod board;
mod card;
mod ids;

// Re-export all types
pub use board::{Board, List};
pub use card::{Card, CardPatch, Label};
pub use ids::{BoardId, CardId, LabelId, ListId};
