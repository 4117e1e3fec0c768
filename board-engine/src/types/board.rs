//! Board-level types: Board, List

use super::card::Card;
use super::ids::{BoardId, CardId, ListId};
use serde::{Deserialize, Serialize};

/// An ordered container of cards. Sequence order is display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct List {
    pub id: ListId,
    pub title: String,
    #[serde(default)]
    pub cards: Vec<Card>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
}

impl List {
    /// Create a new empty list
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: ListId::new(),
            title: title.into(),
            cards: Vec::new(),
            background_color: None,
        }
    }

    /// Append a card
    pub fn with_card(mut self, card: Card) -> Self {
        self.cards.push(card);
        self
    }

    /// Find a card by id
    pub fn find_card(&self, id: &CardId) -> Option<&Card> {
        self.cards.iter().find(|c| &c.id == id)
    }

    /// Find a card by id (mutable)
    pub fn find_card_mut(&mut self, id: &CardId) -> Option<&mut Card> {
        self.cards.iter_mut().find(|c| &c.id == id)
    }

    /// Position of a card within the sequence
    pub fn card_index(&self, id: &CardId) -> Option<usize> {
        self.cards.iter().position(|c| &c.id == id)
    }
}

/// The top-level container: an ordered sequence of lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Board {
    pub id: BoardId,
    pub title: String,
    #[serde(default)]
    pub lists: Vec<List>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
}

impl Board {
    /// Create a new board with no lists
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: BoardId::new(),
            title: title.into(),
            lists: Vec::new(),
            background_color: None,
        }
    }

    /// Set the lists
    pub fn with_lists(mut self, lists: Vec<List>) -> Self {
        self.lists = lists;
        self
    }

    /// Set the background color
    pub fn with_background_color(mut self, color: impl Into<String>) -> Self {
        self.background_color = Some(color.into());
        self
    }

    /// Find a list by id
    pub fn find_list(&self, id: &ListId) -> Option<&List> {
        self.lists.iter().find(|l| &l.id == id)
    }

    /// Find a list by id (mutable)
    pub fn find_list_mut(&mut self, id: &ListId) -> Option<&mut List> {
        self.lists.iter_mut().find(|l| &l.id == id)
    }

    /// Position of a list within the sequence
    pub fn list_index(&self, id: &ListId) -> Option<usize> {
        self.lists.iter().position(|l| &l.id == id)
    }

    /// Total number of cards across all lists
    pub fn card_count(&self) -> usize {
        self.lists.iter().map(|l| l.cards.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_creation() {
        let board = Board::new("Roadmap");
        assert_eq!(board.title, "Roadmap");
        assert!(board.lists.is_empty());
        assert!(board.background_color.is_none());
    }

    #[test]
    fn test_find_list_and_index() {
        let list = List::new("To Do");
        let list_id = list.id.clone();
        let board = Board::new("B").with_lists(vec![list, List::new("Done")]);

        assert!(board.find_list(&list_id).is_some());
        assert_eq!(board.list_index(&list_id), Some(0));
        assert!(board.find_list(&ListId::from_string("missing")).is_none());
    }

    #[test]
    fn test_card_count_spans_lists() {
        let board = Board::new("B").with_lists(vec![
            List::new("a").with_card(Card::new("1")).with_card(Card::new("2")),
            List::new("b").with_card(Card::new("3")),
            List::new("c"),
        ]);
        assert_eq!(board.card_count(), 3);
    }

    #[test]
    fn test_board_serialization() {
        let board = Board::new("B")
            .with_background_color("#0079bf")
            .with_lists(vec![List::new("To Do").with_card(Card::new("task"))]);
        let json = serde_json::to_string_pretty(&board).unwrap();
        let parsed: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, board);
    }
}
