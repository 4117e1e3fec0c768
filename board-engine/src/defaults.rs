//! Seed data for fresh stores and new boards

use crate::types::{Board, Card, Label, List};

/// Background color applied to boards that don't pick their own
pub const DEFAULT_BOARD_COLOR: &str = "#0079bf";

/// The seeded starter board a fresh store boots with.
///
/// Matches the original seed data so a first launch has something to
/// drag around: two cards in "To Do", one in "In Progress", empty "Done".
pub fn default_board() -> Board {
    Board::new("Meu primeiro quadro")
        .with_background_color(DEFAULT_BOARD_COLOR)
        .with_lists(vec![
            List::new("To Do")
                .with_card(
                    Card::new("Learn drag and drop")
                        .with_description("Study how to implement drag and drop in React")
                        .with_label(Label::new("Learning", "#3B82F6")),
                )
                .with_card(Card::new("Create project structure")),
            List::new("In Progress").with_card(
                Card::new("Build UI components")
                    .with_description("Create reusable components for the app")
                    .with_label(Label::new("UI", "#0EA5E9")),
            ),
            List::new("Done"),
        ])
}

/// The fixed three-list template every explicitly created board starts with
pub fn starter_lists() -> Vec<List> {
    vec![
        List::new("To Do"),
        List::new("In Progress"),
        List::new("Done"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_board_seed() {
        let board = default_board();
        assert_eq!(board.lists.len(), 3);
        assert_eq!(board.lists[0].title, "To Do");
        assert_eq!(board.lists[0].cards.len(), 2);
        assert_eq!(board.lists[1].cards.len(), 1);
        assert!(board.lists[2].cards.is_empty());
        assert_eq!(board.background_color.as_deref(), Some(DEFAULT_BOARD_COLOR));
    }

    #[test]
    fn test_starter_lists_are_empty() {
        let lists = starter_lists();
        assert_eq!(lists.len(), 3);
        assert_eq!(lists[0].title, "To Do");
        assert_eq!(lists[1].title, "In Progress");
        assert_eq!(lists[2].title, "Done");
        assert!(lists.iter().all(|l| l.cards.is_empty()));
    }

    #[test]
    fn test_seed_ids_are_distinct() {
        let board = default_board();
        let mut ids: Vec<&str> = board.lists.iter().map(|l| l.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 3);
    }
}
