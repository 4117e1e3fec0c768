//! Integration tests for store consistency across operation sequences

use board_engine::{BoardStore, CardPatch, Label};
use std::collections::HashSet;

/// Walk the whole tree and assert the structural invariants: no duplicate
/// ids within any sequence, and a valid (or cleared) active pointer.
fn assert_integrity(store: &BoardStore) {
    let mut board_ids = HashSet::new();
    for board in store.boards() {
        assert!(
            board_ids.insert(board.id.clone()),
            "duplicate board id {}",
            board.id
        );

        let mut list_ids = HashSet::new();
        let mut card_ids = HashSet::new();
        for list in &board.lists {
            assert!(
                list_ids.insert(list.id.clone()),
                "duplicate list id {}",
                list.id
            );
            for card in &list.cards {
                assert!(
                    card_ids.insert(card.id.clone()),
                    "card {} appears in more than one place",
                    card.id
                );

                let mut label_ids = HashSet::new();
                for label in &card.labels {
                    assert!(
                        label_ids.insert(label.id.clone()),
                        "duplicate label id {} on card {}",
                        label.id,
                        card.id
                    );
                }
            }
        }
    }

    if let Some(active) = store.active_board_id() {
        assert!(
            store.boards().iter().any(|b| &b.id == active),
            "active pointer references a missing board"
        );
    }
}

#[test]
fn test_integrity_holds_across_a_busy_session() {
    let mut store = BoardStore::new();
    assert_integrity(&store);

    let board_id = store.create_board("Sprint 12");
    let board = store.find_board(&board_id).unwrap();
    let todo = board.lists[0].id.clone();
    let doing = board.lists[1].id.clone();

    let a = store.create_card(&board_id, &todo, "A").unwrap();
    let b = store.create_card(&board_id, &todo, "B").unwrap();
    store.create_card(&board_id, &todo, "C").unwrap();
    assert_integrity(&store);

    store.update_card(
        &board_id,
        &todo,
        &a,
        CardPatch::new().with_description("first task"),
    );
    store.add_label_to_card(&board_id, &todo, &a, Label::new("urgent", "#FF0000"));
    store.add_label_to_card(&board_id, &todo, &b, Label::new("urgent", "#FF0000"));
    assert_integrity(&store);

    // Shuffle cards around, within and across lists
    store.move_card(&board_id, &todo, &doing, 0, 0);
    store.move_card(&board_id, &todo, &todo, 1, 0);
    store.move_card(&board_id, &doing, &todo, 0, 2);
    store.move_list(&board_id, 0, 2);
    assert_integrity(&store);

    // Delete in every granularity
    store.delete_card(&board_id, &todo, &b);
    store.delete_list(&board_id, &doing);
    assert_integrity(&store);

    store.delete_board(&board_id);
    assert_integrity(&store);
}

#[test]
fn test_moves_preserve_total_card_count() {
    let mut store = BoardStore::new();
    let board_id = store.create_board("B");
    let board = store.find_board(&board_id).unwrap();
    let lists: Vec<_> = board.lists.iter().map(|l| l.id.clone()).collect();

    for i in 0..9 {
        store.create_card(&board_id, &lists[i % 3], format!("card {}", i)).unwrap();
    }
    let total = store.find_board(&board_id).unwrap().card_count();
    assert_eq!(total, 9);

    // A pile of moves, including redundant and out-of-range ones
    for i in 0..30usize {
        let src = &lists[i % 3];
        let dst = &lists[(i + 1) % 3];
        store.move_card(&board_id, src, dst, i % 5, (i * 7) % 6);
    }

    assert_eq!(store.find_board(&board_id).unwrap().card_count(), total);
    assert_integrity(&store);
}

#[test]
fn test_unknown_ids_leave_store_deep_equal() {
    let mut store = BoardStore::new();
    let board_id = store.create_board("B");
    let list_id = store.find_board(&board_id).unwrap().lists[0].id.clone();
    let card_id = store.create_card(&board_id, &list_id, "card").unwrap();
    let snapshot = store.clone();

    let ghost_board = board_engine::BoardId::from_string("ghost");
    let ghost_list = board_engine::ListId::from_string("ghost");
    let ghost_card = board_engine::CardId::from_string("ghost");

    store.update_board_title(&ghost_board, "x");
    store.update_card_background(&ghost_board, &list_id, &card_id, "#fff");
    store.update_card_background(&board_id, &ghost_list, &card_id, "#fff");
    store.update_card_background(&board_id, &list_id, &ghost_card, "#fff");
    store.delete_card(&board_id, &list_id, &ghost_card);
    store.delete_list(&board_id, &ghost_list);
    store.delete_board(&ghost_board);
    store.move_card(&board_id, &ghost_list, &list_id, 0, 0);
    store.move_card(&board_id, &list_id, &ghost_list, 0, 0);
    store.move_list(&ghost_board, 0, 1);
    assert!(store.create_list(&ghost_board, "x").is_none());
    assert!(store.create_card(&ghost_board, &list_id, "x").is_none());

    assert_eq!(store, snapshot);
    assert_eq!(store.version(), snapshot.version());
}

#[test]
fn test_version_counts_only_effective_mutations() {
    let mut store = BoardStore::new();
    let v0 = store.version();

    let board_id = store.create_board("B");
    assert!(store.version() > v0);

    let v1 = store.version();
    store.update_board_title(&board_id, "Renamed");
    assert_eq!(store.version(), v1 + 1);

    store.update_board_title(&board_engine::BoardId::from_string("ghost"), "x");
    assert_eq!(store.version(), v1 + 1);
}
