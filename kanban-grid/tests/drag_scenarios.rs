//! End-to-end board scenarios driven through a session

use kanban_grid::{
    BoardConfig, BoardEvent, BoardSession, CellLocation, ColumnId, DragResult, Item, ItemStore,
    NoopReason, Outcome, SwimlaneId,
};

fn board_with_x1() -> BoardSession {
    let store = ItemStore::new(vec![
        Item::new("x0", "Setup CI/CD pipeline", "backlog", "team-c"),
        Item::new("x1", "Add unit tests", "todo", "team-a"),
        Item::new("x2", "Update dependencies", "todo", "team-a"),
        Item::new("x3", "Add dark mode support", "review", "team-b"),
        Item::new("x4", "Optimize bundle size", "done", "team-d"),
    ])
    .unwrap();
    BoardSession::new(store, BoardConfig::default()).unwrap()
}

fn cell(column: &str, swimlane: &str) -> (ColumnId, SwimlaneId) {
    (ColumnId::from(column), SwimlaneId::from(swimlane))
}

#[test_log::test]
fn test_drag_moves_item_between_cells() {
    let mut session = board_with_x1();
    let (todo, team_a) = cell("todo", "team-a");
    let (review, team_b) = cell("review", "team-b");

    let before = session.column_stats();

    let outcome = session.dispatch(&BoardEvent::from(DragResult::dropped(
        "x1",
        CellLocation::new("team-a", "todo", 0),
        CellLocation::new("team-b", "review", 0),
    )));
    assert_eq!(outcome, Outcome::Changed);

    let x1 = session.store().get(&"x1".into()).unwrap();
    assert_eq!(x1.column_id, review);
    assert_eq!(x1.swimlane, team_b);

    let after = session.column_stats();
    assert_eq!(after.get(&todo, &team_a), before.get(&todo, &team_a) - 1);
    assert_eq!(after.get(&review, &team_b), before.get(&review, &team_b) + 1);
    assert_eq!(after.grand_total(), before.grand_total());

    let views = session.views();
    let moved: Vec<&str> = views
        .grouped
        .cell(&team_b, &review)
        .iter()
        .map(|i| i.id.as_str())
        .collect();
    assert_eq!(moved, vec!["x1", "x3"]);
}

#[test_log::test]
fn test_hidden_column_leaves_grouping_but_keeps_stats() {
    let mut session = board_with_x1();
    let backlog = ColumnId::from("backlog");
    let stats_before = session.column_stats();

    assert!(session.toggle_column_visibility("backlog").is_changed());

    let views = session.views();
    assert!(!views.grouped.contains_column(&backlog));
    assert!(views.stats.contains_column(&backlog));
    assert_eq!(views.stats.column(&backlog), stats_before.column(&backlog));
    assert_eq!(views.stats.total(&backlog), 1);
}

#[test_log::test]
fn test_rejected_drops_leave_board_untouched() {
    let mut session = board_with_x1();
    let snapshot = session.snapshot();
    let source = CellLocation::new("team-a", "todo", 0);

    let drops = [
        (
            DragResult::cancelled("x1", source.clone()),
            NoopReason::Cancelled,
        ),
        (
            DragResult::dropped("x1", source.clone(), source.clone()),
            NoopReason::SameLocation,
        ),
        (
            DragResult::dropped("x1", source.clone(), CellLocation::new("team-a", "archive", 0)),
            NoopReason::UnknownColumn,
        ),
        (
            DragResult::dropped("nope", source.clone(), CellLocation::new("team-b", "done", 0)),
            NoopReason::UnknownItem,
        ),
    ];

    for (drag, reason) in drops {
        let outcome = session.dispatch(&drag.into());
        assert_eq!(outcome, Outcome::Unchanged(reason));
        assert_eq!(outcome.reason(), Some(reason));
    }

    assert_eq!(session.snapshot(), snapshot);
    assert_eq!(session.activity(None).len(), 4);
}

#[test_log::test]
fn test_droppable_id_drives_a_drag() {
    let mut session = board_with_x1();
    let destination = session
        .board()
        .resolve_droppable("team-d-in-progress", 0)
        .unwrap();

    let drag = DragResult::dropped("x2", CellLocation::new("team-a", "todo", 1), destination);
    assert!(session.dispatch(&drag.into()).is_changed());

    let x2 = session.store().get(&"x2".into()).unwrap();
    assert_eq!(x2.column_id, "in-progress");
    assert_eq!(x2.swimlane, "team-d");
}

#[test_log::test]
fn test_collapse_toggles_do_not_affect_views() {
    let mut session = board_with_x1();
    let before = session.column_stats();

    session.toggle_column_collapse("todo");
    session.toggle_swimlane_collapse("team-a");

    assert_eq!(session.column_stats(), before);
    assert!(session.board().find_column(&"todo".into()).unwrap().is_collapsed);
    assert!(session.swimlanes()[0].is_collapsed);
    assert_eq!(session.views().grouped.column_ids().len(), 5);
}
