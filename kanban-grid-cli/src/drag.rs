//! kanban-grid drag - move one item and save the board.

use std::path::Path;

use anyhow::Result;
use kanban_grid::{BoardError, BoardSession, CellLocation, DragResult, ItemId};
use tracing::debug;

use crate::save_session;

/// Build the drag from the item's current cell to the given destination.
///
/// The source index is the item's position inside its current cell.
pub fn drag_from_current_cell(
    session: &BoardSession,
    item_id: &ItemId,
    destination: CellLocation,
) -> Result<DragResult, BoardError> {
    let item = session
        .store()
        .get(item_id)
        .ok_or_else(|| BoardError::ItemNotFound {
            id: item_id.to_string(),
        })?;

    let index = session
        .store()
        .cell(&item.column_id, &item.swimlane)
        .iter()
        .position(|i| &i.id == item_id)
        .unwrap_or(0);

    let source = CellLocation::new(item.swimlane.clone(), item.column_id.clone(), index);
    Ok(DragResult::dropped(item_id.clone(), source, destination))
}

/// Apply one drag; the snapshot is rewritten only when the board changed
pub fn run_drag(
    mut session: BoardSession,
    snapshot: &Path,
    item: &str,
    swimlane: &str,
    column: &str,
    index: usize,
) -> Result<()> {
    let item_id = ItemId::from(item);
    let destination = CellLocation::new(swimlane, column, index);
    let drag = drag_from_current_cell(&session, &item_id, destination)?;
    debug!(
        item = %item_id,
        from = %drag.source.droppable_id(),
        to_swimlane = swimlane,
        to_column = column,
        "dragging item"
    );

    let outcome = session.dispatch(&drag.into());
    debug!(snapshot = %snapshot.display(), item = %item_id, %outcome, "drag applied");
    if outcome.is_changed() {
        save_session(&session, snapshot)?;
    }

    println!("{}: {}", item_id, outcome);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use kanban_grid::{BoardConfig, Item, ItemStore};

    #[test]
    fn test_source_index_is_position_in_cell() {
        let store = ItemStore::new(vec![
            Item::new("x1", "One", "todo", "team-a"),
            Item::new("x2", "Two", "done", "team-a"),
            Item::new("x3", "Three", "todo", "team-a"),
        ])
        .unwrap();
        let session = BoardSession::new(store, BoardConfig::default()).unwrap();

        let drag = drag_from_current_cell(
            &session,
            &"x3".into(),
            CellLocation::new("team-b", "review", 0),
        )
        .unwrap();

        assert_eq!(drag.source, CellLocation::new("team-a", "todo", 1));
    }

    #[test]
    fn test_unknown_item_is_an_error() {
        let session = BoardSession::new(ItemStore::default(), BoardConfig::default()).unwrap();
        let result = drag_from_current_cell(
            &session,
            &"ghost".into(),
            CellLocation::new("team-b", "review", 0),
        );
        assert!(matches!(result, Err(BoardError::ItemNotFound { .. })));
    }
}
