//! Cell addressing and drag-completion payloads

use super::ids::{ColumnId, ItemId, SwimlaneId};
use serde::{Deserialize, Serialize};

/// A slot inside one (swimlane, column) cell
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellLocation {
    pub swimlane_id: SwimlaneId,
    pub column_id: ColumnId,
    /// Index within the cell. Carried for the presentation layer; the core
    /// compares it but never stores it.
    #[serde(default)]
    pub index: usize,
}

impl CellLocation {
    pub fn new(swimlane_id: impl Into<SwimlaneId>, column_id: impl Into<ColumnId>, index: usize) -> Self {
        Self {
            swimlane_id: swimlane_id.into(),
            column_id: column_id.into(),
            index,
        }
    }

    /// Flat address of the cell, `<swimlane>-<column>`
    pub fn droppable_id(&self) -> String {
        format!("{}-{}", self.swimlane_id, self.column_id)
    }
}

/// The payload of a finished drag gesture.
///
/// `destination` is `None` when the item was dropped outside any cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragResult {
    pub item_id: ItemId,
    pub source: CellLocation,
    #[serde(default)]
    pub destination: Option<CellLocation>,
}

impl DragResult {
    pub fn new(item_id: impl Into<ItemId>, source: CellLocation, destination: Option<CellLocation>) -> Self {
        Self {
            item_id: item_id.into(),
            source,
            destination,
        }
    }

    /// A drag dropped onto `destination`
    pub fn dropped(item_id: impl Into<ItemId>, source: CellLocation, destination: CellLocation) -> Self {
        Self::new(item_id, source, Some(destination))
    }

    /// A drag released outside any cell
    pub fn cancelled(item_id: impl Into<ItemId>, source: CellLocation) -> Self {
        Self::new(item_id, source, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_droppable_id_keeps_hyphens() {
        let loc = CellLocation::new("team-a", "in-progress", 0);
        assert_eq!(loc.droppable_id(), "team-a-in-progress");
    }

    #[test]
    fn test_index_is_part_of_equality() {
        let a = CellLocation::new("team-a", "todo", 0);
        let b = CellLocation::new("team-a", "todo", 3);
        assert_eq!(a.droppable_id(), b.droppable_id());
        assert_ne!(a, b);
    }

    #[test]
    fn test_cancelled_drag_has_no_destination() {
        let drag = DragResult::cancelled("x1", CellLocation::new("team-a", "todo", 0));
        assert!(drag.destination.is_none());
    }
}
