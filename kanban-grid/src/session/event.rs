//! Input events a presentation layer sends to a session

use crate::types::{ColumnId, DragResult, SwimlaneId};
use serde::{Deserialize, Serialize};

/// One user gesture.
///
/// Serialized with a `type` tag so a sequence of events can be stored and
/// replayed as JSON lines:
///
/// ```json
/// {"type": "toggle_column_visibility", "column_id": "backlog"}
/// {"type": "drag_completed", "item_id": "item-7", "source": {...}, "destination": {...}}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BoardEvent {
    ToggleColumnVisibility { column_id: ColumnId },
    ToggleColumnCollapse { column_id: ColumnId },
    ToggleSwimlaneCollapse { swimlane_id: SwimlaneId },
    DragCompleted(DragResult),
}

impl BoardEvent {
    pub fn toggle_column_visibility(column_id: impl Into<ColumnId>) -> Self {
        Self::ToggleColumnVisibility {
            column_id: column_id.into(),
        }
    }

    pub fn toggle_column_collapse(column_id: impl Into<ColumnId>) -> Self {
        Self::ToggleColumnCollapse {
            column_id: column_id.into(),
        }
    }

    pub fn toggle_swimlane_collapse(swimlane_id: impl Into<SwimlaneId>) -> Self {
        Self::ToggleSwimlaneCollapse {
            swimlane_id: swimlane_id.into(),
        }
    }

    /// Canonical op string used in the activity log
    pub fn op(&self) -> &'static str {
        match self {
            Self::ToggleColumnVisibility { .. } => "toggle column visibility",
            Self::ToggleColumnCollapse { .. } => "toggle column collapse",
            Self::ToggleSwimlaneCollapse { .. } => "toggle swimlane collapse",
            Self::DragCompleted(_) => "drag item",
        }
    }
}

impl From<DragResult> for BoardEvent {
    fn from(drag: DragResult) -> Self {
        Self::DragCompleted(drag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CellLocation;

    #[test]
    fn test_toggle_event_json() {
        let json = serde_json::to_value(BoardEvent::toggle_swimlane_collapse("team-b")).unwrap();
        assert_eq!(json["type"], "toggle_swimlane_collapse");
        assert_eq!(json["swimlane_id"], "team-b");
    }

    #[test]
    fn test_drag_event_parses_from_json_line() {
        let line = r#"{"type":"drag_completed","item_id":"x1","source":{"swimlane_id":"team-a","column_id":"todo","index":0},"destination":{"swimlane_id":"team-b","column_id":"review","index":1}}"#;
        let event: BoardEvent = serde_json::from_str(line).unwrap();

        let expected = BoardEvent::DragCompleted(DragResult::dropped(
            "x1",
            CellLocation::new("team-a", "todo", 0),
            CellLocation::new("team-b", "review", 1),
        ));
        assert_eq!(event, expected);
        assert_eq!(event.op(), "drag item");
    }

    #[test]
    fn test_drag_event_without_destination() {
        let line = r#"{"type":"drag_completed","item_id":"x1","source":{"swimlane_id":"team-a","column_id":"todo"}}"#;
        let event: BoardEvent = serde_json::from_str(line).unwrap();
        match event {
            BoardEvent::DragCompleted(drag) => {
                assert!(drag.destination.is_none());
                assert_eq!(drag.source.index, 0);
            }
            other => panic!("unexpected event: {:?}", other),
        }
    }
}
