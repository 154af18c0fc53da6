//! Drag-completion handling

use crate::board::{BoardConfig, ReferencePolicy};
use crate::store::ItemStore;
use crate::types::{DragResult, NoopReason, Outcome};
use tracing::trace;

/// Apply a finished drag gesture to the store.
///
/// - no destination: the drag was cancelled, nothing happens
/// - destination equal to source (same cell, same index): nothing happens
/// - under [`ReferencePolicy::Strict`], a destination naming an unknown column
///   or swimlane is ignored
/// - otherwise the item moves to the destination cell
///
/// Whether the item already sits in the destination cell is decided by the
/// store, not by the caller's `source`. Items are never reordered inside a
/// cell, so a drop into the item's own cell reports
/// [`NoopReason::SameLocation`].
pub fn handle_drag_end(
    store: &mut ItemStore,
    board: &BoardConfig,
    policy: ReferencePolicy,
    drag: &DragResult,
) -> Outcome {
    let Some(destination) = &drag.destination else {
        trace!(item = %drag.item_id, "drag cancelled");
        return Outcome::Unchanged(NoopReason::Cancelled);
    };

    if drag.source == *destination {
        trace!(item = %drag.item_id, "drag dropped at its source");
        return Outcome::Unchanged(NoopReason::SameLocation);
    }

    if policy == ReferencePolicy::Strict {
        if board.find_column(&destination.column_id).is_none() {
            trace!(column = %destination.column_id, "drop onto unknown column ignored");
            return Outcome::Unchanged(NoopReason::UnknownColumn);
        }
        if board.find_swimlane(&destination.swimlane_id).is_none() {
            trace!(swimlane = %destination.swimlane_id, "drop onto unknown swimlane ignored");
            return Outcome::Unchanged(NoopReason::UnknownSwimlane);
        }
    }

    store.reassign(&drag.item_id, &destination.column_id, &destination.swimlane_id)
}
