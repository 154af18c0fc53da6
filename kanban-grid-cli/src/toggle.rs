//! kanban-grid toggle - flip one display flag and save the board.

use std::path::Path;

use anyhow::Result;
use kanban_grid::{BoardEvent, BoardSession};
use tracing::debug;

use crate::cli::ToggleTarget;
use crate::save_session;

pub fn toggle_event(target: ToggleTarget, id: &str) -> BoardEvent {
    match target {
        ToggleTarget::ColumnVisibility => BoardEvent::toggle_column_visibility(id),
        ToggleTarget::ColumnCollapse => BoardEvent::toggle_column_collapse(id),
        ToggleTarget::SwimlaneCollapse => BoardEvent::toggle_swimlane_collapse(id),
    }
}

/// Apply one toggle; the snapshot is rewritten only when the board changed
pub fn run_toggle(
    mut session: BoardSession,
    snapshot: &Path,
    target: ToggleTarget,
    id: &str,
) -> Result<()> {
    let event = toggle_event(target, id);
    let outcome = session.dispatch(&event);
    debug!(snapshot = %snapshot.display(), op = event.op(), id, %outcome, "toggle applied");
    if outcome.is_changed() {
        save_session(&session, snapshot)?;
    }

    println!("{} {}: {}", event.op(), id, outcome);
    Ok(())
}
