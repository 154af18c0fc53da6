//! kanban-grid replay - apply a JSON-lines event file.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use comfy_table::Cell;
use kanban_grid::{BoardEvent, BoardSession, Outcome};

use crate::save_session;
use crate::table::new_table;

/// Parse events, one JSON object per line; blank lines are skipped
pub fn parse_events(content: &str) -> Result<Vec<(usize, BoardEvent)>> {
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| {
            let event: BoardEvent = serde_json::from_str(line)
                .with_context(|| format!("invalid event on line {}", i + 1))?;
            Ok((i + 1, event))
        })
        .collect()
}

/// Dispatch every event in order and print a per-event outcome table
pub fn run_replay(
    mut session: BoardSession,
    snapshot: &Path,
    events: &Path,
    save: bool,
) -> Result<()> {
    let content = fs::read_to_string(events)
        .with_context(|| format!("failed to read events {}", events.display()))?;
    let events = parse_events(&content)?;

    let mut table = new_table();
    table.set_header(vec!["Line", "Event", "Outcome"]);

    let mut changed = 0;
    for (line, event) in &events {
        let outcome = session.dispatch(event);
        if outcome == Outcome::Changed {
            changed += 1;
        }
        table.add_row(vec![
            Cell::new(line),
            Cell::new(event.op()),
            Cell::new(outcome),
        ]);
    }

    println!("{table}");
    println!("{} events, {} changed the board", events.len(), changed);

    if save && changed > 0 {
        save_session(&session, snapshot)?;
    }
    Ok(())
}
