//! kanban-grid generate - write a sample board.

use std::path::Path;

use anyhow::Result;
use kanban_grid::{BoardSession, BoardSettings};

use crate::save_session;

/// Generate a sample board and save it as a snapshot.
///
/// `count` and `seed` override the corresponding settings.
pub fn run_generate(
    settings: &BoardSettings,
    count: Option<usize>,
    seed: Option<u64>,
    output: &Path,
) -> Result<()> {
    let mut settings = settings.clone();
    if let Some(count) = count {
        settings.sample_count = count;
    }
    if seed.is_some() {
        settings.seed = seed;
    }

    let session = BoardSession::sample(&settings)?;
    save_session(&session, output)?;

    println!(
        "Generated {} items into {}",
        session.items().len(),
        output.display()
    );
    Ok(())
}
