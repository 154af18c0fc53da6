//! kanban-grid CLI - command implementations behind the `kanban-grid` binary.
//!
//! Each command module exposes one `run_*` function returning
//! `anyhow::Result<()>`; `main.rs` maps the result to an exit code.

pub mod cli;
pub mod drag;
pub mod generate;
pub mod replay;
pub mod show;
pub mod table;
pub mod toggle;

pub use cli::{Cli, Commands, OutputFormat, ToggleTarget};

use std::path::Path;

use anyhow::{Context, Result};
use kanban_grid::{BoardSession, BoardSettings, BoardSnapshot};

/// Load settings from `--config` when given, otherwise from the working directory
pub fn load_settings(config: Option<&Path>) -> Result<BoardSettings> {
    match config {
        Some(path) => BoardSettings::load_file(path)
            .with_context(|| format!("failed to load settings from {}", path.display())),
        None => BoardSettings::load().context("failed to load settings"),
    }
}

/// Read a snapshot file and rebuild its session
pub fn open_session(path: &Path, settings: &BoardSettings) -> Result<BoardSession> {
    let snapshot = BoardSnapshot::load(path)
        .with_context(|| format!("failed to read snapshot {}", path.display()))?;
    BoardSession::restore(snapshot, settings)
        .with_context(|| format!("invalid snapshot {}", path.display()))
}

/// Write a session back to its snapshot file
pub fn save_session(session: &BoardSession, path: &Path) -> Result<()> {
    session
        .snapshot()
        .save(path)
        .with_context(|| format!("failed to write snapshot {}", path.display()))
}
