//! kanban-grid CLI - inspect and drive a two-dimensional kanban board.
//!
//! Commands:
//! - `kanban-grid generate --output <file>`: Write a sample board snapshot
//! - `kanban-grid show [--snapshot <file>]`: Print column totals and the cell grid
//! - `kanban-grid drag --snapshot <file> --item <id> --swimlane <id> --column <id>`:
//!   Move an item to another cell
//! - `kanban-grid toggle --snapshot <file> <target> <id>`: Flip a display flag
//! - `kanban-grid replay --snapshot <file> --events <file>`: Apply JSON-lines events
//!
//! Environment variables:
//! - RUST_LOG: Log filter (default `warn`)
//! - KANBAN_GRID_*: Override any setting, e.g. KANBAN_GRID_SEED=42
//!
//! Exit codes:
//! - 0: Success
//! - 1: Error

use clap::Parser;
use tracing_subscriber::EnvFilter;

use kanban_grid::BoardSession;
use kanban_grid_cli::{drag, generate, load_settings, open_session, replay, show, toggle};
use kanban_grid_cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let filter = if cli.debug {
        EnvFilter::new("kanban_grid=debug,kanban_grid_cli=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .init();

    std::process::exit(result_to_exit(run(cli)));
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let settings = load_settings(cli.config.as_deref())?;

    match cli.command {
        Commands::Generate {
            count,
            seed,
            output,
        } => generate::run_generate(&settings, count, seed, &output),
        Commands::Show { snapshot, format } => {
            let session = match snapshot {
                Some(path) => open_session(&path, &settings)?,
                None => BoardSession::sample(&settings)?,
            };
            show::run_show(&session, format)
        }
        Commands::Drag {
            snapshot,
            item,
            swimlane,
            column,
            index,
        } => {
            let session = open_session(&snapshot, &settings)?;
            drag::run_drag(session, &snapshot, &item, &swimlane, &column, index)
        }
        Commands::Toggle {
            snapshot,
            target,
            id,
        } => {
            let session = open_session(&snapshot, &settings)?;
            toggle::run_toggle(session, &snapshot, target, &id)
        }
        Commands::Replay {
            snapshot,
            events,
            save,
        } => {
            let session = open_session(&snapshot, &settings)?;
            replay::run_replay(session, &snapshot, &events, save)
        }
    }
}

/// Convert a command result to an exit code, printing the error chain.
fn result_to_exit(result: anyhow::Result<()>) -> i32 {
    match result {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            1
        }
    }
}
