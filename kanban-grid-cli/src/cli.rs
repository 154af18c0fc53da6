//! CLI definition for the kanban-grid command-line interface.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// kanban-grid - inspect and drive a two-dimensional kanban board.
///
/// Boards are stored as snapshot files (`.json`, `.yaml` or `.yml`).
/// Settings come from `kanban-grid.{toml,yaml,yml,json}` in the working
/// directory, or `--config`, and `KANBAN_GRID_*` environment variables.
#[derive(Parser, Debug)]
#[command(name = "kanban-grid")]
#[command(version)]
#[command(about = "Inspect and drive a two-dimensional kanban board")]
pub struct Cli {
    /// Enable debug output to stderr
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Settings file to use instead of discovering one
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write a randomly generated board to a snapshot file
    Generate {
        /// Number of items (defaults to the `sample_count` setting)
        #[arg(long)]
        count: Option<usize>,
        /// Seed for reproducible boards (defaults to the `seed` setting)
        #[arg(long)]
        seed: Option<u64>,
        /// Snapshot file to write
        #[arg(short, long, value_name = "FILE")]
        output: PathBuf,
    },

    /// Print column totals and the swimlane x column grid
    Show {
        /// Snapshot to show; a sample board is generated when omitted
        #[arg(short, long, value_name = "FILE")]
        snapshot: Option<PathBuf>,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Move an item to another cell and save the snapshot
    Drag {
        #[arg(short, long, value_name = "FILE")]
        snapshot: PathBuf,
        /// Item to move
        #[arg(long)]
        item: String,
        /// Destination swimlane
        #[arg(long)]
        swimlane: String,
        /// Destination column
        #[arg(long)]
        column: String,
        /// Position within the destination cell
        #[arg(long, default_value_t = 0)]
        index: usize,
    },

    /// Flip a column or swimlane display flag and save the snapshot
    Toggle {
        #[arg(short, long, value_name = "FILE")]
        snapshot: PathBuf,
        /// Which flag to flip
        #[arg(value_enum)]
        target: ToggleTarget,
        /// Column or swimlane id
        id: String,
    },

    /// Apply a JSON-lines file of board events
    Replay {
        #[arg(short, long, value_name = "FILE")]
        snapshot: PathBuf,
        /// One event per line, e.g. {"type":"toggle_column_collapse","column_id":"todo"}
        #[arg(short, long, value_name = "FILE")]
        events: PathBuf,
        /// Write the resulting board back to the snapshot
        #[arg(long)]
        save: bool,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
    Yaml,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToggleTarget {
    ColumnVisibility,
    ColumnCollapse,
    SwimlaneCollapse,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_toggle() {
        let cli = Cli::try_parse_from([
            "kanban-grid",
            "toggle",
            "--snapshot",
            "board.json",
            "column-collapse",
            "todo",
        ])
        .unwrap();

        match cli.command {
            Commands::Toggle { target, id, .. } => {
                assert_eq!(target, ToggleTarget::ColumnCollapse);
                assert_eq!(id, "todo");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["kanban-grid", "show", "--debug", "--format", "json"]).unwrap();
        assert!(cli.debug);
        assert!(matches!(
            cli.command,
            Commands::Show {
                format: OutputFormat::Json,
                snapshot: None
            }
        ));
    }
}
