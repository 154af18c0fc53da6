//! Headless kanban board engine
//!
//! This crate holds the state and rules of a two-dimensional kanban board:
//! items laid out in a grid of workflow columns (left to right) and team
//! swimlanes (top to bottom). It renders nothing. A presentation layer reads
//! the derived views and sends back user gestures as events.
//!
//! ## Overview
//!
//! - **Item store** - items indexed by id and by (column, swimlane) cell
//! - **Board configuration** - ordered columns and swimlanes with visibility
//!   and collapse toggles
//! - **Derivation** - per-cell counts over all columns, per-cell groupings over
//!   visible columns, recomputed from current state
//! - **Reassignment** - finished drags move an item to another cell; invalid
//!   drops are reported as no-ops, never errors
//! - **Session** - one owner for all of the above, with an activity log and
//!   snapshot/restore
//!
//! ## Basic Usage
//!
//! ```rust
//! use kanban_grid::{BoardConfig, BoardSession, CellLocation, DragResult, Item, ItemStore};
//!
//! # fn example() -> kanban_grid::Result<()> {
//! let store = ItemStore::new(vec![Item::new("x1", "Write docs", "todo", "team-a")])?;
//! let mut session = BoardSession::new(store, BoardConfig::default())?;
//!
//! let drag = DragResult::dropped(
//!     "x1",
//!     CellLocation::new("team-a", "todo", 0),
//!     CellLocation::new("team-b", "review", 0),
//! );
//! assert!(session.dispatch(&drag.into()).is_changed());
//!
//! let views = session.views();
//! assert_eq!(views.stats.get(&"review".into(), &"team-b".into()), 1);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Snapshot Format
//!
//! ```text
//! version: 1
//! columns:    [{id, title, color, is_visible, is_collapsed, order}, ...]
//! swimlanes:  [{id, title, is_collapsed}, ...]
//! items:      [{id, title, description?, assignee?, priority?,
//!               swimlane, column_id, created_at, tags?}, ...]
//! ```
//!
//! Snapshots are JSON or YAML, chosen by file extension. Event files for
//! replay are JSON lines of [`BoardEvent`].

pub mod board;
pub mod derive;
mod error;
mod logging;
pub mod reassign;
pub mod sample;
pub mod session;
pub mod settings;
pub mod snapshot;
pub mod store;
pub mod types;

pub use board::{BoardConfig, ReferencePolicy};
pub use derive::{derive_views, derive_views_by_filter, visible_columns};
pub use derive::{BoardViews, ColumnStats, GroupedItems};
pub use error::{BoardError, Result};
pub use logging::Pretty;
pub use reassign::handle_drag_end;
pub use sample::SampleGenerator;
pub use session::{ActivityLog, BoardEvent, BoardSession, LogEntry};
pub use settings::BoardSettings;
pub use snapshot::{BoardSnapshot, SnapshotFormat, SNAPSHOT_VERSION};
pub use store::ItemStore;
pub use types::*;
