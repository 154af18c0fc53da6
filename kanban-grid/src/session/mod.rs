//! A board session: item store, board configuration and activity log
//!
//! [`BoardSession`] is what a presentation layer holds. It reads through the
//! accessors, writes only through [`BoardSession::dispatch`], and can be
//! captured and rebuilt with [`BoardSnapshot`].

mod activity;
mod event;

pub use activity::{ActivityLog, LogEntry};
pub use event::BoardEvent;

use crate::board::{BoardConfig, ReferencePolicy};
use crate::derive::{BoardViews, ColumnStats};
use crate::error::Result;
use crate::reassign::handle_drag_end;
use crate::logging::Pretty;
use crate::sample::{seeded_sample_anchor, SampleGenerator};
use crate::settings::BoardSettings;
use crate::snapshot::{BoardSnapshot, SNAPSHOT_VERSION};
use crate::store::ItemStore;
use crate::types::{Column, Item, Outcome, Swimlane};
use crate::BoardError;
use serde_json::Value;
use std::time::Instant;
use tracing::{debug, trace, warn};

/// Board state plus the record of what happened to it
#[derive(Debug, Clone)]
pub struct BoardSession {
    store: ItemStore,
    board: BoardConfig,
    policy: ReferencePolicy,
    activity: ActivityLog,
}

impl BoardSession {
    /// Create a session with default settings
    pub fn new(store: ItemStore, board: BoardConfig) -> Result<Self> {
        Self::with_settings(store, board, &BoardSettings::default())
    }

    /// Create a session, checking item references against `settings`' policy
    pub fn with_settings(
        store: ItemStore,
        board: BoardConfig,
        settings: &BoardSettings,
    ) -> Result<Self> {
        settings.validate()?;
        validate_references(&store, &board, settings.reference_policy)?;

        debug!(
            items = store.len(),
            columns = board.columns().len(),
            swimlanes = board.swimlanes().len(),
            "board session created"
        );

        Ok(Self {
            store,
            board,
            policy: settings.reference_policy,
            activity: ActivityLog::with_capacity(settings.activity_capacity),
        })
    }

    /// The default board filled with generated items.
    ///
    /// With a seed, the whole board is reproducible: `created_at` is anchored
    /// at [`seeded_sample_anchor`] instead of the current time.
    pub fn sample(settings: &BoardSettings) -> Result<Self> {
        let board = BoardConfig::default();
        let mut generator = SampleGenerator::new(&board);
        if let Some(seed) = settings.seed {
            generator = generator.with_seed(seed).with_now(seeded_sample_anchor());
        }
        let store = ItemStore::new(generator.generate(settings.sample_count))?;
        Self::with_settings(store, board, settings)
    }

    pub fn items(&self) -> &[Item] {
        self.store.items()
    }

    pub fn store(&self) -> &ItemStore {
        &self.store
    }

    pub fn board(&self) -> &BoardConfig {
        &self.board
    }

    pub fn columns(&self) -> &[Column] {
        self.board.columns()
    }

    pub fn swimlanes(&self) -> &[Swimlane] {
        self.board.swimlanes()
    }

    pub fn visible_columns(&self) -> Vec<&Column> {
        self.board.visible_columns()
    }

    pub fn policy(&self) -> ReferencePolicy {
        self.policy
    }

    /// Count matrix and grouping for the current state
    pub fn views(&self) -> BoardViews<'_> {
        self.store.derive(&self.board)
    }

    pub fn column_stats(&self) -> ColumnStats {
        self.views().stats
    }

    /// Apply one event and record it in the activity log
    pub fn dispatch(&mut self, event: &BoardEvent) -> Outcome {
        let start = Instant::now();

        let outcome = match event {
            BoardEvent::ToggleColumnVisibility { column_id } => {
                self.board.toggle_column_visibility(column_id)
            }
            BoardEvent::ToggleColumnCollapse { column_id } => {
                self.board.toggle_column_collapse(column_id)
            }
            BoardEvent::ToggleSwimlaneCollapse { swimlane_id } => {
                self.board.toggle_swimlane_collapse(swimlane_id)
            }
            BoardEvent::DragCompleted(drag) => {
                handle_drag_end(&mut self.store, &self.board, self.policy, drag)
            }
        };

        let duration_us = u64::try_from(start.elapsed().as_micros()).unwrap_or(u64::MAX);

        if outcome.is_changed() {
            debug!(op = event.op(), duration_us, "event applied");
        } else {
            trace!(op = event.op(), %outcome, "event had no effect");
        }

        let input = serde_json::to_value(event).unwrap_or(Value::Null);
        self.activity
            .record(LogEntry::new(event.op(), input, outcome, duration_us));

        outcome
    }

    pub fn toggle_column_visibility(&mut self, column_id: &str) -> Outcome {
        self.dispatch(&BoardEvent::toggle_column_visibility(column_id))
    }

    pub fn toggle_column_collapse(&mut self, column_id: &str) -> Outcome {
        self.dispatch(&BoardEvent::toggle_column_collapse(column_id))
    }

    pub fn toggle_swimlane_collapse(&mut self, swimlane_id: &str) -> Outcome {
        self.dispatch(&BoardEvent::toggle_swimlane_collapse(swimlane_id))
    }

    /// Recent activity, newest first
    pub fn activity(&self, limit: Option<usize>) -> Vec<&LogEntry> {
        self.activity.entries(limit)
    }

    /// Capture the persistent state; derived views are not included
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            version: SNAPSHOT_VERSION,
            columns: self.board.columns().to_vec(),
            swimlanes: self.board.swimlanes().to_vec(),
            items: self.store.items().to_vec(),
        }
    }

    /// Rebuild a session from a snapshot.
    ///
    /// Fails on an unknown version, duplicate ids, or (under the strict
    /// policy) items referencing unknown columns or swimlanes.
    pub fn restore(snapshot: BoardSnapshot, settings: &BoardSettings) -> Result<Self> {
        if snapshot.version != SNAPSHOT_VERSION {
            return Err(BoardError::UnsupportedVersion {
                found: snapshot.version,
                supported: SNAPSHOT_VERSION,
            });
        }

        let board = BoardConfig::new(snapshot.columns, snapshot.swimlanes)?;
        let store = ItemStore::new(snapshot.items)?;
        let session = Self::with_settings(store, board, settings)?;
        debug!(items = session.store.len(), "restored board: {}", Pretty(&session.board));
        Ok(session)
    }
}

fn validate_references(
    store: &ItemStore,
    board: &BoardConfig,
    policy: ReferencePolicy,
) -> Result<()> {
    match policy {
        ReferencePolicy::Strict => store
            .items()
            .iter()
            .try_for_each(|item| board.check_cell(&item.column_id, &item.swimlane)),
        ReferencePolicy::Lenient => {
            let orphaned = store
                .items()
                .iter()
                .filter(|item| !board.has_cell(&item.column_id, &item.swimlane))
                .count();
            if orphaned > 0 {
                warn!(orphaned, "items reference unknown columns or swimlanes");
            }
            Ok(())
        }
    }
}
