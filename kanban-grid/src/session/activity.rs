//! Bounded in-memory record of dispatched events

use crate::types::Outcome;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::VecDeque;

/// A log entry recording one dispatched event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Unique ID for this log entry (ULID format)
    pub id: String,

    /// When the event was applied
    pub timestamp: DateTime<Utc>,

    /// Canonical op string (e.g., "drag item", "toggle column collapse")
    pub op: String,

    /// The event as JSON
    pub input: Value,

    pub outcome: Outcome,

    /// How long applying the event took (microseconds)
    pub duration_us: u64,
}

impl LogEntry {
    pub fn new(op: impl Into<String>, input: Value, outcome: Outcome, duration_us: u64) -> Self {
        Self {
            id: ulid::Ulid::new().to_string(),
            timestamp: Utc::now(),
            op: op.into(),
            input,
            outcome,
            duration_us,
        }
    }
}

/// Newest-first ring of log entries; the oldest entry is dropped at capacity
#[derive(Debug, Clone)]
pub struct ActivityLog {
    entries: VecDeque<LogEntry>,
    capacity: usize,
}

impl ActivityLog {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity.min(1024)),
            capacity,
        }
    }

    pub fn record(&mut self, entry: LogEntry) {
        if self.capacity == 0 {
            return;
        }
        self.entries.push_front(entry);
        self.entries.truncate(self.capacity);
    }

    /// Entries newest first, optionally limited
    pub fn entries(&self, limit: Option<usize>) -> Vec<&LogEntry> {
        let limit = limit.unwrap_or(self.entries.len());
        self.entries.iter().take(limit).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
