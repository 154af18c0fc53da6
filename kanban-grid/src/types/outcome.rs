//! Outcome of a board operation
//!
//! Board operations never fail. They either change state or leave it alone,
//! and the reason for leaving it alone is reported so callers and tests can
//! tell a cancelled drag from a stale id.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Why an operation left the board untouched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoopReason {
    /// No item with the requested id
    UnknownItem,
    /// No column with the requested id
    UnknownColumn,
    /// No swimlane with the requested id
    UnknownSwimlane,
    /// The drag ended outside any cell
    Cancelled,
    /// The drop target is where the item already is
    SameLocation,
}

impl fmt::Display for NoopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::UnknownItem => "unknown item",
            Self::UnknownColumn => "unknown column",
            Self::UnknownSwimlane => "unknown swimlane",
            Self::Cancelled => "cancelled",
            Self::SameLocation => "same location",
        };
        f.write_str(s)
    }
}

/// Result of applying an operation to the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "status", content = "reason", rename_all = "snake_case")]
pub enum Outcome {
    /// State changed
    Changed,
    /// State is exactly as before
    Unchanged(NoopReason),
}

impl Outcome {
    pub fn is_changed(&self) -> bool {
        matches!(self, Self::Changed)
    }

    /// The no-op reason, if nothing changed
    pub fn reason(&self) -> Option<NoopReason> {
        match self {
            Self::Changed => None,
            Self::Unchanged(reason) => Some(*reason),
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Changed => f.write_str("changed"),
            Self::Unchanged(reason) => write!(f, "unchanged ({})", reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_display() {
        assert_eq!(Outcome::Changed.to_string(), "changed");
        assert_eq!(
            Outcome::Unchanged(NoopReason::Cancelled).to_string(),
            "unchanged (cancelled)"
        );
    }

    #[test]
    fn test_outcome_serialization() {
        let json = serde_json::to_value(Outcome::Unchanged(NoopReason::UnknownItem)).unwrap();
        assert_eq!(json["status"], "unchanged");
        assert_eq!(json["reason"], "unknown_item");

        let json = serde_json::to_value(Outcome::Changed).unwrap();
        assert_eq!(json["status"], "changed");
    }
}
