//! Work item types: Item, Priority

use super::ids::{ColumnId, ItemId, SwimlaneId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Item priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    /// All priorities, lowest first
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = crate::error::BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            other => Err(crate::error::BoardError::invalid_value(
                "priority",
                format!("expected low, medium or high, got '{}'", other),
            )),
        }
    }
}

/// A card on the board.
///
/// Only `column_id` and `swimlane` ever change after creation, and only through
/// reassignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    pub swimlane: SwimlaneId,
    pub column_id: ColumnId,
    pub created_at: DateTime<Utc>,
    /// Ordered; duplicates are allowed
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl Item {
    /// Create an item in the given cell, created now
    pub fn new(
        id: impl Into<ItemId>,
        title: impl Into<String>,
        column_id: impl Into<ColumnId>,
        swimlane: impl Into<SwimlaneId>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: None,
            assignee: None,
            priority: None,
            swimlane: swimlane.into(),
            column_id: column_id.into(),
            created_at: Utc::now(),
            tags: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_assignee(mut self, assignee: impl Into<String>) -> Self {
        self.assignee = Some(assignee.into());
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Whether the item sits in the given cell
    pub fn is_in(&self, column_id: &ColumnId, swimlane: &SwimlaneId) -> bool {
        &self.column_id == column_id && &self.swimlane == swimlane
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_builder() {
        let item = Item::new("x1", "Fix login", "todo", "team-a")
            .with_priority(Priority::High)
            .with_assignee("Alice")
            .with_tags(["backend", "backend"]);

        assert_eq!(item.id, "x1");
        assert_eq!(item.priority, Some(Priority::High));
        assert_eq!(item.tags, vec!["backend", "backend"]);
        assert!(item.is_in(&"todo".into(), &"team-a".into()));
        assert!(!item.is_in(&"todo".into(), &"team-b".into()));
    }

    #[test]
    fn test_item_json_shape() {
        let item = Item::new("x1", "Fix login", "todo", "team-a").with_priority(Priority::Low);
        let json = serde_json::to_value(&item).unwrap();

        assert_eq!(json["column_id"], "todo");
        assert_eq!(json["swimlane"], "team-a");
        assert_eq!(json["priority"], "low");
        assert!(json.get("description").is_none());
        assert!(json.get("tags").is_none());
    }

    #[test]
    fn test_priority_parse() {
        assert_eq!("HIGH".parse::<Priority>().unwrap(), Priority::High);
        assert!("urgent".parse::<Priority>().is_err());
    }
}
