//! Board-level types: Column, Swimlane

use super::ids::{ColumnId, SwimlaneId};
use serde::{Deserialize, Serialize};

/// A column defines a workflow stage
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Column {
    pub id: ColumnId,
    pub title: String,
    /// CSS hex color, e.g. `#2196f3`
    pub color: String,
    #[serde(default = "default_true")]
    pub is_visible: bool,
    #[serde(default)]
    pub is_collapsed: bool,
    /// Left-to-right position among visible columns. Need not be unique.
    pub order: i64,
}

impl Column {
    /// Create a visible, expanded column
    pub fn new(
        id: impl Into<ColumnId>,
        title: impl Into<String>,
        color: impl Into<String>,
        order: i64,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            color: color.into(),
            is_visible: true,
            is_collapsed: false,
            order,
        }
    }

    pub fn hidden(mut self) -> Self {
        self.is_visible = false;
        self
    }
}

/// A swimlane provides horizontal grouping orthogonal to columns
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Swimlane {
    pub id: SwimlaneId,
    pub title: String,
    #[serde(default)]
    pub is_collapsed: bool,
}

impl Swimlane {
    /// Create an expanded swimlane
    pub fn new(id: impl Into<SwimlaneId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            is_collapsed: false,
        }
    }
}

fn default_true() -> bool {
    true
}
