//! Board configuration: columns, swimlanes and their display toggles

use crate::error::{BoardError, Result};
use crate::types::{CellLocation, Column, ColumnId, NoopReason, Outcome, Swimlane, SwimlaneId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, trace};

/// How item references to columns and swimlanes are checked at the boundary
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReferencePolicy {
    /// Unknown columns/swimlanes are rejected (restore fails, drops are ignored)
    #[default]
    Strict,
    /// Unknown references are kept; such items drop out of the grid views
    Lenient,
}

/// Ordered columns and swimlanes of one board.
///
/// The lists never change length or order after construction; only the
/// visibility and collapse flags are mutable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardConfig {
    columns: Vec<Column>,
    swimlanes: Vec<Swimlane>,
}

impl BoardConfig {
    /// Build a board, rejecting duplicate column or swimlane ids
    pub fn new(columns: Vec<Column>, swimlanes: Vec<Swimlane>) -> Result<Self> {
        let mut seen = HashSet::new();
        for column in &columns {
            if !seen.insert(column.id.as_str()) {
                return Err(BoardError::duplicate_id("column", column.id.as_str()));
            }
        }

        let mut seen = HashSet::new();
        for swimlane in &swimlanes {
            if !seen.insert(swimlane.id.as_str()) {
                return Err(BoardError::duplicate_id("swimlane", swimlane.id.as_str()));
            }
        }

        Ok(Self { columns, swimlanes })
    }

    /// The five standard workflow columns
    pub fn default_columns() -> Vec<Column> {
        vec![
            Column::new("backlog", "Backlog", "#f44336", 0),
            Column::new("todo", "To Do", "#ff9800", 1),
            Column::new("in-progress", "In Progress", "#2196f3", 2),
            Column::new("review", "Review", "#9c27b0", 3),
            Column::new("done", "Done", "#4caf50", 4),
        ]
    }

    /// The four standard team swimlanes
    pub fn default_swimlanes() -> Vec<Swimlane> {
        vec![
            Swimlane::new("team-a", "Team Alpha"),
            Swimlane::new("team-b", "Team Beta"),
            Swimlane::new("team-c", "Team Gamma"),
            Swimlane::new("team-d", "Team Delta"),
        ]
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn swimlanes(&self) -> &[Swimlane] {
        &self.swimlanes
    }

    pub fn find_column(&self, id: &ColumnId) -> Option<&Column> {
        self.columns.iter().find(|c| &c.id == id)
    }

    pub fn find_swimlane(&self, id: &SwimlaneId) -> Option<&Swimlane> {
        self.swimlanes.iter().find(|s| &s.id == id)
    }

    /// Whether both ids are configured
    pub fn has_cell(&self, column_id: &ColumnId, swimlane_id: &SwimlaneId) -> bool {
        self.find_column(column_id).is_some() && self.find_swimlane(swimlane_id).is_some()
    }

    /// Check a (column, swimlane) reference, reporting which side is missing
    pub fn check_cell(&self, column_id: &ColumnId, swimlane_id: &SwimlaneId) -> Result<()> {
        if self.find_column(column_id).is_none() {
            return Err(BoardError::ColumnNotFound {
                id: column_id.to_string(),
            });
        }
        if self.find_swimlane(swimlane_id).is_none() {
            return Err(BoardError::SwimlaneNotFound {
                id: swimlane_id.to_string(),
            });
        }
        Ok(())
    }

    /// Visible columns in display order.
    ///
    /// Sorted ascending by `order`; equal orders keep their list position.
    pub fn visible_columns(&self) -> Vec<&Column> {
        crate::derive::visible_columns(&self.columns)
    }

    /// Flip a column's visibility
    pub fn toggle_column_visibility(&mut self, id: &ColumnId) -> Outcome {
        match self.columns.iter_mut().find(|c| &c.id == id) {
            Some(column) => {
                column.is_visible = !column.is_visible;
                debug!(column = %id, visible = column.is_visible, "toggled column visibility");
                Outcome::Changed
            }
            None => {
                trace!(column = %id, "visibility toggle for unknown column ignored");
                Outcome::Unchanged(NoopReason::UnknownColumn)
            }
        }
    }

    /// Flip a column's collapsed flag
    pub fn toggle_column_collapse(&mut self, id: &ColumnId) -> Outcome {
        match self.columns.iter_mut().find(|c| &c.id == id) {
            Some(column) => {
                column.is_collapsed = !column.is_collapsed;
                debug!(column = %id, collapsed = column.is_collapsed, "toggled column collapse");
                Outcome::Changed
            }
            None => {
                trace!(column = %id, "collapse toggle for unknown column ignored");
                Outcome::Unchanged(NoopReason::UnknownColumn)
            }
        }
    }

    /// Flip a swimlane's collapsed flag
    pub fn toggle_swimlane_collapse(&mut self, id: &SwimlaneId) -> Outcome {
        match self.swimlanes.iter_mut().find(|s| &s.id == id) {
            Some(swimlane) => {
                swimlane.is_collapsed = !swimlane.is_collapsed;
                debug!(swimlane = %id, collapsed = swimlane.is_collapsed, "toggled swimlane collapse");
                Outcome::Changed
            }
            None => {
                trace!(swimlane = %id, "collapse toggle for unknown swimlane ignored");
                Outcome::Unchanged(NoopReason::UnknownSwimlane)
            }
        }
    }

    /// Resolve a flat `<swimlane>-<column>` droppable id back to a cell.
    ///
    /// Ids may themselves contain `-`, so the string is matched against the
    /// configured pairs instead of being split. The first match in swimlane
    /// then column order wins.
    pub fn resolve_droppable(&self, droppable_id: &str, index: usize) -> Result<CellLocation> {
        for swimlane in &self.swimlanes {
            let Some(rest) = droppable_id
                .strip_prefix(swimlane.id.as_str())
                .and_then(|rest| rest.strip_prefix('-'))
            else {
                continue;
            };

            if let Some(column) = self.columns.iter().find(|c| c.id.as_str() == rest) {
                return Ok(CellLocation {
                    swimlane_id: swimlane.id.clone(),
                    column_id: column.id.clone(),
                    index,
                });
            }
        }

        Err(BoardError::UnknownDroppable {
            id: droppable_id.to_string(),
        })
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            columns: Self::default_columns(),
            swimlanes: Self::default_swimlanes(),
        }
    }
}
