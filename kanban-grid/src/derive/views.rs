//! Derived view types: ColumnStats, GroupedItems, BoardViews

use crate::types::{ColumnId, Item, SwimlaneId};
use indexmap::IndexMap;
use serde::Serialize;

/// Item counts per column, then per swimlane.
///
/// Every configured column and swimlane has an entry, zeros included, whether
/// or not the column is visible.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ColumnStats(IndexMap<ColumnId, IndexMap<SwimlaneId, usize>>);

impl ColumnStats {
    pub(crate) fn from_map(map: IndexMap<ColumnId, IndexMap<SwimlaneId, usize>>) -> Self {
        Self(map)
    }

    /// Count for one cell; zero for unknown ids
    pub fn get(&self, column_id: &ColumnId, swimlane_id: &SwimlaneId) -> usize {
        self.0
            .get(column_id)
            .and_then(|lanes| lanes.get(swimlane_id))
            .copied()
            .unwrap_or(0)
    }

    /// Per-swimlane counts of one column
    pub fn column(&self, column_id: &ColumnId) -> Option<&IndexMap<SwimlaneId, usize>> {
        self.0.get(column_id)
    }

    /// Sum of a column across all swimlanes
    pub fn total(&self, column_id: &ColumnId) -> usize {
        self.0
            .get(column_id)
            .map_or(0, |lanes| lanes.values().sum())
    }

    /// Sum over every cell
    pub fn grand_total(&self) -> usize {
        self.0.values().flat_map(|lanes| lanes.values()).sum()
    }

    pub fn contains_column(&self, column_id: &ColumnId) -> bool {
        self.0.contains_key(column_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ColumnId, &IndexMap<SwimlaneId, usize>)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Items per swimlane, then per visible column, in store order
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct GroupedItems<'a>(IndexMap<SwimlaneId, IndexMap<ColumnId, Vec<&'a Item>>>);

impl<'a> GroupedItems<'a> {
    pub(crate) fn from_map(map: IndexMap<SwimlaneId, IndexMap<ColumnId, Vec<&'a Item>>>) -> Self {
        Self(map)
    }

    /// Items in one cell; empty for hidden or unknown columns
    pub fn cell(&self, swimlane_id: &SwimlaneId, column_id: &ColumnId) -> &[&'a Item] {
        self.0
            .get(swimlane_id)
            .and_then(|columns| columns.get(column_id))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn swimlane(&self, swimlane_id: &SwimlaneId) -> Option<&IndexMap<ColumnId, Vec<&'a Item>>> {
        self.0.get(swimlane_id)
    }

    /// Whether the column is present (i.e. visible) under any swimlane
    pub fn contains_column(&self, column_id: &ColumnId) -> bool {
        self.0.values().any(|columns| columns.contains_key(column_id))
    }

    /// Column ids in display order
    pub fn column_ids(&self) -> Vec<&ColumnId> {
        self.0
            .values()
            .next()
            .map(|columns| columns.keys().collect())
            .unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&SwimlaneId, &IndexMap<ColumnId, Vec<&'a Item>>)> {
        self.0.iter()
    }

    /// Number of grouped items across all cells
    pub fn item_count(&self) -> usize {
        self.0
            .values()
            .flat_map(|columns| columns.values())
            .map(Vec::len)
            .sum()
    }
}

/// Both derived views of one board state
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BoardViews<'a> {
    pub stats: ColumnStats,
    pub grouped: GroupedItems<'a>,
    /// Items whose column or swimlane is not configured
    pub orphaned: usize,
}
