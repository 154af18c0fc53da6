//! Incremental lookup index over the item sequence

use crate::error::{BoardError, Result};
use crate::types::{ColumnId, Item, ItemId, SwimlaneId};
use std::collections::{BTreeSet, HashMap};

/// Positions of every item, by id and by cell.
///
/// Cell sets hold sequence positions, so iterating one yields items in store
/// order. Positions never shift because items are never inserted or removed.
#[derive(Debug, Clone, Default)]
pub(crate) struct CellIndex {
    positions: HashMap<ItemId, usize>,
    cells: HashMap<ColumnId, HashMap<SwimlaneId, BTreeSet<usize>>>,
}

impl CellIndex {
    /// Index a sequence, rejecting duplicate ids
    pub(crate) fn build(items: &[Item]) -> Result<Self> {
        let mut index = Self {
            positions: HashMap::with_capacity(items.len()),
            cells: HashMap::new(),
        };

        for (position, item) in items.iter().enumerate() {
            if index.positions.insert(item.id.clone(), position).is_some() {
                return Err(BoardError::duplicate_id("item", item.id.as_str()));
            }
            index.insert(&item.column_id, &item.swimlane, position);
        }

        Ok(index)
    }

    pub(crate) fn position(&self, id: &ItemId) -> Option<usize> {
        self.positions.get(id).copied()
    }

    /// Positions in one cell, ascending
    pub(crate) fn cell(
        &self,
        column_id: &ColumnId,
        swimlane_id: &SwimlaneId,
    ) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .get(column_id)
            .and_then(|lanes| lanes.get(swimlane_id))
            .into_iter()
            .flat_map(|set| set.iter().copied())
    }

    pub(crate) fn cell_len(&self, column_id: &ColumnId, swimlane_id: &SwimlaneId) -> usize {
        self.cells
            .get(column_id)
            .and_then(|lanes| lanes.get(swimlane_id))
            .map_or(0, BTreeSet::len)
    }

    /// Move one position between cells
    pub(crate) fn relocate(
        &mut self,
        position: usize,
        from: (&ColumnId, &SwimlaneId),
        to: (&ColumnId, &SwimlaneId),
    ) {
        self.remove(from.0, from.1, position);
        self.insert(to.0, to.1, position);
    }

    fn insert(&mut self, column_id: &ColumnId, swimlane_id: &SwimlaneId, position: usize) {
        self.cells
            .entry(column_id.clone())
            .or_default()
            .entry(swimlane_id.clone())
            .or_default()
            .insert(position);
    }

    fn remove(&mut self, column_id: &ColumnId, swimlane_id: &SwimlaneId, position: usize) {
        let Some(lanes) = self.cells.get_mut(column_id) else {
            return;
        };
        if let Some(set) = lanes.get_mut(swimlane_id) {
            set.remove(&position);
            if set.is_empty() {
                lanes.remove(swimlane_id);
            }
        }
        if lanes.is_empty() {
            self.cells.remove(column_id);
        }
    }
}
