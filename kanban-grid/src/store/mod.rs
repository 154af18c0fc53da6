//! Item store: the ordered item sequence and its single mutation

mod index;

pub(crate) use index::CellIndex;

use crate::error::Result;
use crate::types::{ColumnId, Item, ItemId, NoopReason, Outcome, SwimlaneId};
use tracing::{debug, trace};

/// The flat, ordered collection of items.
///
/// Items are created in bulk and never deleted. The only mutation is
/// [`reassign`](Self::reassign), which moves an item to another cell without
/// changing its position in the sequence.
#[derive(Debug, Clone, Default)]
pub struct ItemStore {
    items: Vec<Item>,
    index: CellIndex,
}

impl ItemStore {
    /// Build a store, rejecting duplicate item ids
    pub fn new(items: Vec<Item>) -> Result<Self> {
        let index = CellIndex::build(&items)?;
        debug!(count = items.len(), "built item store");
        Ok(Self { items, index })
    }

    /// All items in store order
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &ItemId) -> Option<&Item> {
        self.index.position(id).map(|p| &self.items[p])
    }

    /// Position of an item in the sequence
    pub fn position(&self, id: &ItemId) -> Option<usize> {
        self.index.position(id)
    }

    /// Items of one cell, in store order
    pub fn cell(&self, column_id: &ColumnId, swimlane_id: &SwimlaneId) -> Vec<&Item> {
        self.index
            .cell(column_id, swimlane_id)
            .map(|p| &self.items[p])
            .collect()
    }

    pub fn cell_len(&self, column_id: &ColumnId, swimlane_id: &SwimlaneId) -> usize {
        self.index.cell_len(column_id, swimlane_id)
    }

    /// Move an item to another cell.
    ///
    /// Unknown ids are ignored. Only `column_id` and `swimlane` change; every
    /// other field and the item's position stay as they were.
    pub fn reassign(
        &mut self,
        item_id: &ItemId,
        column_id: &ColumnId,
        swimlane_id: &SwimlaneId,
    ) -> Outcome {
        let Some(position) = self.index.position(item_id) else {
            trace!(item = %item_id, "reassign of unknown item ignored");
            return Outcome::Unchanged(NoopReason::UnknownItem);
        };

        let item = &mut self.items[position];
        if item.is_in(column_id, swimlane_id) {
            trace!(item = %item_id, "reassign to current cell ignored");
            return Outcome::Unchanged(NoopReason::SameLocation);
        }

        self.index.relocate(
            position,
            (&item.column_id, &item.swimlane),
            (column_id, swimlane_id),
        );

        debug!(
            item = %item_id,
            from_column = %item.column_id,
            from_swimlane = %item.swimlane,
            to_column = %column_id,
            to_swimlane = %swimlane_id,
            "reassigned item"
        );

        item.column_id = column_id.clone();
        item.swimlane = swimlane_id.clone();
        Outcome::Changed
    }

    pub(crate) fn index(&self) -> &CellIndex {
        &self.index
    }

    /// Give the items back, dropping the index
    pub fn into_items(self) -> Vec<Item> {
        self.items
    }
}

impl PartialEq for ItemStore {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}
