//! Derivation engine: per-cell counts and per-cell groupings
//!
//! Two entry points produce identical [`BoardViews`]:
//!
//! - [`derive_views`] is a pure function over plain slices. It makes one pass
//!   over the items, bucketing them through a (column, swimlane) lookup built
//!   from the configuration, so it runs in O(items + columns x swimlanes).
//! - [`ItemStore::derive`] reads the store's live cell index and never scans
//!   the item sequence at all.

mod views;

pub use views::{BoardViews, ColumnStats, GroupedItems};

use crate::board::BoardConfig;
use crate::store::ItemStore;
use crate::types::{Column, ColumnId, Item, Swimlane, SwimlaneId};
use indexmap::IndexMap;
use std::collections::HashMap;
use tracing::trace;

/// Visible columns sorted by `order`, ties kept in list order
pub fn visible_columns(columns: &[Column]) -> Vec<&Column> {
    let mut visible: Vec<&Column> = columns.iter().filter(|c| c.is_visible).collect();
    visible.sort_by_key(|c| c.order);
    visible
}

/// Compute both views from plain slices.
///
/// Column and swimlane ids are assumed unique, as [`BoardConfig`] guarantees.
pub fn derive_views<'a>(
    items: &'a [Item],
    columns: &[Column],
    swimlanes: &[Swimlane],
) -> BoardViews<'a> {
    let lane_count = swimlanes.len();
    let visible = visible_columns(columns);

    let column_slot: HashMap<&ColumnId, usize> =
        columns.iter().enumerate().map(|(i, c)| (&c.id, i)).collect();
    let lane_slot: HashMap<&SwimlaneId, usize> =
        swimlanes.iter().enumerate().map(|(i, s)| (&s.id, i)).collect();
    let visible_slot: HashMap<&ColumnId, usize> =
        visible.iter().enumerate().map(|(i, c)| (&c.id, i)).collect();

    let mut counts = vec![0usize; columns.len() * lane_count];
    let mut buckets: Vec<Vec<&'a Item>> = vec![Vec::new(); lane_count * visible.len()];
    let mut orphaned = 0;

    for item in items {
        let (Some(&ci), Some(&li)) = (column_slot.get(&item.column_id), lane_slot.get(&item.swimlane))
        else {
            orphaned += 1;
            continue;
        };

        counts[ci * lane_count + li] += 1;
        if let Some(&vi) = visible_slot.get(&item.column_id) {
            buckets[li * visible.len() + vi].push(item);
        }
    }

    let stats: IndexMap<ColumnId, IndexMap<SwimlaneId, usize>> = columns
        .iter()
        .enumerate()
        .map(|(ci, column)| {
            let lanes: IndexMap<SwimlaneId, usize> = swimlanes
                .iter()
                .enumerate()
                .map(|(li, lane)| (lane.id.clone(), counts[ci * lane_count + li]))
                .collect();
            (column.id.clone(), lanes)
        })
        .collect();

    let mut buckets = buckets.into_iter();
    let grouped: IndexMap<SwimlaneId, IndexMap<ColumnId, Vec<&'a Item>>> = swimlanes
        .iter()
        .map(|lane| {
            let cells: IndexMap<ColumnId, Vec<&'a Item>> = visible
                .iter()
                .map(|column| (column.id.clone(), buckets.next().unwrap_or_default()))
                .collect();
            (lane.id.clone(), cells)
        })
        .collect();

    trace!(
        items = items.len(),
        columns = columns.len(),
        swimlanes = lane_count,
        orphaned,
        "derived board views"
    );

    BoardViews {
        stats: ColumnStats::from_map(stats),
        grouped: GroupedItems::from_map(grouped),
        orphaned,
    }
}

/// Compute both views by filtering the whole item list once per cell.
///
/// O(items x columns x swimlanes). Kept as the reference the indexed paths
/// are checked and benchmarked against.
pub fn derive_views_by_filter<'a>(
    items: &'a [Item],
    columns: &[Column],
    swimlanes: &[Swimlane],
) -> BoardViews<'a> {
    let stats: IndexMap<ColumnId, IndexMap<SwimlaneId, usize>> = columns
        .iter()
        .map(|column| {
            let lanes: IndexMap<SwimlaneId, usize> = swimlanes
                .iter()
                .map(|lane| {
                    let count = items.iter().filter(|i| i.is_in(&column.id, &lane.id)).count();
                    (lane.id.clone(), count)
                })
                .collect();
            (column.id.clone(), lanes)
        })
        .collect();

    let visible = visible_columns(columns);
    let grouped: IndexMap<SwimlaneId, IndexMap<ColumnId, Vec<&'a Item>>> = swimlanes
        .iter()
        .map(|lane| {
            let cells: IndexMap<ColumnId, Vec<&'a Item>> = visible
                .iter()
                .map(|column| {
                    let cell: Vec<&'a Item> = items
                        .iter()
                        .filter(|i| i.is_in(&column.id, &lane.id))
                        .collect();
                    (column.id.clone(), cell)
                })
                .collect();
            (lane.id.clone(), cells)
        })
        .collect();

    let orphaned = items
        .iter()
        .filter(|i| {
            !columns.iter().any(|c| c.id == i.column_id)
                || !swimlanes.iter().any(|s| s.id == i.swimlane)
        })
        .count();

    BoardViews {
        stats: ColumnStats::from_map(stats),
        grouped: GroupedItems::from_map(grouped),
        orphaned,
    }
}

impl ItemStore {
    /// Compute both views from the store's cell index
    pub fn derive(&self, board: &BoardConfig) -> BoardViews<'_> {
        let index = self.index();
        let items = self.items();

        let mut placed = 0;
        let stats: IndexMap<ColumnId, IndexMap<SwimlaneId, usize>> = board
            .columns()
            .iter()
            .map(|column| {
                let lanes: IndexMap<SwimlaneId, usize> = board
                    .swimlanes()
                    .iter()
                    .map(|lane| {
                        let count = index.cell_len(&column.id, &lane.id);
                        placed += count;
                        (lane.id.clone(), count)
                    })
                    .collect();
                (column.id.clone(), lanes)
            })
            .collect();

        let visible = board.visible_columns();
        let grouped: IndexMap<SwimlaneId, IndexMap<ColumnId, Vec<&Item>>> = board
            .swimlanes()
            .iter()
            .map(|lane| {
                let cells: IndexMap<ColumnId, Vec<&Item>> = visible
                    .iter()
                    .map(|column| {
                        let cell: Vec<&Item> =
                            index.cell(&column.id, &lane.id).map(|p| &items[p]).collect();
                        (column.id.clone(), cell)
                    })
                    .collect();
                (lane.id.clone(), cells)
            })
            .collect();

        BoardViews {
            stats: ColumnStats::from_map(stats),
            grouped: GroupedItems::from_map(grouped),
            orphaned: items.len() - placed,
        }
    }
}
