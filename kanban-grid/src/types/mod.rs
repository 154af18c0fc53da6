//! Core types for the board engine

mod board;
mod ids;
mod item;
mod location;
mod outcome;

// Re-export all types
pub use board::{Column, Swimlane};
pub use ids::{ColumnId, ItemId, SwimlaneId};
pub use item::{Item, Priority};
pub use location::{CellLocation, DragResult};
pub use outcome::{NoopReason, Outcome};
