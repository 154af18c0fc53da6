//! Error types for the board engine
//!
//! Board operations themselves are total and report no-ops through
//! [`Outcome`](crate::Outcome). These errors come from the boundaries:
//! building a store or board, restoring snapshots, file I/O and settings.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for board boundary operations
pub type Result<T> = std::result::Result<T, BoardError>;

/// Errors that can occur at the board's boundaries
#[derive(Debug, Error)]
pub enum BoardError {
    /// Item not found
    #[error("item not found: {id}")]
    ItemNotFound { id: String },

    /// Column not found
    #[error("column not found: {id}")]
    ColumnNotFound { id: String },

    /// Swimlane not found
    #[error("swimlane not found: {id}")]
    SwimlaneNotFound { id: String },

    /// Duplicate ID
    #[error("duplicate {item_type} ID: {id}")]
    DuplicateId { item_type: String, id: String },

    /// Droppable id does not name any configured cell
    #[error("droppable id does not match any cell: {id}")]
    UnknownDroppable { id: String },

    /// Snapshot written by an unsupported format version
    #[error("unsupported snapshot version {found} (supported: {supported})")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// File extension we cannot read or write
    #[error("unsupported file format: {path}")]
    UnsupportedFormat { path: PathBuf },

    /// Invalid field value
    #[error("invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML serialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// Settings could not be loaded
    #[error("configuration error: {0}")]
    Config(#[from] figment::Error),
}

impl BoardError {
    /// Create an invalid value error
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a duplicate ID error
    pub fn duplicate_id(item_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self::DuplicateId {
            item_type: item_type.into(),
            id: id.into(),
        }
    }
}
