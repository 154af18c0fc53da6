//! Serialized session state
//!
//! A snapshot holds exactly what a session needs to be rebuilt: the board's
//! columns and swimlanes (with their toggle flags) and the items. Derived views
//! and the activity log are not persisted.

use crate::error::{BoardError, Result};
use crate::types::{Column, Item, Swimlane};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

/// Current snapshot format version
pub const SNAPSHOT_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub version: u32,
    pub columns: Vec<Column>,
    pub swimlanes: Vec<Swimlane>,
    #[serde(default)]
    pub items: Vec<Item>,
}

/// On-disk encodings, chosen by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotFormat {
    Json,
    Yaml,
}

impl SnapshotFormat {
    /// `.json` is JSON, `.yaml`/`.yml` is YAML; anything else is rejected
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        match ext.as_deref() {
            Some("json") => Ok(Self::Json),
            Some("yaml") | Some("yml") => Ok(Self::Yaml),
            _ => Err(BoardError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }
}

impl BoardSnapshot {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml_ng::to_string(self)?)
    }

    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml_ng::from_str(yaml)?)
    }

    /// Write the snapshot, encoding chosen by the path's extension
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = match SnapshotFormat::from_path(path)? {
            SnapshotFormat::Json => self.to_json()?,
            SnapshotFormat::Yaml => self.to_yaml()?,
        };
        fs::write(path, content)?;
        info!(
            path = %path.display(),
            items = self.items.len(),
            "saved board snapshot"
        );
        Ok(())
    }

    /// Read a snapshot, encoding chosen by the path's extension.
    ///
    /// Only parses; version and reference checks happen in
    /// [`BoardSession::restore`](crate::BoardSession::restore).
    pub fn load(path: &Path) -> Result<Self> {
        let format = SnapshotFormat::from_path(path)?;
        let content = fs::read_to_string(path)?;
        let snapshot = match format {
            SnapshotFormat::Json => Self::from_json(&content)?,
            SnapshotFormat::Yaml => Self::from_yaml(&content)?,
        };
        info!(
            path = %path.display(),
            items = snapshot.items.len(),
            "loaded board snapshot"
        );
        Ok(snapshot)
    }
}
