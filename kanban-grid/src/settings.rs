//! Session settings loaded with figment
//!
//! Sources in precedence order (later sources override earlier ones):
//! 1. Built-in defaults
//! 2. `kanban-grid.{toml,yaml,yml,json}` in the search directory, or one
//!    explicitly named file
//! 3. Environment variables prefixed `KANBAN_GRID_` (e.g.
//!    `KANBAN_GRID_SAMPLE_COUNT=200`)

use crate::board::ReferencePolicy;
use crate::error::{BoardError, Result};
use figment::{
    providers::{Env, Format, Json, Serialized, Toml, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// Prefix for environment overrides
pub const ENV_PREFIX: &str = "KANBAN_GRID_";

/// File stem searched for in the working directory
pub const CONFIG_FILE_STEM: &str = "kanban-grid";

const CONFIG_EXTENSIONS: &[&str] = &["toml", "yaml", "yml", "json"];

/// Tunables for a board session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardSettings {
    /// Items generated for a sample board
    pub sample_count: usize,
    /// Seed for reproducible sample boards; random when unset
    pub seed: Option<u64>,
    /// How dangling column/swimlane references are treated
    pub reference_policy: ReferencePolicy,
    /// Maximum activity log entries kept in memory
    pub activity_capacity: usize,
}

impl Default for BoardSettings {
    fn default() -> Self {
        Self {
            sample_count: 5000,
            seed: None,
            reference_policy: ReferencePolicy::Strict,
            activity_capacity: 256,
        }
    }
}

impl BoardSettings {
    /// Load settings, discovering a config file in the current directory
    pub fn load() -> Result<Self> {
        let cwd = std::env::current_dir()?;
        Self::load_from_dir(&cwd)
    }

    /// Load settings, discovering a config file in `dir`
    pub fn load_from_dir(dir: &Path) -> Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        for path in discover(dir) {
            trace!("merging config file {}", path.display());
            figment = merge_file(figment, &path)?;
        }

        Self::finish(figment)
    }

    /// Load settings from one explicit file (plus defaults and environment)
    pub fn load_file(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(BoardError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("config file not found: {}", path.display()),
            )));
        }

        let figment = merge_file(Figment::from(Serialized::defaults(Self::default())), path)?;
        Self::finish(figment)
    }

    fn finish(figment: Figment) -> Result<Self> {
        let settings: Self = figment.merge(Env::prefixed(ENV_PREFIX)).extract()?;
        settings.validate()?;
        debug!(
            sample_count = settings.sample_count,
            seed = ?settings.seed,
            policy = ?settings.reference_policy,
            "loaded board settings"
        );
        Ok(settings)
    }

    /// Reject values no session can run with
    pub fn validate(&self) -> Result<()> {
        if self.activity_capacity == 0 {
            return Err(BoardError::invalid_value(
                "activity_capacity",
                "must be greater than zero",
            ));
        }
        Ok(())
    }

    pub fn with_sample_count(mut self, count: usize) -> Self {
        self.sample_count = count;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_reference_policy(mut self, policy: ReferencePolicy) -> Self {
        self.reference_policy = policy;
        self
    }
}

/// Config files present in `dir`, in merge order
fn discover(dir: &Path) -> Vec<PathBuf> {
    CONFIG_EXTENSIONS
        .iter()
        .map(|ext| dir.join(format!("{}.{}", CONFIG_FILE_STEM, ext)))
        .filter(|path| path.is_file())
        .collect()
}

fn merge_file(figment: Figment, path: &Path) -> Result<Figment> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    match ext.as_deref() {
        Some("toml") => Ok(figment.merge(Toml::file(path))),
        Some("yaml") | Some("yml") => Ok(figment.merge(Yaml::file(path))),
        Some("json") => Ok(figment.merge(Json::file(path))),
        _ => Err(BoardError::UnsupportedFormat {
            path: path.to_path_buf(),
        }),
    }
}
