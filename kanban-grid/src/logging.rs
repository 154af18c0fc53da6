//! Formatting helpers for log output

use serde::Serialize;
use std::fmt::Debug;

/// Wrapper that renders a value as YAML inside tracing statements:
///
/// ```
/// use kanban_grid::{BoardConfig, Pretty};
///
/// let board = BoardConfig::default();
/// tracing::debug!("board: {}", Pretty(&board));
/// ```
///
/// Output starts with a newline. Falls back to pretty `Debug` output when the
/// value cannot be serialized.
pub struct Pretty<T>(pub T);

impl<T: Serialize + Debug> Pretty<T> {
    fn render(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match serde_yaml_ng::to_string(&self.0) {
            Ok(yaml) => write!(f, "\n{}", yaml),
            Err(_) => write!(f, "\n{:#?}", self.0),
        }
    }
}

impl<T: Serialize + Debug> std::fmt::Display for Pretty<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.render(f)
    }
}

impl<T: Serialize + Debug> std::fmt::Debug for Pretty<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.render(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Swimlane;

    #[test]
    fn test_pretty_renders_yaml() {
        let lane = Swimlane::new("team-a", "Team Alpha");
        let out = format!("{}", Pretty(&lane));
        assert!(out.starts_with('\n'));
        assert!(out.contains("id: team-a"));
        assert!(out.contains("title: Team Alpha"));
    }

    #[test]
    fn test_pretty_debug_matches_display() {
        let lane = Swimlane::new("team-b", "Team Beta");
        assert_eq!(format!("{:?}", Pretty(&lane)), format!("{}", Pretty(&lane)));
    }
}
