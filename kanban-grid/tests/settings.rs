//! Settings layering: defaults, files and environment

use kanban_grid::{BoardSettings, ReferencePolicy};
use serial_test::serial;
use std::fs;
use tempfile::TempDir;

struct EnvGuard(&'static str);

impl EnvGuard {
    fn set(key: &'static str, value: &str) -> Self {
        std::env::set_var(key, value);
        Self(key)
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        std::env::remove_var(self.0);
    }
}

#[test]
#[serial]
fn test_env_alone_overrides_defaults() {
    let temp = TempDir::new().unwrap();
    let _policy = EnvGuard::set("KANBAN_GRID_REFERENCE_POLICY", "lenient");
    let _seed = EnvGuard::set("KANBAN_GRID_SEED", "99");

    let settings = BoardSettings::load_from_dir(temp.path()).unwrap();
    assert_eq!(settings.reference_policy, ReferencePolicy::Lenient);
    assert_eq!(settings.seed, Some(99));
    assert_eq!(settings.sample_count, 5000);
}

#[test]
#[serial]
fn test_explicit_yaml_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("board-settings.yml");
    fs::write(&path, "sample_count: 25\nactivity_capacity: 8\n").unwrap();

    let settings = BoardSettings::load_file(&path).unwrap();
    assert_eq!(settings.sample_count, 25);
    assert_eq!(settings.activity_capacity, 8);
    assert_eq!(settings.reference_policy, ReferencePolicy::Strict);
}

#[test]
#[serial]
fn test_env_zero_capacity_fails_validation() {
    let temp = TempDir::new().unwrap();
    let _capacity = EnvGuard::set("KANBAN_GRID_ACTIVITY_CAPACITY", "0");

    assert!(BoardSettings::load_from_dir(temp.path()).is_err());
}

#[test]
#[serial]
fn test_bad_policy_value_is_config_error() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("kanban-grid.json"),
        r#"{"reference_policy": "sloppy"}"#,
    )
    .unwrap();

    let err = BoardSettings::load_from_dir(temp.path()).unwrap_err();
    assert!(matches!(err, kanban_grid::BoardError::Config(_)));
}
