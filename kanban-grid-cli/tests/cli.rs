//! End-to-end tests of the kanban-grid binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn kanban_grid(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("kanban-grid").unwrap();
    cmd.current_dir(dir)
        .env_remove("RUST_LOG")
        .env_remove("KANBAN_GRID_SAMPLE_COUNT")
        .env_remove("KANBAN_GRID_SEED")
        .env_remove("KANBAN_GRID_REFERENCE_POLICY")
        .env_remove("KANBAN_GRID_ACTIVITY_CAPACITY");
    cmd
}

fn write_board(dir: &Path) {
    let snapshot = r##"{
  "version": 1,
  "columns": [
    {"id": "todo", "title": "To Do", "color": "#ff9800", "order": 0},
    {"id": "in-progress", "title": "In Progress", "color": "#2196f3", "order": 1},
    {"id": "done", "title": "Done", "color": "#4caf50", "order": 2}
  ],
  "swimlanes": [
    {"id": "team-a", "title": "Team Alpha"},
    {"id": "team-b", "title": "Team Beta"}
  ],
  "items": [
    {"id": "x1", "title": "One", "swimlane": "team-a", "column_id": "todo", "created_at": "2024-05-01T10:00:00Z"},
    {"id": "x2", "title": "Two", "swimlane": "team-b", "column_id": "done", "created_at": "2024-05-02T10:00:00Z"}
  ]
}"##;
    fs::write(dir.join("board.json"), snapshot).unwrap();
}

fn board_json(dir: &Path) -> serde_json::Value {
    serde_json::from_str(&fs::read_to_string(dir.join("board.json")).unwrap()).unwrap()
}

#[test]
fn test_generate_then_show_json() {
    let temp = TempDir::new().unwrap();

    kanban_grid(temp.path())
        .args(["generate", "--count", "40", "--seed", "3", "--output", "sample.yaml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Generated 40 items"));

    let output = kanban_grid(temp.path())
        .args(["show", "--snapshot", "sample.yaml", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let summary: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(summary["items"], 40);
    assert_eq!(summary["orphaned"], 0);
    assert_eq!(summary["columns"].as_array().unwrap().len(), 5);
}

#[test]
fn test_seeded_generate_is_reproducible() {
    let temp = TempDir::new().unwrap();

    for output in ["first.json", "second.json"] {
        kanban_grid(temp.path())
            .args(["generate", "--count", "25", "--seed", "11", "--output", output])
            .assert()
            .success();
    }

    let first = fs::read_to_string(temp.path().join("first.json")).unwrap();
    let second = fs::read_to_string(temp.path().join("second.json")).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_show_table_marks_collapsed() {
    let temp = TempDir::new().unwrap();
    write_board(temp.path());

    kanban_grid(temp.path())
        .args(["toggle", "--snapshot", "board.json", "swimlane-collapse", "team-b"])
        .assert()
        .success()
        .stdout(predicate::str::contains("changed"));

    kanban_grid(temp.path())
        .args(["show", "--snapshot", "board.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Team Beta (collapsed)"))
        .stdout(predicate::str::contains("In Progress"));
}

#[test]
fn test_drag_rewrites_snapshot() {
    let temp = TempDir::new().unwrap();
    write_board(temp.path());

    kanban_grid(temp.path())
        .args([
            "drag", "--snapshot", "board.json", "--item", "x1", "--swimlane", "team-b",
            "--column", "in-progress",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("x1: changed"));

    let board = board_json(temp.path());
    assert_eq!(board["items"][0]["column_id"], "in-progress");
    assert_eq!(board["items"][0]["swimlane"], "team-b");
}

#[test]
fn test_drag_to_unknown_column_is_reported() {
    let temp = TempDir::new().unwrap();
    write_board(temp.path());

    kanban_grid(temp.path())
        .args([
            "drag", "--snapshot", "board.json", "--item", "x1", "--swimlane", "team-a",
            "--column", "archive",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("unchanged"));

    assert_eq!(board_json(temp.path())["items"][0]["column_id"], "todo");
}

#[test]
fn test_drag_unknown_item_fails() {
    let temp = TempDir::new().unwrap();
    write_board(temp.path());

    kanban_grid(temp.path())
        .args([
            "drag", "--snapshot", "board.json", "--item", "ghost", "--swimlane", "team-a",
            "--column", "done",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("item not found: ghost"));
}

#[test]
fn test_replay_with_save() {
    let temp = TempDir::new().unwrap();
    write_board(temp.path());
    fs::write(
        temp.path().join("events.jsonl"),
        concat!(
            "{\"type\":\"toggle_column_visibility\",\"column_id\":\"done\"}\n",
            "{\"type\":\"toggle_column_collapse\",\"column_id\":\"nope\"}\n",
            "{\"type\":\"drag_completed\",\"item_id\":\"x2\",",
            "\"source\":{\"swimlane_id\":\"team-b\",\"column_id\":\"done\"},",
            "\"destination\":{\"swimlane_id\":\"team-a\",\"column_id\":\"todo\"}}\n",
        ),
    )
    .unwrap();

    kanban_grid(temp.path())
        .args(["replay", "--snapshot", "board.json", "--events", "events.jsonl", "--save"])
        .assert()
        .success()
        .stdout(predicate::str::contains("3 events, 2 changed the board"))
        .stdout(predicate::str::contains("unchanged (unknown column)"));

    let board = board_json(temp.path());
    assert_eq!(board["columns"][2]["is_visible"], false);
    assert_eq!(board["items"][1]["column_id"], "todo");
}

#[test]
fn test_strict_settings_reject_orphaned_snapshot() {
    let temp = TempDir::new().unwrap();
    let snapshot = r##"{
  "version": 1,
  "columns": [{"id": "todo", "title": "To Do", "color": "#ff9800", "order": 0}],
  "swimlanes": [{"id": "team-a", "title": "Team Alpha"}],
  "items": [{"id": "x1", "title": "One", "swimlane": "team-a", "column_id": "archive", "created_at": "2024-05-01T10:00:00Z"}]
}"##;
    fs::write(temp.path().join("board.json"), snapshot).unwrap();

    kanban_grid(temp.path())
        .args(["show", "--snapshot", "board.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("column not found: archive"));

    fs::write(temp.path().join("kanban-grid.toml"), "reference_policy = \"lenient\"\n").unwrap();

    kanban_grid(temp.path())
        .args(["show", "--snapshot", "board.json", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"orphaned\": 1"));
}

#[test]
fn test_unsupported_snapshot_extension() {
    let temp = TempDir::new().unwrap();

    kanban_grid(temp.path())
        .args(["generate", "--count", "2", "--output", "board.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported file format"));
}
