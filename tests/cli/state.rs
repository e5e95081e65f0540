use crate::cli::support::{promptlib, setup_project, state_file};
use predicates::prelude::*;
use std::fs;

fn write_state(root: &std::path::Path, raw: &str) {
    fs::create_dir_all(root.join(".promptlib")).unwrap();
    fs::write(state_file(root), raw).unwrap();
}

// ============================================================================
// State command tests
// ============================================================================

#[test]
fn test_state_show_empty() {
    let dir = setup_project();

    promptlib()
        .current_dir(dir.path())
        .args(["state", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No persisted sidebar state"));
}

#[test]
fn test_state_show_after_toggle() {
    let dir = setup_project();

    promptlib()
        .current_dir(dir.path())
        .args(["toggle", "coding", "--close"])
        .assert()
        .success();

    promptlib()
        .current_dir(dir.path())
        .args(["state", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("coding closed"));
}

#[test]
fn test_state_show_json() {
    let dir = setup_project();
    write_state(dir.path(), r#"{"coding":true,"writing":false}"#);

    let output = promptlib()
        .current_dir(dir.path())
        .args(["--format", "json", "state", "show"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json, serde_json::json!({ "coding": true, "writing": false }));
}

#[test]
fn test_state_clear() {
    let dir = setup_project();
    write_state(dir.path(), r#"{"coding":true}"#);

    promptlib()
        .current_dir(dir.path())
        .args(["state", "clear"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cleared sidebar state"));
    assert!(!state_file(dir.path()).exists());

    // Clearing twice is fine
    promptlib()
        .current_dir(dir.path())
        .args(["state", "clear"])
        .assert()
        .success();
}

#[test]
fn test_state_prune_removes_stale_entries() {
    let dir = setup_project();
    write_state(dir.path(), r#"{"coding":true,"gone":true,"writing/old":false}"#);

    promptlib()
        .current_dir(dir.path())
        .args(["state", "prune"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed gone"))
        .stdout(predicate::str::contains("Removed writing/old"))
        .stdout(predicate::str::contains("Pruned 2 entries, 1 remaining"));

    assert_eq!(
        fs::read_to_string(state_file(dir.path())).unwrap(),
        r#"{"coding":true}"#
    );
}

#[test]
fn test_state_prune_without_state() {
    let dir = setup_project();

    promptlib()
        .current_dir(dir.path())
        .args(["state", "prune"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No persisted sidebar state"));
    assert!(!state_file(dir.path()).exists());
}

#[test]
fn test_stale_entries_survive_navigation() {
    let dir = setup_project();
    write_state(dir.path(), r#"{"gone":true}"#);

    promptlib()
        .current_dir(dir.path())
        .args(["toggle", "writing"])
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(state_file(dir.path())).unwrap(),
        r#"{"gone":true,"writing":true}"#
    );
}
