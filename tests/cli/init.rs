use crate::cli::support::promptlib;
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Init command tests
// ============================================================================

#[test]
fn test_init_creates_project() {
    let dir = tempdir().unwrap();

    promptlib()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized promptlib project"));

    assert!(dir.path().join("promptlib.toml").is_file());
    assert!(dir
        .path()
        .join("src/content/prompts/coding/debugging/explain-error.md")
        .is_file());

    promptlib()
        .current_dir(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("coding/debugging/explain-error"));
}

#[test]
fn test_init_twice_requires_force() {
    let dir = tempdir().unwrap();

    promptlib()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success();

    promptlib()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("already exists"));

    promptlib()
        .current_dir(dir.path())
        .args(["init", "--force"])
        .assert()
        .success();
}

#[test]
fn test_init_json_format() {
    let dir = tempdir().unwrap();

    promptlib()
        .current_dir(dir.path())
        .args(["--format", "json", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"status\": \"ok\""))
        .stdout(predicate::str::contains("\"content_dir\""));
}

#[test]
fn test_init_default_config_round_trips() {
    let dir = tempdir().unwrap();

    promptlib()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success();

    let raw = std::fs::read_to_string(dir.path().join("promptlib.toml")).unwrap();
    let value: toml::Table = toml::from_str(&raw).unwrap();
    assert_eq!(value["title"].as_str(), Some("Prompt Library"));
    assert_eq!(value["base"].as_str(), Some("/prompt-library"));
}
