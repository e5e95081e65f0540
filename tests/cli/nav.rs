use crate::cli::support::{promptlib, setup_project, state_file};
use predicates::prelude::*;
use std::fs;

// ============================================================================
// Nav command tests
// ============================================================================

#[test]
fn test_nav_expands_active_path() {
    let dir = setup_project();

    let output = promptlib()
        .current_dir(dir.path())
        .args(["nav", "/prompt-library/prompts/coding/debugging"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Active:   coding, coding/debugging"));
    assert!(stdout.contains("[-] Coding *"));
    assert!(stdout.contains("      Debugging *"));
    assert!(stdout.contains("[+] Writing"));
    assert!(!stdout.contains("Essays"));
}

#[test]
fn test_nav_does_not_persist() {
    let dir = setup_project();

    promptlib()
        .current_dir(dir.path())
        .args(["nav", "/prompt-library/prompts/writing/essays"])
        .assert()
        .success();

    assert!(!state_file(dir.path()).exists());
}

#[test]
fn test_nav_merges_persisted_state() {
    let dir = setup_project();
    fs::create_dir_all(dir.path().join(".promptlib")).unwrap();
    fs::write(
        state_file(dir.path()),
        r#"{"coding":false,"writing":true}"#,
    )
    .unwrap();

    let output = promptlib()
        .current_dir(dir.path())
        .args(["--format", "json", "nav", "/prompt-library/prompts/coding/review"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["state"]["coding"], true);
    assert_eq!(json["state"]["writing"], true);
    assert_eq!(json["active"], serde_json::json!(["coding", "coding/review"]));
    assert_eq!(json["tree"][0]["expanded"], true);
    assert_eq!(json["tree"][0]["active"], true);
}

#[test]
fn test_nav_malformed_state_is_not_fatal() {
    let dir = setup_project();
    fs::create_dir_all(dir.path().join(".promptlib")).unwrap();
    fs::write(state_file(dir.path()), "{not json").unwrap();

    promptlib()
        .current_dir(dir.path())
        .args(["nav", "/prompt-library/prompts/writing/essays"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[-] Writing *"))
        .stderr(predicate::str::contains("malformed"));
}

#[test]
fn test_nav_outside_prefix_has_no_active_paths() {
    let dir = setup_project();

    promptlib()
        .current_dir(dir.path())
        .args(["--format", "records", "nav", "/about?tab=1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("active=0 entries=0"));
}

#[test]
fn test_nav_from_previous_location_opens_new_path() {
    let dir = setup_project();

    let output = promptlib()
        .current_dir(dir.path())
        .args([
            "--format",
            "json",
            "nav",
            "/prompt-library/prompts/coding/review",
            "--from",
            "/prompt-library/prompts/writing/essays",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["from"], "/prompt-library/prompts/writing/essays");
    assert_eq!(json["opened"], serde_json::json!(["coding", "coding/review"]));
    assert_eq!(json["unchanged"], false);
    // The previous location's paths stay open
    assert_eq!(json["state"]["writing"], true);
    assert_eq!(json["state"]["writing/essays"], true);
    assert_eq!(json["state"]["coding"], true);
    assert!(!state_file(dir.path()).exists());
}

#[test]
fn test_nav_from_ancestor_keeps_state() {
    let dir = setup_project();

    promptlib()
        .current_dir(dir.path())
        .args([
            "nav",
            "/prompt-library/prompts/coding",
            "--from",
            "/prompt-library/prompts/coding/debugging",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("From:     /prompt-library/prompts/coding/debugging"))
        .stdout(predicate::str::contains("Opened:   -"))
        .stdout(predicate::str::contains("State unchanged"));
}

#[test]
fn test_nav_from_reopens_collapsed_category() {
    let dir = setup_project();
    fs::create_dir_all(dir.path().join(".promptlib")).unwrap();
    fs::write(state_file(dir.path()), r#"{"coding":false}"#).unwrap();

    promptlib()
        .current_dir(dir.path())
        .args([
            "--format",
            "records",
            "nav",
            "/prompt-library/prompts/coding/review",
            "--from",
            "/about",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("opened=2 unchanged=false"))
        .stdout(predicate::str::contains("O coding\n"))
        .stdout(predicate::str::contains("S coding open"));
}
