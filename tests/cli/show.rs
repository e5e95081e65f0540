use crate::cli::support::{promptlib, setup_project, write_prompt};
use predicates::prelude::*;

// ============================================================================
// Show command tests
// ============================================================================

#[test]
fn test_show_prompt() {
    let dir = setup_project();

    promptlib()
        .current_dir(dir.path())
        .args(["show", "coding/debugging/fix-bug"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Fix a bug\n"))
        .stdout(predicate::str::contains("Tags:        debugging,rust"))
        .stdout(predicate::str::contains("Published:   2024-02-01"))
        .stdout(predicate::str::contains(
            "URL:         /prompt-library/prompts/coding/debugging/fix-bug",
        ))
        .stdout(predicate::str::contains("Fix a bug, step by step."));
}

#[test]
fn test_show_accepts_surrounding_slashes() {
    let dir = setup_project();

    promptlib()
        .current_dir(dir.path())
        .args(["show", "/coding/review/"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Review code"));
}

#[test]
fn test_show_unknown_prompt_exit_code_3() {
    let dir = setup_project();

    promptlib()
        .current_dir(dir.path())
        .args(["show", "coding/missing"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("prompt not found: coding/missing"));
}

#[test]
fn test_show_json_includes_body() {
    let dir = setup_project();

    let output = promptlib()
        .current_dir(dir.path())
        .args(["--format", "json", "show", "writing/essays/outline"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["title"], "Outline an essay");
    assert_eq!(json["category"], "Writing");
    assert_eq!(json["tags"], serde_json::json!([]));
    assert!(json["body"].as_str().unwrap().contains("step by step"));
}

#[test]
fn test_show_records_format() {
    let dir = setup_project();

    promptlib()
        .current_dir(dir.path())
        .args(["--format", "records", "show", "coding/review"])
        .assert()
        .success()
        .stdout(predicate::str::contains("mode=show id=coding/review"))
        .stdout(predicate::str::contains("B coding/review"))
        .stdout(predicate::str::contains("B-END"));
}

#[test]
fn test_show_by_slugified_id() {
    let dir = setup_project();
    write_prompt(
        dir.path(),
        "Coding/Pair Programming",
        "Pair with me",
        "Coding",
        &[],
        "Jul 08 2022",
    );

    promptlib()
        .current_dir(dir.path())
        .args(["show", "coding/pair-programming"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Pair with me"));
}
