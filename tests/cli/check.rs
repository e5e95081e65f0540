use crate::cli::support::{content_dir, promptlib, setup_project};
use predicates::prelude::*;
use std::fs;

// ============================================================================
// Check command tests
// ============================================================================

#[test]
fn test_check_valid_project() {
    let dir = setup_project();

    promptlib()
        .current_dir(dir.path())
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("4 valid, 0 invalid"));
}

#[test]
fn test_check_reports_every_invalid_file() {
    let dir = setup_project();
    let content = content_dir(dir.path());
    fs::write(content.join("coding/no-frontmatter.md"), "Just text\n").unwrap();
    fs::write(
        content.join("coding/bad-category.md"),
        "---\ntitle: Bad\ndescription: d\ncategory: Cooking\npubDate: 2024-01-01\n---\nBody\n",
    )
    .unwrap();

    promptlib()
        .current_dir(dir.path())
        .arg("check")
        .assert()
        .code(3)
        .stdout(predicate::str::contains("no-frontmatter.md"))
        .stdout(predicate::str::contains("bad-category.md"))
        .stdout(predicate::str::contains("4 valid, 2 invalid"))
        .stderr(predicate::str::contains("2 invalid prompt file(s)"));
}

#[test]
fn test_check_json_format() {
    let dir = setup_project();
    fs::write(
        content_dir(dir.path()).join("writing/undated.md"),
        "---\ntitle: Undated\ndescription: d\ncategory: Writing\npubDate: someday\n---\n",
    )
    .unwrap();

    let output = promptlib()
        .current_dir(dir.path())
        .args(["--format", "json", "check"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3));

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["valid"], 4);
    let invalid = json["invalid"].as_array().unwrap();
    assert_eq!(invalid.len(), 1);
    assert!(invalid[0]["path"].as_str().unwrap().ends_with("undated.md"));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("\"type\":\"validation_failed\""));
}

#[test]
fn test_invalid_prompt_fails_other_commands() {
    let dir = setup_project();
    fs::write(content_dir(dir.path()).join("coding/broken.md"), "no header").unwrap();

    promptlib()
        .current_dir(dir.path())
        .arg("list")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("broken.md"));
}

#[test]
fn test_missing_content_dir() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("promptlib.toml"), "content_dir = \"nope\"\n").unwrap();

    promptlib()
        .current_dir(dir.path())
        .arg("check")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("content directory not found"));
}
