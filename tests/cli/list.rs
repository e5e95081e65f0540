use crate::cli::support::{promptlib, setup_project};
use predicates::prelude::*;

// ============================================================================
// List command tests
// ============================================================================

#[test]
fn test_list_all_prompts_in_id_order() {
    let dir = setup_project();

    let output = promptlib()
        .current_dir(dir.path())
        .arg("list")
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec![
            "coding/debugging/fix-bug [Coding] Fix a bug",
            "coding/review [Coding] Review code",
            "productivity/plan-day [Productivity] Plan my day",
            "writing/essays/outline [Writing] Outline an essay",
        ]
    );
}

#[test]
fn test_list_filter_by_category() {
    let dir = setup_project();

    promptlib()
        .current_dir(dir.path())
        .args(["list", "--category", "writing"])
        .assert()
        .success()
        .stdout(predicate::str::contains("writing/essays/outline"))
        .stdout(predicate::str::contains("coding/review").not());
}

#[test]
fn test_list_filter_by_tag() {
    let dir = setup_project();

    promptlib()
        .current_dir(dir.path())
        .args(["list", "--tag", "rust"])
        .assert()
        .success()
        .stdout(predicate::str::contains("coding/debugging/fix-bug"))
        .stdout(predicate::str::contains("coding/review").not());
}

#[test]
fn test_list_no_matches() {
    let dir = setup_project();

    promptlib()
        .current_dir(dir.path())
        .args(["list", "--tag", "missing"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No prompts found"));
}

#[test]
fn test_list_unknown_category_is_usage_error() {
    let dir = setup_project();

    promptlib()
        .current_dir(dir.path())
        .args(["list", "--category", "cooking"])
        .assert()
        .code(2);
}

#[test]
fn test_list_json_format() {
    let dir = setup_project();

    let output = promptlib()
        .current_dir(dir.path())
        .args(["--format", "json", "list"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let prompts = json.as_array().unwrap();
    assert_eq!(prompts.len(), 4);
    assert_eq!(prompts[0]["id"], "coding/debugging/fix-bug");
    assert_eq!(prompts[0]["category"], "Coding");
    assert_eq!(prompts[0]["tags"], serde_json::json!(["debugging", "rust"]));
    assert!(prompts[0]["pubDate"].as_str().unwrap().starts_with("2024-02-01"));
}

#[test]
fn test_list_records_format() {
    let dir = setup_project();

    promptlib()
        .current_dir(dir.path())
        .args(["--format", "records", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("mode=list prompts=4"))
        .stdout(predicate::str::contains(
            "P coding/debugging/fix-bug Coding \"Fix a bug\" tags=debugging,rust",
        ))
        .stdout(predicate::str::contains(
            "P productivity/plan-day Productivity \"Plan my day\" tags=-",
        ));
}
