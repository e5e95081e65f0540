use crate::cli::support::{promptlib, setup_project, write_prompt};
use predicates::prelude::*;

// ============================================================================
// Tree command tests
// ============================================================================

#[test]
fn test_tree_display_order_and_depth() {
    let dir = setup_project();

    let output = promptlib()
        .current_dir(dir.path())
        .arg("tree")
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec![
            "Coding (coding)",
            "  Debugging (coding/debugging)",
            "Productivity (productivity)",
            "Writing (writing)",
            "  Essays (writing/essays)",
        ]
    );
}

#[test]
fn test_tree_skips_root_level_prompts() {
    let dir = setup_project();
    write_prompt(dir.path(), "readme", "Read me", "Other", &[], "2024-01-01");

    promptlib()
        .current_dir(dir.path())
        .arg("tree")
        .assert()
        .success()
        .stdout(predicate::str::contains("Readme").not());
}

#[test]
fn test_tree_sorts_case_insensitively() {
    let dir = setup_project();
    write_prompt(dir.path(), "Art/sketch", "Sketch", "Other", &[], "2024-01-01");
    write_prompt(dir.path(), "banking/budget", "Budget", "Other", &[], "2024-01-01");

    let output = promptlib()
        .current_dir(dir.path())
        .args(["--format", "records", "tree"])
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    let roots: Vec<&str> = stdout
        .lines()
        .filter(|l| l.starts_with("T 0 "))
        .collect();
    assert_eq!(
        roots,
        vec![
            "T 0 Art \"Art\"",
            "T 0 banking \"Banking\"",
            "T 0 coding \"Coding\"",
            "T 0 productivity \"Productivity\"",
            "T 0 writing \"Writing\"",
        ]
    );
}

#[test]
fn test_tree_json_is_nested() {
    let dir = setup_project();

    let output = promptlib()
        .current_dir(dir.path())
        .args(["--format", "json", "tree"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let roots = json.as_array().unwrap();
    assert_eq!(roots.len(), 3);
    assert_eq!(roots[0]["name"], "Coding");
    assert_eq!(roots[0]["children"][0]["path"], "coding/debugging");
    assert_eq!(roots[1]["children"], serde_json::json!([]));
}
