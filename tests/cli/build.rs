use crate::cli::support::{promptlib, setup_project};
use predicates::prelude::*;
use std::fs;

// ============================================================================
// Build command tests
// ============================================================================

#[test]
fn test_build_renders_site() {
    let dir = setup_project();

    promptlib()
        .current_dir(dir.path())
        .arg("build")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Built 10 pages (4 prompts, 5 categories)",
        ));

    let out = dir.path().join("dist");
    assert!(out.join("index.html").is_file());
    assert!(out.join("prompts/coding/index.html").is_file());
    assert!(out.join("prompts/writing/essays/outline/index.html").is_file());
    assert!(!out.join("sitemap.xml").exists());

    let page = fs::read_to_string(out.join("prompts/coding/debugging/fix-bug/index.html")).unwrap();
    assert!(page.contains("<title>Fix a bug | Test Prompts</title>"));
    assert!(page.contains("<details data-path=\"coding\" data-active open>"));
    assert!(page.contains("<details data-path=\"writing\">"));
    assert!(page.contains("data-copy-target=\"prompt-source\""));
}

#[test]
fn test_build_out_flag() {
    let dir = setup_project();

    promptlib()
        .current_dir(dir.path())
        .args(["build", "--out", "public"])
        .assert()
        .success();

    assert!(dir.path().join("public/index.html").is_file());
    assert!(!dir.path().join("dist").exists());
}

#[test]
fn test_build_sitemap_when_site_configured() {
    let dir = setup_project();
    fs::write(
        dir.path().join("promptlib.toml"),
        "site = \"https://example.github.io\"\nbase = \"/library\"\n",
    )
    .unwrap();

    promptlib()
        .current_dir(dir.path())
        .arg("build")
        .assert()
        .success()
        .stdout(predicate::str::contains("Sitemap:"));

    let xml = fs::read_to_string(dir.path().join("dist/sitemap.xml")).unwrap();
    assert!(xml.contains("<loc>https://example.github.io/library</loc>"));
    assert!(xml.contains("<loc>https://example.github.io/library/prompts/coding/review</loc>"));
}

#[test]
fn test_build_with_state_seeds_sidebar() {
    let dir = setup_project();

    promptlib()
        .current_dir(dir.path())
        .args(["toggle", "writing"])
        .assert()
        .success();

    promptlib()
        .current_dir(dir.path())
        .arg("build")
        .assert()
        .success();
    let home = fs::read_to_string(dir.path().join("dist/index.html")).unwrap();
    assert!(home.contains("<details data-path=\"writing\">"));

    promptlib()
        .current_dir(dir.path())
        .args(["build", "--with-state"])
        .assert()
        .success();
    let home = fs::read_to_string(dir.path().join("dist/index.html")).unwrap();
    assert!(home.contains("<details data-path=\"writing\" open>"));
}

#[test]
fn test_build_json_report() {
    let dir = setup_project();

    let output = promptlib()
        .current_dir(dir.path())
        .args(["--format", "json", "build"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["pages"], 10);
    assert_eq!(json["prompt_pages"], 4);
    assert_eq!(json["category_pages"], 5);
    assert!(json.get("sitemap").is_none());
}
