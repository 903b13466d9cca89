//! CLI Integration Tests
//!
//! These tests verify the CLI commands work correctly end-to-end.
//! They test the "wiring" between the CLI and the site crates.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

// ============================================================================
// Test Utilities
// ============================================================================

fn cli_cmd() -> Command {
    Command::cargo_bin("ta-site-cli").expect("Failed to find ta-site-cli binary")
}

fn write_config(dir: &TempDir, json: &str) -> std::path::PathBuf {
    let path = dir.path().join("site.json");
    std::fs::write(&path, json).unwrap();
    path
}

// ============================================================================
// Export Command Tests
// ============================================================================

#[test]
fn test_export_writes_document() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("index.html");

    cli_cmd()
        .arg("export")
        .arg("--out")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote"));

    let html = std::fs::read_to_string(&out).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    for id in ["services", "niche", "pricing", "faq", "contact"] {
        assert!(html.contains(&format!(r#"id="{}""#, id)), "missing #{}", id);
    }
    assert!(html.contains("$495"));
    assert!(html.contains("Most Popular"));
}

#[test]
fn test_export_creates_parent_directories() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("public").join("site").join("index.html");

    cli_cmd().arg("export").arg("--out").arg(&out).assert().success();

    assert!(out.exists());
}

#[test]
fn test_export_applies_config() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, r#"{ "email": "books@example.org", "copyright_year": 2030 }"#);
    let out = dir.path().join("index.html");

    cli_cmd()
        .arg("--config")
        .arg(&config)
        .arg("export")
        .arg("--out")
        .arg(&out)
        .assert()
        .success();

    let html = std::fs::read_to_string(&out).unwrap();
    assert!(html.contains("books@example.org"));
    assert!(html.contains("2030"));
}

// ============================================================================
// Packages Command Tests
// ============================================================================

#[test]
fn test_packages_lists_three_tiers() {
    cli_cmd()
        .arg("packages")
        .assert()
        .success()
        .stdout(predicate::str::contains("Starter $495/mo"))
        .stdout(predicate::str::contains("Standard $995/mo (most popular)"))
        .stdout(predicate::str::contains("Plus $1,695/mo"))
        .stdout(predicate::str::contains("- Audit prep (lite)"));
}

#[test]
fn test_packages_marks_only_one_tier() {
    let output = cli_cmd().arg("packages").output().unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.matches("(most popular)").count(), 1);
}

// ============================================================================
// Info Command Tests
// ============================================================================

#[test]
fn test_info_shows_defaults() {
    cli_cmd()
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains("Tawfik & Amro Nonprofit Accounting"))
        .stdout(predicate::str::contains("Email: hello@ta-nonprofit.com"))
        .stdout(predicate::str::contains("Phone: (555) 555-0199"));
}

// ============================================================================
// Error Handling Tests
// ============================================================================

#[test]
fn test_missing_config_fails() {
    let dir = TempDir::new().unwrap();

    cli_cmd()
        .arg("--config")
        .arg(dir.path().join("absent.json"))
        .arg("info")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load site config"));
}

#[test]
fn test_invalid_config_fails() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, r#"{ "email": "nobody" }"#);

    cli_cmd()
        .arg("--config")
        .arg(&config)
        .arg("info")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid config"));
}

#[test]
fn test_unknown_command_fails() {
    cli_cmd().arg("deploy").assert().failure();
}
