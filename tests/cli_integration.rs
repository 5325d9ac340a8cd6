//! CLI integration tests.
//!
//! These tests invoke the folio binary and verify command output and
//! behaviour. The interactive view needs a tty and is exercised at the state
//! level in unit tests instead.

#![allow(deprecated)] // cargo_bin is deprecated but still works

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to get a Command for the folio binary.
fn folio() -> Command {
    Command::cargo_bin("folio").unwrap()
}

/// Helper to write a content override file and return its directory.
fn setup_content(toml: &str) -> (TempDir, std::path::PathBuf) {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("profile.toml");
    fs::write(&path, toml).unwrap();
    (temp, path)
}

const MINIMAL_PROFILE: &str = r#"
name = "Ada Lovelace"
status = "Open to consulting"
headline = "Analyst"
tagline = "First programmer."
location = "London"
hero_phrases = ["Ada"]
"#;

// ============================================================================
// Basic CLI tests
// ============================================================================

#[test]
fn test_version_flag() {
    folio()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("folio"));
}

#[test]
fn test_help_lists_commands() {
    folio()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("view"))
        .stdout(predicate::str::contains("intro"))
        .stdout(predicate::str::contains("content"))
        .stdout(predicate::str::contains("completions"));
}

// ============================================================================
// Content command tests
// ============================================================================

#[test]
fn test_content_outputs_builtin_profile_json() {
    folio()
        .arg("content")
        .assert()
        .success()
        .stdout(predicate::str::contains("Sanjoy Dey"))
        .stdout(predicate::str::contains("Sanjoy_Tube"))
        .stdout(predicate::str::contains("Hack4Bengal"));
}

#[test]
fn test_content_output_is_valid_json() {
    let output = folio().arg("content").output().unwrap();
    assert!(output.status.success());
    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed["name"], "Sanjoy Dey");
    assert!(parsed["projects"].as_array().unwrap().len() >= 4);
}

#[test]
fn test_content_pretty_prints() {
    folio()
        .args(["content", "--pretty"])
        .assert()
        .success()
        .stdout(predicate::str::contains("{\n"));
}

#[test]
fn test_content_honours_override_file() {
    let (_temp, path) = setup_content(MINIMAL_PROFILE);
    folio()
        .args(["content", "-C"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Ada Lovelace"))
        .stdout(predicate::str::contains("Ada Lovelace").and(predicate::str::contains("Sanjoy").not()));
}

#[test]
fn test_content_rejects_bad_toml() {
    let (_temp, path) = setup_content("name = ");
    folio()
        .args(["content", "-C"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse content TOML"));
}

#[test]
fn test_content_rejects_missing_file() {
    folio()
        .args(["content", "-C", "/nonexistent/profile.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read content file"));
}

// ============================================================================
// Intro command tests
// ============================================================================

#[test]
fn test_intro_plays_and_finishes() {
    folio()
        .args(["intro", "-n", "1", "--speed", "1", "--pause", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Hello, I'm"));
}

#[test]
fn test_intro_zero_cycles_still_prints_name() {
    let (_temp, path) = setup_content(MINIMAL_PROFILE);
    folio()
        .args(["intro", "-n", "0", "--speed", "1", "--pause", "1", "-C"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Ada"));
}

#[test]
fn test_intro_rejects_empty_phrase_list() {
    let (_temp, path) = setup_content(
        r#"
name = "Nobody"
status = "n/a"
headline = "n/a"
tagline = "n/a"
location = "n/a"
hero_phrases = []
"#,
    );
    folio()
        .args(["intro", "--speed", "1", "--pause", "1", "-C"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("phrase list is empty"));
}

// ============================================================================
// Completions command tests
// ============================================================================

#[test]
fn test_completions_bash() {
    folio()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("folio"));
}

#[test]
fn test_completions_zsh() {
    folio().args(["completions", "zsh"]).assert().success();
}

#[test]
fn test_completions_unsupported_shell() {
    folio()
        .args(["completions", "powershell"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported shell"));
}
