//! CLI binary integration tests using assert_cmd + predicates.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn cmd() -> Command {
    Command::cargo_bin("randjson").expect("binary should exist")
}

// ── Determinism ─────────────────────────────────────────────────────────────

#[test]
fn test_same_seed_same_output() {
    let first = cmd().args(["--seed", "42"]).output().unwrap();
    let second = cmd().args(["--seed", "42"]).output().unwrap();
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn test_count_run_is_reproducible() {
    let first = cmd().args(["--seed", "7", "--count", "5"]).output().unwrap();
    let second = cmd().args(["--seed", "7", "--count", "5"]).output().unwrap();
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

// ── Output shape ────────────────────────────────────────────────────────────

#[test]
fn test_output_is_valid_json() {
    let out = cmd().args(["--seed", "7"]).output().unwrap();
    assert!(out.status.success());
    let text = String::from_utf8(out.stdout).unwrap();
    let value: serde_json::Value = serde_json::from_str(text.trim()).unwrap();
    assert!(value.is_object());
}

#[test]
fn test_count_emits_one_document_per_line() {
    let out = cmd()
        .args(["--seed", "1", "--count", "3"])
        .output()
        .unwrap();
    assert!(out.status.success());
    let text = String::from_utf8(out.stdout).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    for line in lines {
        let _: serde_json::Value = serde_json::from_str(line).unwrap();
    }
}

#[test]
fn test_pretty_format_parses() {
    let out = cmd()
        .args(["--seed", "42", "--format", "pretty"])
        .output()
        .unwrap();
    assert!(out.status.success());
    let text = String::from_utf8(out.stdout).unwrap();
    let _: serde_json::Value = serde_json::from_str(&text).unwrap();
}

#[test]
fn test_write_to_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("doc.json");

    cmd()
        .args(["--seed", "42"])
        .args(["-o", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let content = fs::read_to_string(&path).expect("output file should exist");
    let _: serde_json::Value = serde_json::from_str(content.trim()).unwrap();
}

// ── Configuration ───────────────────────────────────────────────────────────

#[test]
fn test_zero_max_keys_fails() {
    cmd()
        .args(["--seed", "1", "--max-keys", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("max-keys"));
}

#[test]
fn test_clock_seeded_run_succeeds() {
    let out = cmd().output().unwrap();
    assert!(out.status.success());
    let text = String::from_utf8(out.stdout).unwrap();
    let _: serde_json::Value = serde_json::from_str(text.trim()).unwrap();
}
