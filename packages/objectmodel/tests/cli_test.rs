//! Tests for the `adaptivecards-parse` binary.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;

fn fixture(name: &str) -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn test_parse_prints_card_json() {
    Command::cargo_bin("adaptivecards-parse")
        .unwrap()
        .arg("parse")
        .arg(fixture("expense_report.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("\"title\": \"Submitted by\""))
        .stderr(predicate::str::contains("0 warnings"));
}

#[test]
fn test_parse_reports_warnings_on_stderr() {
    Command::cargo_bin("adaptivecards-parse")
        .unwrap()
        .arg("parse")
        .arg(fixture("messy_facts.json"))
        .args(["--format", "yaml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("title: Branch"))
        .stderr(predicate::str::contains("[UnknownElementType] Unknown element type 'Rating'"))
        .stderr(predicate::str::contains("8 warnings"));
}

#[test]
fn test_parse_rejects_non_card_root() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fact_set.json");
    fs::write(&path, r#"{ "type": "FactSet", "facts": [] }"#).unwrap();

    Command::cargo_bin("adaptivecards-parse")
        .unwrap()
        .arg("parse")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Malformed AdaptiveCard"));
}

#[test]
fn test_parse_enforces_max_size() {
    Command::cargo_bin("adaptivecards-parse")
        .unwrap()
        .arg("parse")
        .arg(fixture("expense_report.json"))
        .args(["--max-size", "16"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("exceeding the maximum of 16 bytes"));
}

#[test]
fn test_types_lists_registered_parsers() {
    Command::cargo_bin("adaptivecards-parse")
        .unwrap()
        .arg("types")
        .assert()
        .success()
        .stdout(predicate::str::contains("FactSet"))
        .stdout(predicate::str::contains("Action.OpenUrl"));
}
