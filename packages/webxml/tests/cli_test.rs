//! Command-line tests for the webxml binary.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn webxml() -> Command {
    Command::cargo_bin("webxml").unwrap()
}

#[test]
fn test_parse_prints_yaml() {
    webxml()
        .arg("parse")
        .arg(fixture_path("web.xml"))
        .assert()
        .success()
        .stdout(predicate::str::starts_with("---\n"))
        .stdout(predicate::str::contains("display_name: Bookstore"))
        .stdout(predicate::str::contains("servlet_name: checkout"));
}

#[test]
fn test_parse_prints_json() {
    webxml()
        .args(["parse", "--format", "json"])
        .arg(fixture_path("web.xml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("\"display_name\": \"Bookstore\""));
}

#[test]
fn test_parse_writes_output_file() {
    let temp_dir = tempdir().unwrap();
    let output = temp_dir.path().join("web.json");

    webxml()
        .args(["parse", "--format", "json", "--output"])
        .arg(&output)
        .arg(fixture_path("web.xml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved to:"));

    let content = fs::read_to_string(&output).unwrap();
    let value: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(value["servlets"].as_array().map(Vec::len), Some(2));
}

#[test]
fn test_check_prints_summary() {
    webxml()
        .arg("check")
        .arg(fixture_path("web.xml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Servlets: 2"))
        .stdout(predicate::str::contains("Welcome files: 2"))
        .stdout(predicate::str::contains("Session timeout: 30 min"));
}

#[test]
fn test_check_accepts_doctype_descriptor() {
    webxml()
        .arg("check")
        .arg(fixture_path("web-2.3.xml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Servlets: 1"))
        .stdout(predicate::str::contains("Taglibs: 1"));
}

#[test]
fn test_unknown_element_fails() {
    let temp_dir = tempdir().unwrap();
    let input = temp_dir.path().join("web.xml");
    fs::write(&input, "<web-app><login-config/></web-app>").unwrap();

    webxml()
        .arg("check")
        .arg(&input)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "Don't know how to process <login-config> using WebAppConfiguration",
        ));
}

#[test]
fn test_missing_file_fails() {
    webxml()
        .args(["parse", "does-not-exist.xml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}
