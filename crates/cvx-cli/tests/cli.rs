//! Integration tests for the cvx binary.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn unsupported_extension_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("resume.txt");
    std::fs::write(&path, "Jane Doe").unwrap();

    Command::cargo_bin("cvx")
        .unwrap()
        .arg("extract")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported file format"));
}

#[test]
fn missing_input_is_an_error() {
    Command::cargo_bin("cvx")
        .unwrap()
        .arg("extract")
        .arg("/nonexistent/resume.pdf")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn config_show_prints_default_vocabulary() {
    Command::cargo_bin("cvx")
        .unwrap()
        .arg("config")
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("experience_keywords"));
}
