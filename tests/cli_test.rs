//! End-to-end tests for argument parsing and startup failures.
//!
//! Nothing here reaches either remote API: every case fails during
//! credentials loading, before any network client is exercised.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

fn sheetsync() -> Command {
    Command::cargo_bin("sheetsync").expect("binary should exist")
}

fn credentials_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file should create");
    write!(file, "{contents}").expect("temp file should write");
    file.flush().expect("temp file should flush");
    file
}

#[test]
fn help_describes_the_arguments() {
    sheetsync()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("credentials"))
        .stdout(predicate::str::contains("--owner"))
        .stdout(predicate::str::contains("--repo"));
}

#[test]
fn missing_credentials_path_is_a_usage_error() {
    sheetsync()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn unreadable_credentials_file_fails_before_any_network_call() {
    sheetsync()
        .arg("/nonexistent/creds.json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read credentials file"));
}

#[test]
fn malformed_credentials_json_is_reported() {
    let file = credentials_file("{not json");

    sheetsync()
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed credentials file"));
}

#[test]
fn empty_github_token_is_rejected() {
    let file = credentials_file(
        r#"{
            "gh_token": "",
            "sheet_key": "1AbCdEf",
            "google_creds": {"client_email": "a@b.c", "private_key": "pem"}
        }"#,
    );

    sheetsync()
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("gh_token"));
}
