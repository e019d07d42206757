//! Smoke tests to verify command wiring

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_help_lists_commands() {
    let mut cmd = Command::cargo_bin("unibridge").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("init-schema"));
}

#[test]
fn test_serve_help() {
    let mut cmd = Command::cargo_bin("unibridge").unwrap();
    cmd.arg("serve").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("--cors-permissive"))
        .stdout(predicate::str::contains("DB_HOST"));
}

#[test]
fn test_serve_requires_database_name() {
    let mut cmd = Command::cargo_bin("unibridge").unwrap();
    cmd.arg("serve")
        .env_remove("DB_NAME")
        .env("DB_USER", "app")
        .current_dir(std::env::temp_dir());

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("--db-name"));
}
