//! Smoke tests to verify command wiring

use assert_cmd::Command;
use predicates::prelude::*;

fn trivia() -> Command {
    let mut cmd = Command::cargo_bin("trivia").unwrap();
    cmd.env_remove("DATABASE_URL").env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_help_lists_commands() {
    trivia()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("migrate"))
        .stdout(predicate::str::contains("seed"));
}

#[test]
fn test_serve_help() {
    trivia()
        .arg("serve")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--in-memory"))
        .stdout(predicate::str::contains("--category"))
        .stdout(predicate::str::contains("--bind"));
}

#[test]
fn test_migrate_requires_database_url() {
    trivia()
        .arg("migrate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("DATABASE_URL not set"));
}

#[test]
fn test_seed_requires_database_url() {
    trivia()
        .arg("seed")
        .assert()
        .failure()
        .stderr(predicate::str::contains("DATABASE_URL not set"));
}

#[test]
fn test_extra_category_requires_in_memory() {
    trivia()
        .args(["serve", "--category", "Music"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--in-memory"));
}
