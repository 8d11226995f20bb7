//! # TechSupport CLI Main Integration Tests
//!
//! File: cli/tests/main_tests.rs
//!
//! ## Overview
//!
//! Top-level behavior of the `techsupport` binary: standard flags, the
//! default command, and configuration errors surfacing as a failed exit.
//!

mod common;
use common::*;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_help_lists_subcommands() {
    techsupport_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("chat"))
        .stdout(predicate::str::contains("ask"))
        .stdout(predicate::str::contains("vocab"));
}

#[test]
fn test_version_flag() {
    techsupport_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_unknown_subcommand_fails() {
    techsupport_cmd().arg("reboot").assert().failure();
}

/// Without a subcommand the binary starts an interactive session.
#[test]
fn test_default_command_is_chat() {
    let temp = tempdir().unwrap();
    isolated_cmd(temp.path())
        .write_stdin("bye\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Welcome to the DodgySoft Technical Support System.",
        ))
        .stdout(predicate::str::contains("Nice talking to you. Bye..."));
}

#[test]
fn test_missing_explicit_config_fails() {
    let temp = tempdir().unwrap();
    isolated_cmd(temp.path())
        .args(["--config", "does-not-exist.toml", "ask", "hello"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Configuration file"))
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_malformed_project_config_fails() {
    let temp = tempdir().unwrap();
    write_config(temp.path(), ".techsupport.toml", "[session\n");
    isolated_cmd(temp.path())
        .args(["ask", "hello"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse TOML"));
}

#[test]
fn test_invalid_exit_word_fails() {
    let temp = tempdir().unwrap();
    let path = write_config(temp.path(), "bad.toml", "[session]\nexit_word = \"good bye\"\n");
    isolated_cmd(temp.path())
        .arg("--config")
        .arg(&path)
        .args(["ask", "hello"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration validation failed"));
}

#[test]
fn test_config_from_environment_variable() {
    let temp = tempdir().unwrap();
    let path = write_config(
        temp.path(),
        "env.toml",
        "[vocabulary.responses]\nhello = \"Hello from the environment.\"\n",
    );
    isolated_cmd(temp.path())
        .env("TECHSUPPORT_CONFIG", &path)
        .args(["ask", "hey"])
        .assert()
        .success()
        .stdout("Hello from the environment.\n");
}
