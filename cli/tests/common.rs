//! # TechSupport CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! Shared helpers for the integration tests in `cli/tests/`. Each test file
//! declares `mod common;` to use them.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};

/// # Get TechSupport Command (`techsupport_cmd`)
///
/// Creates an `assert_cmd::Command` for the compiled `techsupport` binary.
///
/// ## Panics
/// Panics if the binary cannot be found via `Command::cargo_bin`.
pub fn techsupport_cmd() -> Command {
    Command::cargo_bin("techsupport").expect("Failed to find techsupport binary for testing")
}

/// Like `techsupport_cmd`, but runs inside `dir` with the user config
/// directory redirected there too, so no real config files leak into the
/// test.
pub fn isolated_cmd(dir: &Path) -> Command {
    let mut cmd = techsupport_cmd();
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join("xdg-config"))
        .env_remove("TECHSUPPORT_CONFIG")
        .env_remove("RUST_LOG");
    cmd
}

/// Writes `contents` to `dir/name` and returns the path.
pub fn write_config(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("Failed to write test config file");
    path
}

/// The built-in fallback replies, for membership checks on command output.
pub fn builtin_defaults() -> Vec<String> {
    techsupport::responder::Vocabulary::builtin()
        .defaults()
        .to_vec()
}
