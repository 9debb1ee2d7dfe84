//! # packrs CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! Shared helpers for the integration test files. Each `.rs` file in
//! `cli/tests/` is compiled as its own test crate and runs the built
//! `packrs` binary through `assert_cmd`.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::path::Path;

/// # Get packrs Command (`packrs_cmd`)
///
/// Creates an `assert_cmd::Command` for the compiled `packrs` binary, with
/// the spinner disabled and `current_dir` set to `dir` so no stray project
/// configuration is picked up from the developer's checkout.
///
/// ## Panics
/// Panics if the `packrs` binary cannot be found via `Command::cargo_bin`.
pub fn packrs_cmd(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("packrs").expect("Failed to find packrs binary for testing");
    cmd.current_dir(dir).arg("--no-progress").env_remove("RUST_LOG");
    cmd
}

/// Lists `.tar` files directly inside `dir`.
pub fn tar_files_in(dir: &Path) -> Vec<std::path::PathBuf> {
    std::fs::read_dir(dir)
        .expect("readable test dir")
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().map_or(false, |ext| ext == "tar"))
        .collect()
}
