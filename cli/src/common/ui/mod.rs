//! # packrs UI Utilities Module (`common::ui`)
//!
//! File: cli/src/common/ui/mod.rs
//!
//! ## Overview
//!
//! The archive pipeline never prints. It reports through the `Reporter` trait
//! defined here, and whoever drives the pipeline decides what that means:
//!
//! - **`SilentReporter`**: Discards everything. Test-only.
//! - **`progress::ConsoleReporter`**: The CLI implementation. Shows a spinner while a step runs and prints confirmation and error lines to stdout.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::ui::{progress::ConsoleReporter, Reporter};
//!
//! let reporter = ConsoleReporter::new(true, Duration::from_millis(80));
//! let outcome = pipeline::run(source, target, &reporter)?;
//! ```
//!
use crate::core::mode::Outcome;

pub mod progress;

/// Receives progress, success and failure notifications from the pipeline.
pub trait Reporter {
    /// A pipeline step (e.g. "Compressing notes.txt") is starting.
    fn on_progress(&self, task: &str);
    /// A procedure finished and produced its final artifact.
    fn on_success(&self, outcome: &Outcome);
    /// The run failed. Called once, by the CLI shell.
    fn on_error(&self, error: &anyhow::Error);
}

/// Reporter that ignores every notification.
#[cfg(test)]
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentReporter;

#[cfg(test)]
impl Reporter for SilentReporter {
    fn on_progress(&self, _task: &str) {}
    fn on_success(&self, _outcome: &Outcome) {}
    fn on_error(&self, _error: &anyhow::Error) {}
}
