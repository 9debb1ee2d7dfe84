//! # packrs Archive Command
//!
//! File: cli/src/commands/archive/mod.rs
//!
//! ## Overview
//!
//! This module implements the single `packrs SOURCE TARGET` command: it turns
//! a file or directory into a `.bz2`/`.zst` archive, or turns such an archive
//! (or a plain tar) back into files.
//!
//! ## Architecture
//!
//! The module is organized into:
//! - `classify.rs`: picks the `OperationMode` from the source/target shape
//! - `pipeline.rs`: the five procedures and `run`, which dispatches to them
//!
//! `handle_archive` is the CLI-facing wrapper: it merges flags with the loaded
//! configuration, drives the pipeline through a `ConsoleReporter`, reports any
//! error, and prints the benchmark line.
//!
//! ## Examples
//!
//! ```bash
//! # Compress a file
//! packrs notes.txt notes.txt.zst
//!
//! # Compress a directory (packed into a tar first)
//! packrs project project.bz2 --benchmark
//!
//! # Restore it under ./restored/project
//! packrs project.bz2 restored
//!
//! # Extract a plain tar
//! packrs bundle.tar out
//! ```
//!
use crate::common::ui::{progress::ConsoleReporter, Reporter};
use crate::core::config::{self, OutputConfig};
use crate::core::error::PackError;
use clap::Args;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::{error, info};

pub mod classify;
pub mod pipeline;

/// # Archive Command Arguments (`ArchiveArgs`)
///
/// Positional source and target plus the flags that adjust the shell's
/// behaviour. Flags only ever switch a setting on; the configuration file
/// supplies the rest.
#[derive(Args, Debug)]
pub struct ArchiveArgs {
    /// File or directory to operate on.
    pub source: PathBuf,

    /// Path to produce. A `.bz2`/`.zst` extension means compress; otherwise the
    /// source is decompressed or extracted here.
    pub target: PathBuf,

    /// Print the elapsed wall-clock time, even when the operation fails.
    #[arg(long)]
    pub benchmark: bool,

    /// Do not show the progress spinner.
    #[arg(long)]
    pub no_progress: bool,

    /// Exit with status 1 when the operation fails (default is to exit 0).
    #[arg(long)]
    pub strict_exit: bool,
}

impl ArchiveArgs {
    /// Applies command-line flags on top of the configured output settings.
    pub fn apply_to(&self, mut output: OutputConfig) -> OutputConfig {
        output.benchmark |= self.benchmark;
        output.strict_exit |= self.strict_exit;
        if self.no_progress {
            output.progress = false;
        }
        output
    }
}

/// What the shell needs to know after a run to pick an exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunReport {
    pub succeeded: bool,
    pub strict_exit: bool,
}

impl RunReport {
    /// Process exit status for this run.
    pub fn exit_code(&self) -> i32 {
        if self.succeeded || !self.strict_exit {
            0
        } else {
            1
        }
    }
}

/// # Handle Archive Command (`handle_archive`)
///
/// Runs one full pipeline invocation for the CLI:
/// 1. Starts the benchmark clock.
/// 2. Loads configuration and applies the command-line flags on top.
/// 3. Runs the pipeline, reporting through a `ConsoleReporter`.
/// 4. Prints any error (configuration or pipeline) to stdout.
/// 5. Prints the elapsed time when benchmarking, whether or not the run failed.
///
/// Errors are reported here and never returned; the caller only receives the
/// `RunReport` used to choose the exit status.
pub fn handle_archive(args: &ArchiveArgs) -> RunReport {
    let started = Instant::now();
    info!("Handling archive command with args: {:?}", args);

    let (output, loaded) = match config::load_config() {
        Ok(cfg) => (args.apply_to(cfg.output), Ok(())),
        Err(e) => (args.apply_to(OutputConfig::default()), Err(e)),
    };
    info!("Effective output settings: {:?}", output);

    let reporter = ConsoleReporter::new(
        output.progress,
        Duration::from_millis(output.tick_interval_ms),
    );
    let result = loaded.and_then(|()| pipeline::run(&args.source, &args.target, &reporter));
    reporter.finish();

    if let Err(e) = &result {
        error!(kind = ?PackError::kind_of(e), "Archive command failed: {:?}", e);
        reporter.on_error(e);
    }
    if output.benchmark {
        println!("⏱ Elapsed time: {:.3} s", started.elapsed().as_secs_f64());
    }

    RunReport {
        succeeded: result.is_ok(),
        strict_exit: output.strict_exit,
    }
}
