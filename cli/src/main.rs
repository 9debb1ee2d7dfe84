//! # packrs Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! This file serves as the main entry point for the packrs CLI application.
//! It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Handing the parsed arguments to the archive command
//! - Turning the run's result into a process exit status
//!
//! ## Examples
//!
//! ```bash
//! # Get help
//! packrs --help
//!
//! # Compress a directory with step logging on stderr
//! packrs -v project project.zst
//! ```
//!
//! Command processing flow:
//! 1. Parse command-line args via Clap
//! 2. Configure logging based on verbosity level
//! 3. Run the archive command (which reports its own errors)
//! 4. Exit with status 1 only when the run failed and strict exit is enabled
//!
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

// Declare the top-level modules of the CLI crate.
mod commands; // The archive command: classification and pipeline
mod common; // Shared adapters and helpers (archive, fs, ui)
mod core; // Core infrastructure (errors, config)

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "packrs",
    about = "📦 packrs: bundle files and directories into .bz2/.zst archives and back",
    long_about = "Compress a file or directory into a .bz2 or .zst archive, or decompress/extract one.\n\
                  The TARGET extension selects compression; otherwise SOURCE is decompressed or extracted.",
    version
)]
struct Cli {
    #[command(flatten)]
    archive: commands::archive::ArchiveArgs,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let report = commands::archive::handle_archive(&cli.archive);
    let code = report.exit_code();
    if code != 0 {
        std::process::exit(code);
    }

    Ok(())
}
