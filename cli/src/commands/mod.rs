//! # packrs Command Modules
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! This module aggregates the command logic of the packrs CLI. There is a
//! single command, `archive`, which `main.rs` flattens into the top-level
//! argument parser so the binary is invoked as `packrs SOURCE TARGET`.
//!
//! The command defines its own arguments structure and handler function,
//! following the same layout a multi-command CLI would use.
//!

/// The archive/extract command: argument parsing, classification and the pipeline.
pub mod archive;
