//! # packrs Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//!

//! ## Overview
//!
//! This module is the root of the shared utility modules used by the command
//! logic. It keeps the adapters and helpers (`common::`) separate from the
//! command orchestration (`commands::`) and the core infrastructure (`core::`).
//!
//! ## Architecture
//!
//! - **`archive`**: The tar container adapter and the bzip2/zstd codec adapter.
//! - **`fs`**: Whole-file I/O and the scoped staging-container guard.
//! - **`ui`**: The `Reporter` trait and the console implementation with its spinner.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::{archive, fs, ui};
//!
//! let data = fs::io::read_bytes(source)?;
//! let packed = archive::compression::Codec::Zstd.compress(&data)?;
//! fs::io::write_bytes(target, &packed)?;
//! ```
//!

/// Tar container and compression codec adapters.
pub mod archive;
/// Filesystem helpers (I/O, staging containers).
pub mod fs;
/// Progress and result reporting.
pub mod ui;
