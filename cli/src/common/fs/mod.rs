//! # packrs Filesystem Utilities (`common::fs`)
//!
//! File: cli/src/common/fs/mod.rs
//!
//! ## Overview
//!
//! Filesystem helpers used by the archive pipeline:
//!
//! - **`io`**: Whole-file reads and writes plus `ensure_dir_exists`, all reporting failures as `PackError::Io`.
//! - **`staging`**: The `StagingFile` guard and the naming rule for staging containers.
//!
//! ```rust
//! use crate::common::fs::{io, staging};
//!
//! let data = io::read_bytes(Path::new("notes.txt"))?;
//! let stage = staging::StagingFile::claim(staging::staging_path_for(Path::new("project")))?;
//! ```
//!

/// Whole-buffer file I/O (`read_bytes`, `write_bytes`, `ensure_dir_exists`).
pub mod io;
/// Scoped staging container files.
pub mod staging;
