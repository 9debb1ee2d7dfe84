//! # packrs Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error taxonomy shared by every stage of the
//! archive pipeline. Each failure the pipeline can produce maps onto exactly
//! one `PackError` variant, so the CLI shell (and the tests) can classify an
//! error without string matching.
//!
//! ## Architecture
//!
//! The error system consists of two main components:
//! - `PackError`: A custom error enum using `thiserror` for the four failure classes
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for flexible error handling
//!
//! The failure classes are:
//! - `NotFound`: the source path does not exist
//! - `UnsupportedFormat`: no codec or container matches the given paths/content
//! - `CorruptData`: a codec rejected its input buffer
//! - `Io`: a read, write, create or delete on the filesystem failed
//!
//! ## Examples
//!
//! ```rust
//! // Return a specific error type
//! if !source.exists() {
//!     anyhow::bail!(PackError::NotFound { path: source.to_path_buf() });
//! }
//!
//! // Classify an error coming out of the pipeline
//! match PackError::kind_of(&err) {
//!     Some(ErrorKind::CorruptData) => println!("archive is damaged"),
//!     _ => println!("Error: {}", err),
//! }
//! ```
//!
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Custom error type for the packrs pipeline.
#[derive(Error, Debug)]
pub enum PackError {
    #[error("Source path '{}' does not exist.", path.display())]
    NotFound { path: PathBuf },

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("Corrupt {codec} data: {reason}")]
    CorruptData { codec: &'static str, reason: String },

    #[error("Failed to {action} '{}'", path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Fieldless view of a `PackError`, convenient for comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    UnsupportedFormat,
    CorruptData,
    Io,
}

impl PackError {
    /// Builds a `PackError::Io` for `action` on `path`.
    pub fn io(action: &'static str, path: &Path, source: std::io::Error) -> Self {
        PackError::Io {
            action,
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            PackError::NotFound { .. } => ErrorKind::NotFound,
            PackError::UnsupportedFormat(_) => ErrorKind::UnsupportedFormat,
            PackError::CorruptData { .. } => ErrorKind::CorruptData,
            PackError::Io { .. } => ErrorKind::Io,
        }
    }

    /// Returns the kind of the first `PackError` found in `err`'s chain, if any.
    pub fn kind_of(err: &anyhow::Error) -> Option<ErrorKind> {
        err.chain()
            .find_map(|cause| cause.downcast_ref::<PackError>())
            .map(PackError::kind)
    }
}

/// Type alias for Result using anyhow::Error for broad compatibility.
/// Anyhow allows for easy context addition and flexible error handling.
pub type Result<T> = anyhow::Result<T>;
