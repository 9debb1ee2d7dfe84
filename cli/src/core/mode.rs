//! # Operation Modes (`core::mode`)
//!
//! File: cli/src/core/mode.rs
//!
//! `OperationMode` is computed once per invocation by the classifier and then
//! matched exhaustively by the pipeline. `Outcome` is what a successful
//! procedure hands to the reporter.
//!
use std::fmt;
use std::path::{Path, PathBuf};

/// The five mutually exclusive things a single invocation can do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationMode {
    /// Compress one regular file.
    Compress,
    /// Pack a directory into a staging tar, then compress it.
    CompressDirectory,
    /// Decompress into one regular file.
    Decompress,
    /// Decompress into a staging tar, then unpack it into a directory.
    DecompressToDirectory,
    /// Unpack an uncompressed tar into a directory.
    ExtractContainer,
}

impl fmt::Display for OperationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OperationMode::Compress => "compress",
            OperationMode::CompressDirectory => "compress directory",
            OperationMode::Decompress => "decompress",
            OperationMode::DecompressToDirectory => "decompress to directory",
            OperationMode::ExtractContainer => "extract container",
        };
        f.write_str(name)
    }
}

/// Result of a successful procedure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub mode: OperationMode,
    pub source: PathBuf,
    pub target: PathBuf,
}

impl Outcome {
    pub fn new(mode: OperationMode, source: &Path, target: &Path) -> Self {
        Self {
            mode,
            source: source.to_path_buf(),
            target: target.to_path_buf(),
        }
    }
}

/// Renders the confirmation line shown to the user.
impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let source = display_name(&self.source);
        let target = self.target.display();
        match self.mode {
            OperationMode::Compress => write!(f, "File '{}' compressed → {}", source, target),
            OperationMode::CompressDirectory => {
                write!(f, "Directory '{}' packed and compressed → {}", source, target)
            }
            OperationMode::Decompress => {
                write!(f, "File '{}' decompressed → {}", source, target)
            }
            OperationMode::DecompressToDirectory | OperationMode::ExtractContainer => {
                write!(f, "'{}' unpacked into directory: {}", source, target)
            }
        }
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
