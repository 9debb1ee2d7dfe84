//! # Pipeline Orchestrator (`commands::archive::pipeline`)
//!
//! File: cli/src/commands/archive/pipeline.rs
//!
//! ## Overview
//!
//! This module sequences the container and codec adapters into the five
//! procedures, one per `OperationMode`, and exposes `run`, which classifies an
//! invocation once and dispatches to the matching procedure.
//!
//! ## Architecture
//!
//! | Procedure                 | Steps                                                        |
//! |---------------------------|--------------------------------------------------------------|
//! | `compress`                | read source → codec(target ext).compress → write target      |
//! | `compress_directory`      | pack source into staging tar → `compress` it → drop staging  |
//! | `decompress`              | read source → codec(source ext).decompress → write target    |
//! | `decompress_to_directory` | decompress into staging tar → sniff → unpack → drop staging  |
//! | `extract_container`       | unpack source into target                                    |
//!
//! Every input is read fully into memory; nothing is streamed. Staging tars are
//! owned by a `StagingFile` guard, so they are removed whether the procedure
//! succeeds or fails part-way. Writes to the final target are not atomic: a
//! failure mid-write leaves whatever was written.
//!
//! Each procedure reports its steps and, on success, its `Outcome` through the
//! `Reporter` it is given. The procedures themselves never print.
//!
use super::classify::classify;
use crate::common::archive::{compression::Codec, tar};
use crate::common::fs::io;
use crate::common::fs::staging::{staging_path_for, StagingFile};
use crate::common::ui::Reporter;
use crate::core::error::{PackError, Result};
use crate::core::mode::{OperationMode, Outcome};
use anyhow::bail;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// # Run Pipeline (`run`)
///
/// Classifies `(source, target)` and runs the matching procedure.
///
/// ## Errors
///
/// Any `PackError` raised by classification or by the chosen procedure.
pub fn run(source: &Path, target: &Path, reporter: &dyn Reporter) -> Result<Outcome> {
    let mode = classify(source, target)?;
    info!("Running '{}' for {:?} -> {:?}", mode, source, target);
    match mode {
        OperationMode::Compress => compress(source, target, reporter),
        OperationMode::CompressDirectory => compress_directory(source, target, reporter),
        OperationMode::Decompress => decompress(source, target, reporter),
        OperationMode::DecompressToDirectory => decompress_to_directory(source, target, reporter),
        OperationMode::ExtractContainer => extract_container(source, target, reporter),
    }
}

/// Compresses the file `source` into `target`, with the codec named by `target`'s extension.
pub fn compress(source: &Path, target: &Path, reporter: &dyn Reporter) -> Result<Outcome> {
    let codec = codec_for(target, "target")?;
    compress_file(source, target, codec, reporter)?;
    finish(OperationMode::Compress, source, target, reporter)
}

/// Packs the directory `source` into a staging tar next to it and compresses that into `target`.
pub fn compress_directory(
    source: &Path,
    target: &Path,
    reporter: &dyn Reporter,
) -> Result<Outcome> {
    let codec = codec_for(target, "target")?;
    let entry = named_path(source)?;
    let staging = StagingFile::claim(staging_path_for(&entry))?;

    reporter.on_progress(&format!("Packing {}", entry.display()));
    tar::pack(&entry, staging.path())?;
    compress_file(staging.path(), target, codec, reporter)?;
    staging.close()?;

    finish(OperationMode::CompressDirectory, source, target, reporter)
}

/// Decompresses `source`, with the codec named by its extension, into the file `target`.
pub fn decompress(source: &Path, target: &Path, reporter: &dyn Reporter) -> Result<Outcome> {
    let codec = codec_for(source, "source")?;
    decompress_file(source, target, codec, reporter)?;
    finish(OperationMode::Decompress, source, target, reporter)
}

/// Decompresses `source` into a staging tar next to `target`, then unpacks it into `target`.
///
/// `target` is created if missing; an existing directory is reused.
pub fn decompress_to_directory(
    source: &Path,
    target: &Path,
    reporter: &dyn Reporter,
) -> Result<Outcome> {
    let codec = codec_for(source, "source")?;
    let destination = named_path(target)?;
    let staging = StagingFile::claim(staging_path_for(&destination))?;

    decompress_file(source, staging.path(), codec, reporter)?;
    if !tar::is_container(staging.path()) {
        bail!(PackError::UnsupportedFormat(format!(
            "decompressed payload of '{}' is not a tar container",
            source.display()
        )));
    }
    io::ensure_dir_exists(target)?;
    reporter.on_progress(&format!("Unpacking into {}", target.display()));
    tar::unpack(staging.path(), target)?;
    staging.close()?;

    finish(OperationMode::DecompressToDirectory, source, target, reporter)
}

/// Unpacks the tar file `source` into the directory `target`.
pub fn extract_container(source: &Path, target: &Path, reporter: &dyn Reporter) -> Result<Outcome> {
    io::ensure_dir_exists(target)?;
    reporter.on_progress(&format!("Unpacking into {}", target.display()));
    tar::unpack(source, target)?;
    finish(OperationMode::ExtractContainer, source, target, reporter)
}

fn compress_file(
    source: &Path,
    target: &Path,
    codec: Codec,
    reporter: &dyn Reporter,
) -> Result<()> {
    reporter.on_progress(&format!("Compressing {} with {}", source.display(), codec));
    let data = io::read_bytes(source)?;
    let packed = codec.compress(&data)?;
    debug!("{}: {} -> {} bytes", codec, data.len(), packed.len());
    io::write_bytes(target, &packed)
}

fn decompress_file(
    source: &Path,
    target: &Path,
    codec: Codec,
    reporter: &dyn Reporter,
) -> Result<()> {
    reporter.on_progress(&format!("Decompressing {} with {}", source.display(), codec));
    let data = io::read_bytes(source)?;
    let unpacked = codec.decompress(&data)?;
    debug!("{}: {} -> {} bytes", codec, data.len(), unpacked.len());
    io::write_bytes(target, &unpacked)
}

fn finish(
    mode: OperationMode,
    source: &Path,
    target: &Path,
    reporter: &dyn Reporter,
) -> Result<Outcome> {
    let outcome = Outcome::new(mode, source, target);
    reporter.on_success(&outcome);
    Ok(outcome)
}

/// Codec selected by `path`'s extension, or `UnsupportedFormat`.
fn codec_for(path: &Path, role: &str) -> Result<Codec> {
    match Codec::from_path(path) {
        Some(codec) => Ok(codec),
        None => bail!(PackError::UnsupportedFormat(format!(
            "{} '{}' must end in .bz2 or .zst",
            role,
            path.display()
        ))),
    }
}

/// `path` itself when it has a base name; otherwise (e.g. `.` or `..`) its canonical form.
fn named_path(path: &Path) -> Result<PathBuf> {
    if path.file_name().is_some() {
        return Ok(path.to_path_buf());
    }
    std::fs::canonicalize(path).map_err(|e| PackError::io("resolve", path, e).into())
}
