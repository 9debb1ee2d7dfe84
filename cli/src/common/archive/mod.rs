//! # packrs Archive Utilities Module (`common::archive`)
//!
//! File: cli/src/common/archive/mod.rs
//!
//! ## Overview
//!
//! This module groups the two adapters the pipeline is built from:
//!
//! - **`tar`**: The container adapter. Packs one file or directory tree into a
//!   plain tar file, unpacks tar files, and sniffs whether a file is a tar.
//! - **`compression`**: The codec adapter. Whole-buffer bzip2 and zstd,
//!   selected by file extension.
//!
//! Neither adapter knows about the other; `commands::archive` decides how
//! they are combined.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::archive::{compression::Codec, tar};
//!
//! tar::pack(Path::new("project"), Path::new("project.tar"))?;
//! let raw = std::fs::read("project.tar")?;
//! let packed = Codec::Zstd.compress(&raw)?;
//! ```
//!

/// Whole-buffer bzip2/zstd codecs.
pub mod compression;
/// Tar container packing, unpacking and detection.
pub mod tar;
