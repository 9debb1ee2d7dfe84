//! # packrs Compression Codecs (`common::archive::compression`)
//!
//! File: cli/src/common/archive/compression.rs
//!
//! ## Overview
//!
//! This module wraps the two interchangeable whole-buffer codecs behind one
//! signature: `compress(&[u8]) -> Vec<u8>` and `decompress(&[u8]) -> Vec<u8>`.
//! The codec is chosen from a path's extension (`.bz2` or `.zst`, compared
//! case-insensitively). There is no streaming, no level or dictionary knob and
//! no cross-format fallback: data tagged `bz2` that is really zstd fails with
//! `PackError::CorruptData`.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::archive::compression::Codec;
//!
//! let codec = Codec::from_path(Path::new("notes.txt.zst")).unwrap();
//! let packed = codec.compress(b"Some data to compress")?;
//! assert_eq!(codec.decompress(&packed)?, b"Some data to compress");
//! ```
//!
use crate::core::error::{PackError, Result};
use anyhow::Context;
use std::fmt;
use std::io::{Read, Write};
use std::path::Path;

/// Compression codec, keyed by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Codec {
    /// bzip2 (`.bz2`).
    Bzip2,
    /// Zstandard (`.zst`).
    Zstd,
}

impl Codec {
    pub const ALL: [Codec; 2] = [Codec::Bzip2, Codec::Zstd];

    /// Extension (without the dot) that selects this codec.
    pub const fn extension(self) -> &'static str {
        match self {
            Codec::Bzip2 => "bz2",
            Codec::Zstd => "zst",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Codec::Bzip2 => "bzip2",
            Codec::Zstd => "zstd",
        }
    }

    /// Looks up a codec by extension, ignoring ASCII case and an optional leading dot.
    pub fn from_extension(ext: &str) -> Option<Codec> {
        let ext = ext.strip_prefix('.').unwrap_or(ext);
        Codec::ALL
            .into_iter()
            .find(|codec| codec.extension().eq_ignore_ascii_case(ext))
    }

    /// Looks up a codec from the final extension of `path`.
    pub fn from_path(path: &Path) -> Option<Codec> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Codec::from_extension)
    }

    /// Compresses a whole buffer with the library's default settings.
    pub fn compress(self, data: &[u8]) -> Result<Vec<u8>> {
        let out = match self {
            Codec::Bzip2 => {
                let mut encoder =
                    bzip2::write::BzEncoder::new(Vec::new(), bzip2::Compression::default());
                encoder
                    .write_all(data)
                    .with_context(|| format!("{} compression failed", self))?;
                encoder
                    .finish()
                    .with_context(|| format!("{} compression failed", self))?
            }
            // Level 0 selects zstd's default level.
            Codec::Zstd => zstd::encode_all(data, 0)
                .with_context(|| format!("{} compression failed", self))?,
        };
        Ok(out)
    }

    /// Decompresses a whole buffer.
    ///
    /// # Errors
    ///
    /// Returns `PackError::CorruptData` when `data` is not a valid stream for this codec.
    /// An empty buffer holds no frame for either codec and is rejected too.
    pub fn decompress(self, data: &[u8]) -> Result<Vec<u8>> {
        if data.is_empty() {
            return Err(PackError::CorruptData {
                codec: self.name(),
                reason: "empty input".to_string(),
            }
            .into());
        }
        let out = match self {
            Codec::Bzip2 => {
                let mut decoded = Vec::new();
                bzip2::read::MultiBzDecoder::new(data)
                    .read_to_end(&mut decoded)
                    .map_err(|e| self.corrupt(e))?;
                decoded
            }
            Codec::Zstd => zstd::decode_all(data).map_err(|e| self.corrupt(e))?,
        };
        Ok(out)
    }

    fn corrupt(self, err: std::io::Error) -> PackError {
        PackError::CorruptData {
            codec: self.name(),
            reason: err.to_string(),
        }
    }
}

impl fmt::Display for Codec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
