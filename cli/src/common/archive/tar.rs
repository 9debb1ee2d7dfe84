//! # packrs TAR Container Operations (`common::archive::tar`)
//!
//! File: cli/src/common/archive/tar.rs
//!
//! ## Overview
//!
//! This module is the container adapter of the pipeline. It packs a single
//! filesystem entry (a file or a whole directory tree) into an uncompressed
//! tar file, unpacks a tar file into a directory, and recognizes tar files by
//! their header structure rather than by name.
//!
//! ## Architecture
//!
//! The module leverages the `tar` crate for building, reading and header
//! parsing.
//!
//! - `pack` stores the entry under its own base name, so `work/project/a.txt`
//!   becomes `project/a.txt` inside the archive and unpacking recreates the
//!   same top-level name. Symbolic links are stored as links, never followed.
//! - `unpack` extracts every entry under the destination directory, which may
//!   already exist.
//! - `is_container` reads the first entry header, whose checksum the `tar`
//!   crate validates.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::archive::tar;
//!
//! tar::pack(Path::new("project"), Path::new("project.tar"))?;
//! assert!(tar::is_container(Path::new("project.tar")));
//! tar::unpack(Path::new("project.tar"), Path::new("restored"))?;
//! ```
//!
use crate::core::error::{PackError, Result};
use std::fs::{self, File};
use std::io;
use std::path::Path;
use tracing::{debug, info};

/// # Pack Entry Into Container (`pack`)
///
/// Writes a tar file at `container` holding `entry`. A directory is added
/// recursively; a file is added alone. In both cases the archive name is the
/// base name of `entry`. Symbolic links inside the tree are archived as links,
/// so dangling links and links to ancestors pack like any other entry.
///
/// ## Errors
///
/// Returns `PackError::Io` if the entry cannot be read, the container cannot be
/// created, or finishing the archive fails.
pub fn pack(entry: &Path, container: &Path) -> Result<()> {
    let arcname = entry.file_name().ok_or_else(|| {
        PackError::io(
            "pack",
            entry,
            io::Error::new(io::ErrorKind::InvalidInput, "path has no base name"),
        )
    })?;

    let file = File::create(container).map_err(|e| PackError::io("create", container, e))?;
    let mut builder = tar::Builder::new(file);
    builder.follow_symlinks(false);

    let appended = if entry.is_dir() {
        builder.append_dir_all(arcname, entry)
    } else {
        builder.append_path_with_name(entry, arcname)
    };
    appended.map_err(|e| PackError::io("add to tar archive", entry, e))?;

    builder
        .into_inner()
        .map_err(|e| PackError::io("finish tar archive", container, e))?;
    info!("Packed {:?} into {:?}", entry, container);
    Ok(())
}

/// # Unpack Container (`unpack`)
///
/// Extracts all entries of `container` under `destination`, preserving their
/// relative paths. `destination` is created if needed and may already exist.
pub fn unpack(container: &Path, destination: &Path) -> Result<()> {
    let file = File::open(container).map_err(|e| PackError::io("open", container, e))?;
    let mut archive = tar::Archive::new(file);
    archive
        .unpack(destination)
        .map_err(|e| PackError::io("extract tar archive", container, e))?;
    info!("Unpacked {:?} into {:?}", container, destination);
    Ok(())
}

/// # Detect Container (`is_container`)
///
/// Returns `true` if `path` is a non-empty regular file whose first entry
/// header parses with a valid checksum, or which ends (zero block) before any
/// entry. Unreadable, empty or truncated files are not containers.
pub fn is_container(path: &Path) -> bool {
    match sniff(path) {
        Ok(found) => {
            debug!("Tar sniff of {:?}: {}", path, found);
            found
        }
        Err(e) => {
            debug!("Tar sniff of {:?} failed: {}", path, e);
            false
        }
    }
}

fn sniff(path: &Path) -> io::Result<bool> {
    let metadata = fs::metadata(path)?;
    if !metadata.is_file() || metadata.len() == 0 {
        return Ok(false);
    }
    let mut archive = tar::Archive::new(File::open(path)?);
    let first = archive.entries()?.next();
    Ok(!matches!(first, Some(Err(_))))
}
