//! # packrs Filesystem I/O Operations
//!
//! File: cli/src/common/fs/io.rs
//!
//! ## Overview
//!
//! This module centralizes the whole-file input/output operations used by the
//! archive pipeline. Each helper is a thin wrapper over `std::fs` that maps
//! failures into `PackError::Io`, so callers never see a bare `std::io::Error`.
//!
//! ## Architecture
//!
//! - **`ensure_dir_exists`**: Creates a directory (with parents) when absent and rejects a path that exists as something else.
//! - **`read_bytes`**: Reads an entire file into memory. Files are never streamed.
//! - **`write_bytes`**: Writes a buffer to a file, replacing any previous content. No temp-file/rename dance is done, so an interrupted write leaves a partial file.
//!
use crate::core::error::{PackError, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, info};

/// Ensures that a directory exists at the specified path.
///
/// If the path does not exist, this function creates the directory,
/// including any necessary parent directories (similar to `mkdir -p`).
/// A pre-existing directory is accepted as-is.
///
/// # Errors
///
/// Returns `PackError::Io` if:
/// - The path exists but is not a directory.
/// - Creating the directory fails (e.g., due to permissions).
pub fn ensure_dir_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path).map_err(|e| PackError::io("create directory", path, e))?;
        info!("Created directory: {:?}", path);
    } else if !path.is_dir() {
        return Err(PackError::io(
            "create directory",
            path,
            std::io::Error::new(ErrorKind::AlreadyExists, "path exists but is not a directory"),
        )
        .into());
    } else {
        debug!("Directory already exists: {:?}", path);
    }
    Ok(())
}

/// Reads the entire content of a file into a byte buffer.
pub fn read_bytes(path: &Path) -> Result<Vec<u8>> {
    let data = fs::read(path).map_err(|e| PackError::io("read", path, e))?;
    debug!("Read {} bytes from {:?}", data.len(), path);
    Ok(data)
}

/// Writes `data` to `path`, overwriting the file if it exists.
///
/// The parent directory must already exist.
pub fn write_bytes(path: &Path, data: &[u8]) -> Result<()> {
    fs::write(path, data).map_err(|e| PackError::io("write", path, e))?;
    debug!("Wrote {} bytes to {:?}", data.len(), path);
    Ok(())
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::ErrorKind as PackErrorKind;
    use tempfile::tempdir;

    /// Test `ensure_dir_exists` when the directory needs to be created, including parents.
    #[test]
    fn test_ensure_dir_exists_creates_new() -> Result<()> {
        let base_dir = tempdir()?;
        let new_dir = base_dir.path().join("new/subdir");
        assert!(!new_dir.exists());
        ensure_dir_exists(&new_dir)?;
        assert!(new_dir.is_dir());
        Ok(())
    }

    /// Test `ensure_dir_exists` when the directory already exists.
    #[test]
    fn test_ensure_dir_exists_already_exists() -> Result<()> {
        let base_dir = tempdir()?;
        let existing_dir = base_dir.path().join("existing");
        fs::create_dir(&existing_dir)?;
        ensure_dir_exists(&existing_dir)?;
        assert!(existing_dir.is_dir());
        Ok(())
    }

    /// Test `ensure_dir_exists` when the target path exists but is a file.
    #[test]
    fn test_ensure_dir_exists_path_is_file() -> Result<()> {
        let base_dir = tempdir()?;
        let file_path = base_dir.path().join("a_file.txt");
        fs::write(&file_path, "hello")?;
        let err = ensure_dir_exists(&file_path).unwrap_err();
        assert_eq!(PackError::kind_of(&err), Some(PackErrorKind::Io));
        assert!(format!("{:#}", err).contains("path exists but is not a directory"));
        Ok(())
    }

    #[test]
    fn test_read_write_bytes() -> Result<()> {
        let base_dir = tempdir()?;
        let file_path = base_dir.path().join("blob.bin");
        let content = [0u8, 159, 146, 150, 255];
        write_bytes(&file_path, &content)?;
        assert_eq!(read_bytes(&file_path)?, content);
        Ok(())
    }

    #[test]
    fn test_read_missing_file_is_io_error() -> Result<()> {
        let base_dir = tempdir()?;
        let err = read_bytes(&base_dir.path().join("nonexistent.txt")).unwrap_err();
        assert_eq!(PackError::kind_of(&err), Some(PackErrorKind::Io));
        Ok(())
    }
}
