//! # packrs Staging Containers (`common::fs::staging`)
//!
//! File: cli/src/common/fs/staging.rs
//!
//! ## Overview
//!
//! A staging container is the intermediate `.tar` file that bridges "pack a
//! directory" and "compress" (or "decompress" and "unpack"). It lives next to
//! the path it was derived from and must be gone by the time the procedure
//! that created it returns.
//!
//! `StagingFile` is the scoped guard for that file:
//! - `claim` reserves the path and refuses one that already exists, so an
//!   unrelated user file with the same name is never overwritten or deleted.
//! - `close` removes the file and reports a removal failure to the caller.
//! - `Drop` removes the file on every other exit path. A removal failure there
//!   is logged, since the error already propagating must stay the one reported.
//!
use crate::core::error::{PackError, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Extension given to staging containers.
pub const STAGING_EXTENSION: &str = "tar";

/// Returns the staging container path for `path`: same parent, extension replaced by `.tar`.
pub fn staging_path_for(path: &Path) -> PathBuf {
    path.with_extension(STAGING_EXTENSION)
}

/// Owns a staging file path and deletes it when dropped.
#[derive(Debug)]
pub struct StagingFile {
    path: PathBuf,
    armed: bool,
}

impl StagingFile {
    /// Reserves `path` for a staging container.
    ///
    /// Nothing is created on disk; the first writer creates the file. Fails with
    /// `PackError::Io` if something already exists at `path`.
    pub fn claim(path: PathBuf) -> Result<Self> {
        if path.symlink_metadata().is_ok() {
            return Err(PackError::io(
                "create staging container",
                &path,
                std::io::Error::new(ErrorKind::AlreadyExists, "path already exists"),
            )
            .into());
        }
        debug!("Claimed staging path {:?}", path);
        Ok(Self { path, armed: true })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Removes the staging file now, reporting any failure.
    pub fn close(mut self) -> Result<()> {
        self.armed = false;
        remove_if_present(&self.path)
            .map_err(|e| PackError::io("remove staging container", &self.path, e))?;
        Ok(())
    }
}

impl Drop for StagingFile {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        if let Err(e) = remove_if_present(&self.path) {
            warn!("Failed to remove staging container {:?}: {}", self.path, e);
        }
    }
}

fn remove_if_present(path: &Path) -> std::io::Result<()> {
    match fs::remove_file(path) {
        Ok(()) => {
            debug!("Removed staging container {:?}", path);
            Ok(())
        }
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::ErrorKind as PackErrorKind;
    use tempfile::tempdir;

    #[test]
    fn test_staging_path_replaces_extension() {
        assert_eq!(staging_path_for(Path::new("work/project")), PathBuf::from("work/project.tar"));
        assert_eq!(staging_path_for(Path::new("out.d")), PathBuf::from("out.tar"));
        assert_eq!(staging_path_for(Path::new("restored/")), PathBuf::from("restored.tar"));
    }

    #[test]
    fn test_drop_removes_file() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("stage.tar");
        {
            let staging = StagingFile::claim(path.clone())?;
            fs::write(staging.path(), b"payload")?;
            assert!(path.exists());
        }
        assert!(!path.exists());
        Ok(())
    }

    #[test]
    fn test_drop_removes_file_on_error_path() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("stage.tar");
        let outcome = (|| -> Result<()> {
            let staging = StagingFile::claim(path.clone())?;
            fs::write(staging.path(), b"payload")?;
            anyhow::bail!("injected failure");
        })();
        assert!(outcome.is_err());
        assert!(!path.exists());
        Ok(())
    }

    #[test]
    fn test_close_tolerates_never_created_file() -> Result<()> {
        let dir = tempdir()?;
        let staging = StagingFile::claim(dir.path().join("never.tar"))?;
        staging.close()?;
        Ok(())
    }

    /// Puts a non-empty directory where the staging file should be, so removal fails.
    fn block_removal(path: &Path) -> Result<()> {
        fs::create_dir(path)?;
        fs::write(path.join("occupant"), b"x")?;
        Ok(())
    }

    #[test]
    fn test_close_reports_removal_failure() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("stuck.tar");
        let staging = StagingFile::claim(path.clone())?;
        block_removal(&path)?;

        let err = staging.close().unwrap_err();
        assert_eq!(PackError::kind_of(&err), Some(PackErrorKind::Io));
        match err.downcast_ref::<PackError>() {
            Some(PackError::Io { action, .. }) => assert_eq!(*action, "remove staging container"),
            other => panic!("unexpected error: {:?}", other),
        }
        Ok(())
    }

    #[test]
    fn test_drop_failure_keeps_original_error() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("stuck.tar");
        let outcome = (|| -> Result<()> {
            let _staging = StagingFile::claim(path.clone())?;
            block_removal(&path)?;
            anyhow::bail!("injected failure");
        })();

        let err = outcome.unwrap_err();
        assert_eq!(err.to_string(), "injected failure");
        assert_eq!(PackError::kind_of(&err), None);
        assert!(path.is_dir());
        Ok(())
    }

    #[test]
    fn test_claim_refuses_existing_path() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("keep.tar");
        fs::write(&path, b"user data")?;

        let err = StagingFile::claim(path.clone()).unwrap_err();
        assert_eq!(PackError::kind_of(&err), Some(PackErrorKind::Io));
        assert_eq!(fs::read(&path)?, b"user data");
        Ok(())
    }
}
