//! # Path Classifier (`commands::archive::classify`)
//!
//! File: cli/src/commands/archive/classify.rs
//!
//! ## Overview
//!
//! Decides which `OperationMode` an invocation runs, from the shape of the
//! source and target paths. The decision is made once, before any work, and
//! follows this precedence (first match wins):
//!
//! 1. Target extension is `.bz2`/`.zst` → `CompressDirectory` for a directory
//!    source, `Compress` otherwise.
//! 2. Source extension is `.bz2`/`.zst` → `DecompressToDirectory` when the
//!    target is an existing directory or has no extension, `Decompress`
//!    otherwise.
//! 3. Source sniffs as a tar container → `ExtractContainer`.
//! 4. Anything else → `PackError::UnsupportedFormat`.
//!
//! Compression is keyed on the target, decompression on the source. A
//! directory source can only ever be compressed, so a directory that reaches
//! step 2 is rejected rather than read as a payload.
//!
use crate::common::archive::{compression::Codec, tar};
use crate::core::error::{PackError, Result};
use crate::core::mode::OperationMode;
use anyhow::bail;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::debug;

/// Classifies `(source, target)` into exactly one `OperationMode`.
///
/// # Errors
///
/// - `PackError::NotFound` if `source` does not exist.
/// - `PackError::UnsupportedFormat` if no rule matches.
/// - `PackError::Io` if `source` exists but cannot be inspected.
pub fn classify(source: &Path, target: &Path) -> Result<OperationMode> {
    let source_is_dir = match fs::metadata(source) {
        Ok(meta) => meta.is_dir(),
        Err(e) if e.kind() == ErrorKind::NotFound => bail!(PackError::NotFound {
            path: source.to_path_buf()
        }),
        Err(e) => return Err(PackError::io("inspect", source, e).into()),
    };

    let mode = if Codec::from_path(target).is_some() {
        if source_is_dir {
            OperationMode::CompressDirectory
        } else {
            OperationMode::Compress
        }
    } else if source_is_dir {
        bail!(PackError::UnsupportedFormat(format!(
            "'{}' is a directory; directories can only be compressed to a .bz2 or .zst target",
            source.display()
        )));
    } else if Codec::from_path(source).is_some() {
        if target.is_dir() || has_no_extension(target) {
            OperationMode::DecompressToDirectory
        } else {
            OperationMode::Decompress
        }
    } else if tar::is_container(source) {
        OperationMode::ExtractContainer
    } else {
        bail!(PackError::UnsupportedFormat(format!(
            "cannot handle '{}' → '{}': source is neither a .bz2/.zst file nor a tar container, \
             and the target does not end in .bz2/.zst",
            source.display(),
            target.display()
        )));
    };

    debug!("Classified {:?} -> {:?} as {}", source, target, mode);
    Ok(mode)
}

/// True when `path` has no extension, or only a trailing dot.
fn has_no_extension(path: &Path) -> bool {
    path.extension().map_or(true, |ext| ext.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::archive::tar as container;
    use crate::core::error::ErrorKind as PackErrorKind;
    use std::path::PathBuf;
    use tempfile::{tempdir, TempDir};

    struct Fixture {
        dir: TempDir,
    }

    impl Fixture {
        fn new() -> Self {
            Self { dir: tempdir().unwrap() }
        }

        fn path(&self, name: &str) -> PathBuf {
            self.dir.path().join(name)
        }

        fn file(&self, name: &str, content: &[u8]) -> PathBuf {
            let path = self.path(name);
            fs::write(&path, content).unwrap();
            path
        }

        fn subdir(&self, name: &str) -> PathBuf {
            let path = self.path(name);
            fs::create_dir_all(&path).unwrap();
            path
        }
    }

    fn kind(result: Result<OperationMode>) -> PackErrorKind {
        PackError::kind_of(&result.unwrap_err()).expect("expected a PackError")
    }

    #[test]
    fn test_mode_table() {
        let fx = Fixture::new();
        let plain = fx.file("notes.txt", b"0123456789");
        let project = fx.subdir("project");
        let zst = fx.file("notes.txt.zst", b"irrelevant");
        let bz2 = fx.file("backup.bz2", b"irrelevant");
        let existing_out = fx.subdir("out.d");

        let cases: Vec<(PathBuf, PathBuf, OperationMode)> = vec![
            (plain.clone(), fx.path("notes.txt.zst"), OperationMode::Compress),
            (plain.clone(), fx.path("notes.txt.bz2"), OperationMode::Compress),
            (project.clone(), fx.path("project.zst"), OperationMode::CompressDirectory),
            (project.clone(), fx.path("project.bz2"), OperationMode::CompressDirectory),
            (zst.clone(), fx.path("notes.out"), OperationMode::Decompress),
            (zst.clone(), fx.path("restored"), OperationMode::DecompressToDirectory),
            (bz2.clone(), existing_out.clone(), OperationMode::DecompressToDirectory),
            (bz2.clone(), fx.path("restored/"), OperationMode::DecompressToDirectory),
            // A compressed target always means compression, even from a compressed source.
            (zst.clone(), fx.path("again.bz2"), OperationMode::Compress),
        ];

        for (source, target, expected) in cases {
            let first = classify(&source, &target).unwrap();
            let second = classify(&source, &target).unwrap();
            assert_eq!(first, expected, "{:?} -> {:?}", source, target);
            assert_eq!(first, second, "classification must be deterministic");
        }
    }

    #[test]
    fn test_target_suffix_is_case_insensitive() {
        let fx = Fixture::new();
        let plain = fx.file("a.txt", b"data");
        let project = fx.subdir("project");
        assert_eq!(
            classify(&plain, &fx.path("a.ZST")).unwrap(),
            classify(&plain, &fx.path("a.zst")).unwrap()
        );
        assert_eq!(
            classify(&project, &fx.path("p.Bz2")).unwrap(),
            OperationMode::CompressDirectory
        );
    }

    #[test]
    fn test_source_suffix_is_case_insensitive() {
        let fx = Fixture::new();
        let upper = fx.file("DATA.ZST", b"irrelevant");
        assert_eq!(
            classify(&upper, &fx.path("data.raw")).unwrap(),
            OperationMode::Decompress
        );
    }

    #[test]
    fn test_tar_named_file_is_sniffed() {
        let fx = Fixture::new();
        let inner = fx.file("inner.txt", b"payload");

        let real = fx.path("bundle.tar");
        container::pack(&inner, &real).unwrap();
        assert_eq!(
            classify(&real, &fx.path("unpacked.out")).unwrap(),
            OperationMode::ExtractContainer
        );

        let fake = fx.file("fake.tar", &[b'z'; 1024]);
        assert_eq!(
            kind(classify(&fake, &fx.path("unpacked.out"))),
            PackErrorKind::UnsupportedFormat
        );
    }

    #[test]
    fn test_compressed_tar_in_fallback_is_unsupported() {
        let fx = Fixture::new();
        // gzip magic followed by filler; only uncompressed tars are extracted here.
        let mut gzip_like = vec![0x1f, 0x8b, 0x08, 0x00];
        gzip_like.extend_from_slice(&[0x55; 1020]);
        let tgz = fx.file("bundle.tgz", &gzip_like);
        assert_eq!(
            kind(classify(&tgz, &fx.path("out"))),
            PackErrorKind::UnsupportedFormat
        );
    }

    #[test]
    fn test_container_detection_ignores_name() {
        let fx = Fixture::new();
        let inner = fx.file("inner.txt", b"payload");
        let disguised = fx.path("photo.jpg");
        container::pack(&inner, &disguised).unwrap();
        assert_eq!(
            classify(&disguised, &fx.path("out")).unwrap(),
            OperationMode::ExtractContainer
        );
    }

    #[test]
    fn test_unsupported_target_extension() {
        let fx = Fixture::new();
        let plain = fx.file("notes.txt", b"0123456789");
        assert_eq!(
            kind(classify(&plain, &fx.path("out.gz"))),
            PackErrorKind::UnsupportedFormat
        );
    }

    #[test]
    fn test_directory_source_without_codec_target() {
        let fx = Fixture::new();
        let project = fx.subdir("project.zst");
        assert_eq!(
            kind(classify(&project, &fx.path("restored"))),
            PackErrorKind::UnsupportedFormat
        );
    }

    #[test]
    fn test_missing_source() {
        let fx = Fixture::new();
        assert_eq!(
            kind(classify(&fx.path("ghost.txt"), &fx.path("ghost.zst"))),
            PackErrorKind::NotFound
        );
    }

    #[test]
    fn test_has_no_extension() {
        assert!(has_no_extension(Path::new("restored")));
        assert!(has_no_extension(Path::new("restored/")));
        assert!(has_no_extension(Path::new(".hidden")));
        assert!(has_no_extension(Path::new("trailing.")));
        assert!(!has_no_extension(Path::new("file.out")));
    }
}
