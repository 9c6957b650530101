//! Artifact path derivation.
//!
//! The input, compressed, and decompressed files are linked only by the
//! input's basename. Two runs on inputs with the same basename write to the
//! same artifacts; no locking is attempted.

use crate::config::VerifierConfig;
use crate::error::{HzipCheckError, Result};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

/// Extension appended to the compressed artifact.
pub const COMPRESSED_EXTENSION: &str = "huff";

/// The three files touched by one verification run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    /// The original file, as supplied.
    pub input: PathBuf,
    /// `<zip_dir>/<basename>.huff`
    pub compressed: PathBuf,
    /// `<unzip_dir>/<basename>`
    pub decompressed: PathBuf,
}

impl ArtifactPaths {
    /// Derive artifact paths for `input` under the configured staging directories.
    pub fn derive(config: &VerifierConfig, input: impl Into<PathBuf>) -> Result<Self> {
        let input = input.into();
        let basename = input
            .file_name()
            .ok_or_else(|| HzipCheckError::invalid_input(&input))?
            .to_owned();

        let mut compressed_name = OsString::from(&basename);
        compressed_name.push(".");
        compressed_name.push(COMPRESSED_EXTENSION);

        Ok(Self {
            compressed: config.zip_dir.join(compressed_name),
            decompressed: config.unzip_dir.join(&basename),
            input,
        })
    }

    /// Create the parent directories of both artifacts if they are missing.
    pub fn ensure_staging_dirs(&self) -> Result<()> {
        for artifact in [&self.compressed, &self.decompressed] {
            if let Some(dir) = artifact.parent().filter(|d| !d.as_os_str().is_empty()) {
                create_dir(dir)?;
            }
        }
        Ok(())
    }

    /// Reject a layout where either staging directory is the input's own directory.
    ///
    /// Both staging directories and the input must already exist. Paths are
    /// compared after canonicalization, so `./x`, symlinks, and absolute
    /// spellings of the same directory all match.
    pub fn ensure_isolated_from_input(&self) -> Result<()> {
        let input = canonical(&self.input)?;
        let Some(input_dir) = input.parent() else {
            return Err(HzipCheckError::invalid_input(&self.input));
        };

        for artifact in [&self.compressed, &self.decompressed] {
            let dir = match artifact.parent().filter(|d| !d.as_os_str().is_empty()) {
                Some(dir) => canonical(dir)?,
                None => canonical(Path::new("."))?,
            };
            if dir == input_dir {
                return Err(HzipCheckError::staging_conflict(&self.input, dir));
            }
        }
        Ok(())
    }
}

fn canonical(path: &Path) -> Result<PathBuf> {
    fs::canonicalize(path).map_err(|e| HzipCheckError::filesystem(path, e))
}

fn create_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|e| HzipCheckError::filesystem(dir, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_uses_basename() {
        let config = VerifierConfig::default();
        let paths = ArtifactPaths::derive(&config, "data/corpus/book.txt").unwrap();

        assert_eq!(paths.input, Path::new("data/corpus/book.txt"));
        assert_eq!(paths.compressed, Path::new("test/zip-result/book.txt.huff"));
        assert_eq!(paths.decompressed, Path::new("test/unzip-result/book.txt"));
    }

    #[test]
    fn test_derive_without_extension() {
        let config = VerifierConfig::default().with_staging_root("/stage");
        let paths = ArtifactPaths::derive(&config, "/abs/README").unwrap();

        assert_eq!(paths.compressed, Path::new("/stage/zip-result/README.huff"));
        assert_eq!(paths.decompressed, Path::new("/stage/unzip-result/README"));
    }

    #[test]
    fn test_derive_rejects_nameless_input() {
        let config = VerifierConfig::default();
        for bad in ["/", "..", "data/.."] {
            let err = ArtifactPaths::derive(&config, bad).unwrap_err();
            assert!(matches!(err, HzipCheckError::InvalidInput { .. }), "{bad}");
        }
    }

    #[test]
    fn test_ensure_staging_dirs_is_idempotent() {
        let root = tempfile::tempdir().unwrap();
        let config = VerifierConfig::default().with_staging_root(root.path().join("nested"));
        let paths = ArtifactPaths::derive(&config, "input.bin").unwrap();

        paths.ensure_staging_dirs().unwrap();
        paths.ensure_staging_dirs().unwrap();

        assert!(config.zip_dir.is_dir());
        assert!(config.unzip_dir.is_dir());
    }

    #[test]
    fn test_isolation_accepts_separate_dirs() {
        let root = tempfile::tempdir().unwrap();
        let input = root.path().join("input.bin");
        fs::write(&input, b"x").unwrap();
        let config = VerifierConfig::default().with_staging_root(root.path().join("test"));
        let paths = ArtifactPaths::derive(&config, &input).unwrap();

        paths.ensure_staging_dirs().unwrap();
        paths.ensure_isolated_from_input().unwrap();
    }

    #[test]
    fn test_isolation_rejects_input_inside_staging_dir() {
        let root = tempfile::tempdir().unwrap();
        let config = VerifierConfig::default().with_staging_root(root.path());
        fs::create_dir_all(&config.unzip_dir).unwrap();
        let input = config.unzip_dir.join("sample.txt");
        fs::write(&input, b"hello world").unwrap();

        // Spelled differently from the configured directory.
        let indirect = root.path().join("zip-result/../unzip-result/sample.txt");
        let paths = ArtifactPaths::derive(&config, indirect).unwrap();
        paths.ensure_staging_dirs().unwrap();

        let err = paths.ensure_isolated_from_input().unwrap_err();
        assert!(matches!(err, HzipCheckError::StagingConflict { .. }));
    }

    #[test]
    fn test_isolation_rejects_input_in_zip_dir() {
        let root = tempfile::tempdir().unwrap();
        let config = VerifierConfig::default().with_staging_root(root.path());
        fs::create_dir_all(&config.zip_dir).unwrap();
        let input = config.zip_dir.join("sample.txt");
        fs::write(&input, b"abc").unwrap();

        let paths = ArtifactPaths::derive(&config, &input).unwrap();
        paths.ensure_staging_dirs().unwrap();

        let err = paths.ensure_isolated_from_input().unwrap_err();
        assert!(matches!(err, HzipCheckError::StagingConflict { .. }));
    }

    #[test]
    fn test_ensure_staging_dirs_reports_blocked_path() {
        let root = tempfile::tempdir().unwrap();
        let blocker = root.path().join("not-a-dir");
        fs::write(&blocker, b"x").unwrap();

        let config = VerifierConfig::default().with_staging_root(&blocker);
        let paths = ArtifactPaths::derive(&config, "input.bin").unwrap();

        let err = paths.ensure_staging_dirs().unwrap_err();
        assert!(matches!(err, HzipCheckError::Filesystem { .. }));
    }
}
