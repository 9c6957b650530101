//! Verifier configuration: tool location and staging directories.

use crate::error::{HzipCheckError, Result};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Environment variable overriding the tool path.
pub const ENV_TOOL: &str = "HZIPCHECK_TOOL";
/// Environment variable overriding the compressed-artifact staging directory.
pub const ENV_ZIP_DIR: &str = "HZIPCHECK_ZIP_DIR";
/// Environment variable overriding the decompressed-artifact staging directory.
pub const ENV_UNZIP_DIR: &str = "HZIPCHECK_UNZIP_DIR";

/// Where the tool lives and where its artifacts are staged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifierConfig {
    /// Executable invoked as `<tool> -c|-d <input> <output>`.
    pub tool: PathBuf,
    /// Directory receiving `<basename>.huff`.
    pub zip_dir: PathBuf,
    /// Directory receiving the decompressed `<basename>`.
    pub unzip_dir: PathBuf,
}

impl VerifierConfig {
    /// Default tool path, relative to the working directory.
    pub const DEFAULT_TOOL: &'static str = "./build/hzip";
    /// Default compressed-artifact staging directory.
    pub const DEFAULT_ZIP_DIR: &'static str = "test/zip-result";
    /// Default decompressed-artifact staging directory.
    pub const DEFAULT_UNZIP_DIR: &'static str = "test/unzip-result";

    /// Defaults overlaid with `HZIPCHECK_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var_os(key))
    }

    /// Defaults overlaid with whatever `lookup` returns for each variable.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<OsString>,
    {
        let mut config = Self::default();
        if let Some(tool) = lookup(ENV_TOOL).filter(|v| !v.is_empty()) {
            config.tool = tool.into();
        }
        if let Some(dir) = lookup(ENV_ZIP_DIR).filter(|v| !v.is_empty()) {
            config.zip_dir = dir.into();
        }
        if let Some(dir) = lookup(ENV_UNZIP_DIR).filter(|v| !v.is_empty()) {
            config.unzip_dir = dir.into();
        }
        config
    }

    /// Set the tool path.
    pub fn with_tool(mut self, tool: impl Into<PathBuf>) -> Self {
        self.tool = tool.into();
        self
    }

    /// Set the compressed-artifact staging directory.
    pub fn with_zip_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.zip_dir = dir.into();
        self
    }

    /// Set the decompressed-artifact staging directory.
    pub fn with_unzip_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.unzip_dir = dir.into();
        self
    }

    /// Put both staging directories under `root`.
    pub fn with_staging_root(self, root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        self.with_zip_dir(root.join("zip-result"))
            .with_unzip_dir(root.join("unzip-result"))
    }

    /// Check that the two staging directories are distinct.
    pub fn validate(&self) -> Result<()> {
        if self.zip_dir == self.unzip_dir {
            return Err(HzipCheckError::config(format!(
                "zip and unzip staging directories must differ (both {})",
                self.zip_dir.display()
            )));
        }
        Ok(())
    }
}

impl Default for VerifierConfig {
    fn default() -> Self {
        Self {
            tool: PathBuf::from(Self::DEFAULT_TOOL),
            zip_dir: PathBuf::from(Self::DEFAULT_ZIP_DIR),
            unzip_dir: PathBuf::from(Self::DEFAULT_UNZIP_DIR),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = VerifierConfig::default();
        assert_eq!(config.tool, Path::new("./build/hzip"));
        assert_eq!(config.zip_dir, Path::new("test/zip-result"));
        assert_eq!(config.unzip_dir, Path::new("test/unzip-result"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_lookup_overrides() {
        let config = VerifierConfig::from_lookup(|key| match key {
            ENV_TOOL => Some("/opt/hzip".into()),
            ENV_UNZIP_DIR => Some("out/unzipped".into()),
            ENV_ZIP_DIR => Some("".into()),
            _ => None,
        });
        assert_eq!(config.tool, Path::new("/opt/hzip"));
        // Empty values fall back to the default.
        assert_eq!(config.zip_dir, Path::new("test/zip-result"));
        assert_eq!(config.unzip_dir, Path::new("out/unzipped"));
    }

    #[test]
    fn test_staging_root() {
        let config = VerifierConfig::default().with_staging_root("/tmp/run1");
        assert_eq!(config.zip_dir, Path::new("/tmp/run1/zip-result"));
        assert_eq!(config.unzip_dir, Path::new("/tmp/run1/unzip-result"));
    }

    #[test]
    fn test_validate_rejects_shared_dir() {
        let config = VerifierConfig::default()
            .with_zip_dir("staging")
            .with_unzip_dir("staging");
        let err = config.validate().unwrap_err();
        assert!(matches!(err, HzipCheckError::Config { .. }));
    }
}
