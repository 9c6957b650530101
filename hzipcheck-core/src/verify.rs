//! The round-trip verifier.

use crate::config::VerifierConfig;
use crate::error::{HzipCheckError, Result};
use crate::paths::ArtifactPaths;
use crate::result::{Verdict, VerificationResult};
use crate::tool::{CompressionTool, SubprocessTool};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Drives a [`CompressionTool`] through compress, decompress, and compare.
#[derive(Debug, Clone)]
pub struct Verifier<T> {
    config: VerifierConfig,
    tool: T,
}

impl Verifier<SubprocessTool> {
    /// Verifier backed by the executable named in `config.tool`.
    pub fn with_subprocess(config: VerifierConfig) -> Self {
        let tool = SubprocessTool::new(&config.tool);
        Self { config, tool }
    }
}

impl<T: CompressionTool> Verifier<T> {
    /// Create a verifier from a configuration and a tool.
    pub fn new(config: VerifierConfig, tool: T) -> Self {
        Self { config, tool }
    }

    /// The active configuration.
    pub fn config(&self) -> &VerifierConfig {
        &self.config
    }

    /// Staging paths `verify` would use for `input`.
    pub fn artifact_paths(&self, input: impl Into<PathBuf>) -> Result<ArtifactPaths> {
        ArtifactPaths::derive(&self.config, input)
    }

    /// Compress `input`, decompress the artifact, and compare against the original.
    ///
    /// Steps run strictly in order and the first failure aborts the run; a
    /// failed tool invocation never yields a verdict. Artifacts are left in
    /// the staging directories.
    pub fn verify(&self, input: impl AsRef<Path>) -> Result<VerificationResult> {
        self.config.validate()?;
        let paths = self.artifact_paths(input.as_ref())?;
        tracing::debug!(
            compressed = %paths.compressed.display(),
            decompressed = %paths.decompressed.display(),
            "derived artifact paths"
        );

        paths.ensure_staging_dirs()?;

        let original_size = input_len(&paths.input)?;
        tracing::debug!(original_size, "measured input");

        paths.ensure_isolated_from_input()?;

        self.tool.compress(&paths.input, &paths.compressed)?;
        let compressed_size = file_len(&paths.compressed)?;
        tracing::debug!(compressed_size, "compressed");

        self.tool.decompress(&paths.compressed, &paths.decompressed)?;
        tracing::debug!("decompressed");

        let original = read(&paths.input)?;
        let roundtripped = read(&paths.decompressed)?;
        let verdict = Verdict::compare(&original, &roundtripped);

        tracing::info!(
            input = %paths.input.display(),
            original_size,
            compressed_size,
            %verdict,
            "round trip complete"
        );

        Ok(VerificationResult {
            input: paths.input,
            compressed_path: paths.compressed,
            decompressed_path: paths.decompressed,
            original_size,
            compressed_size,
            verdict,
        })
    }
}

fn input_len(path: &Path) -> Result<u64> {
    let metadata = fs::metadata(path).map_err(|e| HzipCheckError::filesystem(path, e))?;
    if !metadata.is_file() {
        return Err(HzipCheckError::filesystem(
            path,
            io::Error::new(io::ErrorKind::InvalidInput, "not a regular file"),
        ));
    }
    Ok(metadata.len())
}

fn file_len(path: &Path) -> Result<u64> {
    fs::metadata(path)
        .map(|m| m.len())
        .map_err(|e| HzipCheckError::filesystem(path, e))
}

fn read(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|e| HzipCheckError::filesystem(path, e))
}
