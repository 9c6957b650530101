//! The compression tool under test, as a capability.
//!
//! The external contract is file-to-file:
//!
//! ```text
//! <tool> -c <input> <output>    compress
//! <tool> -d <input> <output>    decompress
//! ```
//!
//! [`SubprocessTool`] drives a real executable. [`InMemoryTool`] applies byte
//! transforms in-process so the verifier can be tested without one.

use crate::error::{HzipCheckError, Result};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Direction of a tool invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolMode {
    /// Original bytes in, compressed artifact out.
    Compress,
    /// Compressed artifact in, original bytes out.
    Decompress,
}

impl ToolMode {
    /// Command-line directive for this mode.
    pub fn flag(self) -> &'static str {
        match self {
            Self::Compress => "-c",
            Self::Decompress => "-d",
        }
    }

    /// Lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Compress => "compress",
            Self::Decompress => "decompress",
        }
    }
}

impl fmt::Display for ToolMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A compressor/decompressor that reads one file and writes another.
pub trait CompressionTool {
    /// Run the tool in `mode`, reading `input` and writing `output`.
    ///
    /// Returns only once the output is complete. Any failure of the tool
    /// itself must be reported as an error, never as a successful run.
    fn run(&self, mode: ToolMode, input: &Path, output: &Path) -> Result<()>;

    /// Compress `input` into `output`.
    fn compress(&self, input: &Path, output: &Path) -> Result<()> {
        self.run(ToolMode::Compress, input, output)
    }

    /// Decompress `input` into `output`.
    fn decompress(&self, input: &Path, output: &Path) -> Result<()> {
        self.run(ToolMode::Decompress, input, output)
    }
}

impl<T: CompressionTool + ?Sized> CompressionTool for &T {
    fn run(&self, mode: ToolMode, input: &Path, output: &Path) -> Result<()> {
        (**self).run(mode, input, output)
    }
}

impl<T: CompressionTool + ?Sized> CompressionTool for Box<T> {
    fn run(&self, mode: ToolMode, input: &Path, output: &Path) -> Result<()> {
        (**self).run(mode, input, output)
    }
}

/// Runs an external executable as a blocking child process.
///
/// Standard streams are inherited. There is no timeout: a hung tool hangs
/// the caller.
#[derive(Debug, Clone)]
pub struct SubprocessTool {
    program: PathBuf,
}

impl SubprocessTool {
    /// Wrap the executable at `program`.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Path of the wrapped executable.
    pub fn program(&self) -> &Path {
        &self.program
    }
}

impl CompressionTool for SubprocessTool {
    fn run(&self, mode: ToolMode, input: &Path, output: &Path) -> Result<()> {
        tracing::debug!(
            program = %self.program.display(),
            flag = mode.flag(),
            input = %input.display(),
            output = %output.display(),
            "invoking tool"
        );

        let status = Command::new(&self.program)
            .arg(mode.flag())
            .arg(input)
            .arg(output)
            .status()
            .map_err(|e| HzipCheckError::tool_spawn(&self.program, e))?;

        if !status.success() {
            tracing::warn!(%mode, %status, "tool reported failure");
            return Err(HzipCheckError::tool_failed(mode, status));
        }
        Ok(())
    }
}

/// Byte transform used by [`InMemoryTool`]. An `Err` simulates a tool failure.
pub type Transform = Box<dyn Fn(&[u8]) -> std::result::Result<Vec<u8>, String> + Send + Sync>;

/// In-process stand-in for the external tool.
pub struct InMemoryTool {
    compress: Transform,
    decompress: Transform,
}

impl InMemoryTool {
    /// Build a tool from explicit compress and decompress transforms.
    pub fn new<C, D>(compress: C, decompress: D) -> Self
    where
        C: Fn(&[u8]) -> std::result::Result<Vec<u8>, String> + Send + Sync + 'static,
        D: Fn(&[u8]) -> std::result::Result<Vec<u8>, String> + Send + Sync + 'static,
    {
        Self {
            compress: Box::new(compress),
            decompress: Box::new(decompress),
        }
    }

    /// A tool that copies bytes unchanged in both directions.
    pub fn identity() -> Self {
        Self::new(|data| Ok(data.to_vec()), |data| Ok(data.to_vec()))
    }
}

impl fmt::Debug for InMemoryTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InMemoryTool").finish_non_exhaustive()
    }
}

impl CompressionTool for InMemoryTool {
    fn run(&self, mode: ToolMode, input: &Path, output: &Path) -> Result<()> {
        let data = fs::read(input).map_err(|e| HzipCheckError::filesystem(input, e))?;
        let transform = match mode {
            ToolMode::Compress => &self.compress,
            ToolMode::Decompress => &self.decompress,
        };
        let produced = transform(&data).map_err(|msg| HzipCheckError::tool_failed_with(mode, msg))?;
        fs::write(output, produced).map_err(|e| HzipCheckError::filesystem(output, e))
    }
}
