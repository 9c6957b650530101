//! Error types for hzipcheck operations.
//!
//! Every variant is fatal to a verification run. A mismatching round trip is
//! not an error: it is reported through [`Verdict::Differ`](crate::Verdict).

use crate::tool::ToolMode;
use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// The main error type for hzipcheck operations.
#[derive(Debug, Error)]
pub enum HzipCheckError {
    /// No input path was supplied on the command line.
    #[error("missing input file argument")]
    Usage,

    /// I/O error without path context.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// I/O error on a specific file or directory.
    #[error("{}: {source}", path.display())]
    Filesystem {
        /// Path that could not be read, measured, or created.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The input path has no usable file name.
    #[error("Invalid input path (no file name): {}", path.display())]
    InvalidInput {
        /// The offending path.
        path: PathBuf,
    },

    /// A staging directory is the directory holding the input file.
    #[error("Staging directory {} holds the input file {}", dir.display(), input.display())]
    StagingConflict {
        /// The input file as supplied.
        input: PathBuf,
        /// The offending staging directory (canonical).
        dir: PathBuf,
    },

    /// Inconsistent verifier configuration.
    #[error("Invalid configuration: {message}")]
    Config {
        /// Description of the problem.
        message: String,
    },

    /// The external tool could not be launched at all.
    #[error("Failed to launch {}: {source}", program.display())]
    ToolSpawn {
        /// Program that was invoked.
        program: PathBuf,
        /// Underlying spawn error.
        #[source]
        source: io::Error,
    },

    /// The external tool ran but reported failure.
    #[error("{mode} step failed: {status}")]
    ToolFailed {
        /// Which invocation failed.
        mode: ToolMode,
        /// Human-readable exit status (`exit status: 1`, `signal: 9`, ...).
        status: String,
    },
}

/// Result type alias for hzipcheck operations.
pub type Result<T> = std::result::Result<T, HzipCheckError>;

impl HzipCheckError {
    /// Create a path-annotated filesystem error.
    pub fn filesystem(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Filesystem {
            path: path.into(),
            source,
        }
    }

    /// Create an invalid input path error.
    pub fn invalid_input(path: impl Into<PathBuf>) -> Self {
        Self::InvalidInput { path: path.into() }
    }

    /// Create a staging conflict error.
    pub fn staging_conflict(input: impl Into<PathBuf>, dir: impl Into<PathBuf>) -> Self {
        Self::StagingConflict {
            input: input.into(),
            dir: dir.into(),
        }
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a spawn failure error.
    pub fn tool_spawn(program: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::ToolSpawn {
            program: program.into(),
            source,
        }
    }

    /// Create a tool failure error from a process exit status.
    pub fn tool_failed(mode: ToolMode, status: ExitStatus) -> Self {
        Self::ToolFailed {
            mode,
            status: status.to_string(),
        }
    }

    /// Create a tool failure error with a free-form status description.
    pub fn tool_failed_with(mode: ToolMode, status: impl Into<String>) -> Self {
        Self::ToolFailed {
            mode,
            status: status.into(),
        }
    }

    /// Whether this error came from the tool under test rather than the harness.
    pub fn is_tool_error(&self) -> bool {
        matches!(self, Self::ToolSpawn { .. } | Self::ToolFailed { .. })
    }
}
