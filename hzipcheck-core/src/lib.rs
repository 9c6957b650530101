//! # hzipcheck Core
//!
//! Round-trip verification for the `hzip` Huffman compression tool.
//!
//! A run compresses an input file with the tool, decompresses the artifact,
//! and compares the result with the original byte for byte:
//!
//! ```text
//! input ──(-c)──► <zip_dir>/<name>.huff ──(-d)──► <unzip_dir>/<name>
//!   │                                                   │
//!   └──────────────── byte-for-byte compare ────────────┘
//! ```
//!
//! - [`config`]: tool path and staging directories
//! - [`paths`]: artifact path derivation
//! - [`tool`]: the [`CompressionTool`] capability and its adapters
//! - [`verify`]: the [`Verifier`]
//! - [`result`]: [`VerificationResult`] and [`Verdict`]
//! - [`error`]: error types
//!
//! ## Example
//!
//! ```rust
//! use hzipcheck_core::{InMemoryTool, Verdict, Verifier, VerifierConfig};
//!
//! let dir = tempfile::tempdir().unwrap();
//! let input = dir.path().join("sample.txt");
//! std::fs::write(&input, b"aaaa bbbb").unwrap();
//!
//! let config = VerifierConfig::default().with_staging_root(dir.path());
//! let verifier = Verifier::new(config, InMemoryTool::identity());
//! let result = verifier.verify(&input).unwrap();
//!
//! assert_eq!(result.original_size, 9);
//! assert_eq!(result.verdict, Verdict::Identical);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod paths;
pub mod result;
pub mod tool;
pub mod verify;

// Re-exports for convenience
pub use config::VerifierConfig;
pub use error::{HzipCheckError, Result};
pub use paths::ArtifactPaths;
pub use result::{Verdict, VerificationResult};
pub use tool::{CompressionTool, InMemoryTool, SubprocessTool, ToolMode};
pub use verify::Verifier;
