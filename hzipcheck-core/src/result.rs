//! Outcome of a single verification run.

use std::fmt;
use std::path::PathBuf;

/// Whether the decompressed artifact matched the original byte for byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Same length, same bytes, same order.
    Identical,
    /// Anything else. The tool under test is broken.
    Differ,
}

impl Verdict {
    /// Compare two byte buffers in full.
    pub fn compare(original: &[u8], roundtripped: &[u8]) -> Self {
        if original == roundtripped {
            Self::Identical
        } else {
            Self::Differ
        }
    }

    /// `"identical"` or `"differ"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Identical => "identical",
            Self::Differ => "differ",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sizes and verdict from a completed compress/decompress cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationResult {
    /// File that was verified.
    pub input: PathBuf,
    /// Compressed artifact left on disk.
    pub compressed_path: PathBuf,
    /// Decompressed artifact left on disk.
    pub decompressed_path: PathBuf,
    /// Byte length of the input.
    pub original_size: u64,
    /// On-disk byte length of the compressed artifact.
    pub compressed_size: u64,
    /// Result of the byte comparison.
    pub verdict: Verdict,
}

impl VerificationResult {
    /// True when the round trip reproduced the input exactly.
    pub fn is_identical(&self) -> bool {
        self.verdict == Verdict::Identical
    }

    /// Compressed size over original size, or `None` for an empty input.
    pub fn ratio(&self) -> Option<f64> {
        if self.original_size == 0 {
            None
        } else {
            Some(self.compressed_size as f64 / self.original_size as f64)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(original_size: u64, compressed_size: u64, verdict: Verdict) -> VerificationResult {
        VerificationResult {
            input: PathBuf::from("in"),
            compressed_path: PathBuf::from("zip/in.huff"),
            decompressed_path: PathBuf::from("unzip/in"),
            original_size,
            compressed_size,
            verdict,
        }
    }

    #[test]
    fn test_compare_is_exact() {
        assert_eq!(Verdict::compare(b"", b""), Verdict::Identical);
        assert_eq!(Verdict::compare(b"aaaa bbbb", b"aaaa bbbb"), Verdict::Identical);
        assert_eq!(Verdict::compare(b"ab", b"ba"), Verdict::Differ);
        assert_eq!(Verdict::compare(b"ab", b"ab\0"), Verdict::Differ);
        assert_eq!(Verdict::compare(b"", b"\0"), Verdict::Differ);
    }

    #[test]
    fn test_verdict_strings() {
        assert_eq!(Verdict::Identical.as_str(), "identical");
        assert_eq!(Verdict::Differ.to_string(), "differ");
    }

    #[test]
    fn test_ratio() {
        assert_eq!(result(0, 12, Verdict::Identical).ratio(), None);
        let r = result(200, 50, Verdict::Identical).ratio().unwrap();
        assert!((r - 0.25).abs() < f64::EPSILON);
        assert!(!result(1, 1, Verdict::Differ).is_identical());
    }
}
