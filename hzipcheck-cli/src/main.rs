//! hzipcheck - round-trip checker for the hzip Huffman tool
//!
//! Compresses a file with the tool, decompresses the result, and reports
//! whether the bytes survived the trip unchanged.

mod report;

use clap::Parser;
use hzipcheck_core::{HzipCheckError, Verifier, VerifierConfig};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

const PROGRAM: &str = "hzipcheck";

#[derive(Parser)]
#[command(name = PROGRAM)]
#[command(version, about = "Round-trip correctness check for the hzip compression tool")]
#[command(long_about = "
Compresses <input-file> with the hzip tool, decompresses the artifact, and
checks that the result is byte-identical to the original.

Artifacts are left in place for inspection:
  <zip-dir>/<name>.huff     compressed
  <unzip-dir>/<name>        decompressed

Environment:
  HZIPCHECK_TOOL        tool executable   (default ./build/hzip)
  HZIPCHECK_ZIP_DIR     compressed dir    (default test/zip-result)
  HZIPCHECK_UNZIP_DIR   decompressed dir  (default test/unzip-result)
  RUST_LOG              log filter        (default warn)
")]
struct Cli {
    /// File to compress and decompress
    input: Option<PathBuf>,
}

fn main() {
    init_tracing();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            e.print().ok();
            std::process::exit(if e.use_stderr() { 1 } else { 0 });
        }
    };

    match run(cli.input.as_deref()) {
        Ok(()) => {}
        Err(HzipCheckError::Usage) => {
            eprintln!("{}", report::usage(PROGRAM));
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn run(input: Option<&Path>) -> Result<(), HzipCheckError> {
    let input = input.ok_or(HzipCheckError::Usage)?;
    let config = VerifierConfig::from_env();
    tracing::debug!(?config, "loaded configuration");

    let result = Verifier::with_subprocess(config).verify(input)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    report::write_report(&mut out, &result)?;
    out.flush()?;
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
