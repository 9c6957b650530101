//! Text rendering of a verification result.

use console::style;
use hzipcheck_core::{Verdict, VerificationResult};
use std::io::{self, Write};

/// Write the size lines, verdict line, and completion marker.
pub fn write_report<W: Write>(out: &mut W, result: &VerificationResult) -> io::Result<()> {
    writeln!(
        out,
        "{} {}",
        style("Original size:").blue().bold(),
        result.original_size
    )?;
    writeln!(
        out,
        "{} {}",
        style("Compressed size:").blue().bold(),
        result.compressed_size
    )?;

    let verdict = match result.verdict {
        Verdict::Identical => style("Files are identical").green().bold(),
        Verdict::Differ => style("Files differ").red().bold(),
    };
    writeln!(out, "{}", verdict)?;

    writeln!(out, "{}", style("Test completed.").cyan().bold())
}

/// Usage line printed when no input is given.
pub fn usage(program: &str) -> String {
    style(format!("Usage: {} <input-file>", program))
        .red()
        .bold()
        .for_stderr()
        .to_string()
}
