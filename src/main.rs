//! Standalone analyzer: reads (value, weight) pairs from stdin, writes
//! the curve artifacts into the working directory and prints the summary.
//!
//! ```bash
//! acorr < samples.dat
//! ```
//!
//! No flags, no environment variables; the analysis parameters are fixed
//! constants. Exits 0 on success, 1 on any reported error.

use std::error::Error;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::process;

use colored::Colorize;

use acorr::output::{
    format_summary, format_warnings, write_block_curve, write_correlation_curve, write_histogram,
};
use acorr::{load_pairs, run_analysis, BLOCK_FILE, CORRELATION_FILE, HISTOGRAM_FILE};

fn main() {
    if let Err(error) = run() {
        eprintln!("{} {}", "error:".red().bold(), error);
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let stdin = io::stdin();
    let series = load_pairs(stdin.lock())?;
    let report = run_analysis(&series)?;

    write_artifact(CORRELATION_FILE, |out| {
        write_correlation_curve(&report.correlation, out)
    })?;
    write_artifact(BLOCK_FILE, |out| write_block_curve(&report.blocking, out))?;
    write_artifact(HISTOGRAM_FILE, |out| write_histogram(&report.histogram, out))?;

    print!("{}", format_summary(&report.correlation));
    io::stdout().flush()?;

    if !report.warnings.is_empty() {
        eprint!("{}", format_warnings(&report.warnings));
    }

    Ok(())
}

/// Open, write and close one artifact; the handle never outlives the call.
fn write_artifact<F>(path: &str, write: F) -> io::Result<()>
where
    F: FnOnce(&mut BufWriter<File>) -> io::Result<()>,
{
    let mut writer = BufWriter::new(File::create(path)?);
    write(&mut writer)?;
    writer.flush()
}
