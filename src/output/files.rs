//! Tab-separated file artifacts.

use std::io::{self, Write};

use crate::analysis::{BlockingAnalysis, CorrelationAnalysis, Histogram};

/// Write the autocorrelation curve as `lag<TAB>coefficient` lines.
pub fn write_correlation_curve<W: Write>(
    analysis: &CorrelationAnalysis,
    mut out: W,
) -> io::Result<()> {
    for point in &analysis.curve {
        writeln!(out, "{}\t{}", point.lag, point.coefficient)?;
    }
    Ok(())
}

/// Write the block-error curve as `size<TAB>error` lines.
pub fn write_block_curve<W: Write>(analysis: &BlockingAnalysis, mut out: W) -> io::Result<()> {
    for point in &analysis.points {
        writeln!(out, "{}\t{}", point.size, point.error)?;
    }
    Ok(())
}

/// Write the histogram as `center<TAB>density` lines.
pub fn write_histogram<W: Write>(histogram: &Histogram, mut out: W) -> io::Result<()> {
    for bin in &histogram.bins {
        writeln!(out, "{}\t{}", bin.center, bin.density)?;
    }
    Ok(())
}
