//! Fixed analysis parameters and artifact names.

/// Maximum number of autocorrelation lags computed.
///
/// The autocorrelation window covers lags `1..min(n - 1, MAX_LAG)`; series
/// longer than this produce a truncation warning rather than a longer curve.
pub const MAX_LAG: usize = 2000;

/// Minimum number of blocks the blocking analysis keeps at the largest
/// block size tried.
pub const MIN_BLOCKS: usize = 5;

/// Number of block sizes sampled across the usable range.
pub const BLOCK_SIZE_SAMPLES: usize = 50;

/// Number of equal-width histogram bins spanning `[min(v), max(v)]`.
pub const HISTOGRAM_BINS: usize = 31;

/// Significant digits used for every number in the terminal summary.
pub const SUMMARY_DIGITS: usize = 10;

/// Autocorrelation curve artifact, written to the working directory.
pub const CORRELATION_FILE: &str = "corr.out";

/// Block-error curve artifact, written to the working directory.
pub const BLOCK_FILE: &str = "block.out";

/// Histogram artifact, written to the working directory.
pub const HISTOGRAM_FILE: &str = "histo.out";
