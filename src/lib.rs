//! # acorr
//!
//! Autocorrelation-aware error analysis for weighted Monte Carlo time
//! series.
//!
//! Given a stream of (value, weight) samples this crate computes:
//! - weighted mean and variance with the Kish effective sample size and a
//!   small-sample correction,
//! - the normalized weighted autocorrelation function, the integrated
//!   autocorrelation time (automatic windowing at the first negative
//!   coefficient) and the correlation-corrected error of the mean,
//! - a blocking analysis of the standard error across block sizes,
//! - a weighted density histogram of the value distribution.
//!
//! The bundled `acorr` binary reads pairs from stdin, writes the three
//! curve artifacts (`corr.out`, `block.out`, `histo.out`) into the
//! working directory and prints a fixed-format summary.
//!
//! ## Quick Start
//!
//! ```
//! use acorr::{run_analysis, WeightedSeries};
//!
//! let series = WeightedSeries::unweighted(vec![1.0, 2.0, 3.0, 4.0, 5.0]);
//! let report = run_analysis(&series)?;
//!
//! assert_eq!(report.correlation.mean, 3.0);
//! assert_eq!(report.correlation.effective_count, 5.0);
//! # Ok::<(), acorr::AnalysisError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod constants;

pub mod analysis;
pub mod data;
pub mod output;

pub use analysis::{run_analysis, AnalysisError, AnalysisReport, Warning};
pub use constants::{
    BLOCK_FILE, BLOCK_SIZE_SAMPLES, CORRELATION_FILE, HISTOGRAM_BINS, HISTOGRAM_FILE, MAX_LAG,
    MIN_BLOCKS, SUMMARY_DIGITS,
};
pub use data::{load_pairs, DataError, WeightedSeries};
