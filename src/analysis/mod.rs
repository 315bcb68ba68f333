//! Statistical analysis of a loaded weighted series.
//!
//! Three independent analyzers consume the same series read-only:
//!
//! 1. **Correlation** ([`correlation`]): weighted mean and variance,
//!    Kish effective sample size, normalized autocorrelation function,
//!    integrated autocorrelation time and the corrected error.
//! 2. **Blocking** ([`blocking`]): standard error of the mean at a range
//!    of block sizes, weights ignored.
//! 3. **Histogram** ([`histogram`]): weighted density histogram over the
//!    value range.
//!
//! [`run_analysis`] runs all three sequentially and bundles the results
//! with any accumulated warnings. The analyzers are pure: persistence is
//! the output module's job.

pub mod blocking;
pub mod correlation;
pub mod histogram;

pub use blocking::{BlockPoint, BlockingAnalysis};
pub use correlation::{CorrelationAnalysis, CorrelationPoint};
pub use histogram::{Histogram, HistogramBin};

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::MAX_LAG;
use crate::data::WeightedSeries;

/// Errors from degenerate input the analysis formulas are undefined for.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisError {
    /// Effective sample size is at most one, so the small-sample variance
    /// correction `neff/(neff - 1)` divides by zero.
    ///
    /// With strictly positive weights this occurs exactly for a
    /// single-sample series.
    EffectiveSampleTooSmall {
        /// The computed Kish effective sample size.
        neff: f64,
    },

    /// Weighted variance is zero (all values equal); the autocorrelation
    /// normalization divides by it.
    ZeroVariance,

    /// Value range is zero (all values equal); the histogram bin width
    /// divides by it.
    ZeroRange,
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalysisError::EffectiveSampleTooSmall { neff } => {
                write!(
                    f,
                    "effective sample size {} is too small for the variance correction (need > 1)",
                    neff
                )
            }
            AnalysisError::ZeroVariance => {
                write!(f, "weighted variance is zero (all values equal); autocorrelation is undefined")
            }
            AnalysisError::ZeroRange => {
                write!(f, "value range is zero (all values equal); histogram binning is undefined")
            }
        }
    }
}

impl std::error::Error for AnalysisError {}

/// Non-fatal conditions noted during analysis.
///
/// Warnings never abort the run; the driver renders them to stderr so the
/// summary stream stays clean.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Warning {
    /// A tried block size left a single block and was skipped.
    BlockSizeSkipped {
        /// The skipped block size.
        size: usize,
    },

    /// The series is longer than the autocorrelation window covers.
    LagCapReached {
        /// Number of lags actually computed.
        cap: usize,
    },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::BlockSizeSkipped { size } => {
                write!(f, "block size {} leaves a single block; size skipped", size)
            }
            Warning::LagCapReached { cap } => {
                write!(f, "autocorrelation window truncated at {} lags", cap)
            }
        }
    }
}

/// Results of the full three-analyzer pass over one series.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Weighted moments, autocorrelation curve and corrected error.
    pub correlation: CorrelationAnalysis,

    /// Block-size error curve.
    pub blocking: BlockingAnalysis,

    /// Weighted density histogram.
    pub histogram: Histogram,

    /// Non-fatal conditions encountered along the way.
    pub warnings: Vec<Warning>,
}

/// Run correlation, blocking and histogram analysis over one series.
///
/// The analyzers share the borrowed series and run sequentially with no
/// interaction between them.
///
/// # Errors
///
/// Returns [`AnalysisError`] for degenerate input: a series whose
/// effective sample size is at most one, or whose values are all equal.
///
/// # Panics
///
/// Panics if the series is empty; [`crate::data::load_pairs`] never
/// produces one.
pub fn run_analysis(series: &WeightedSeries) -> Result<AnalysisReport, AnalysisError> {
    let correlation = correlation::analyze(series)?;
    let blocking = blocking::analyze(&series.values);
    let histogram = histogram::analyze(series)?;

    let mut warnings = Vec::new();
    if series.len() > MAX_LAG + 1 {
        warnings.push(Warning::LagCapReached { cap: MAX_LAG });
    }
    warnings.extend(
        blocking
            .skipped_sizes
            .iter()
            .map(|&size| Warning::BlockSizeSkipped { size }),
    );

    Ok(AnalysisReport {
        correlation,
        blocking,
        histogram,
        warnings,
    })
}
