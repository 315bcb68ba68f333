//! Weighted moments and autocorrelation analysis.
//!
//! The estimators here treat the series as a single stationary stream of
//! weighted observations. Serial correlation between samples inflates the
//! naive error estimate; the integrated autocorrelation time measures by
//! how much, and the corrected error reported at the end accounts for it.

use serde::{Deserialize, Serialize};

use super::AnalysisError;
use crate::constants::MAX_LAG;
use crate::data::WeightedSeries;

/// One point of the normalized autocorrelation curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CorrelationPoint {
    /// Lag in samples, starting at 1.
    pub lag: usize,

    /// Normalized autocorrelation coefficient at this lag.
    pub coefficient: f64,
}

/// Weighted moments, autocorrelation curve and autocorrelation-corrected
/// error estimates for one series.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorrelationAnalysis {
    /// Weighted mean of the observable.
    pub mean: f64,

    /// Raw number of samples.
    pub count: usize,

    /// Kish effective sample size `(Σw)² / Σw²`.
    pub effective_count: f64,

    /// Weighted variance with the small-sample correction
    /// `neff / (neff - 1)` applied.
    pub variance: f64,

    /// Standard deviation, `sqrt(variance)`.
    pub std_dev: f64,

    /// Integrated autocorrelation time, at least 1.
    pub integrated_time: f64,

    /// Effective sample size after dividing out the integrated time.
    pub corrected_effective_count: f64,

    /// Standard error of the mean corrected for serial correlation,
    /// `sqrt(variance * integrated_time / effective_count)`.
    pub corrected_error: f64,

    /// Autocorrelation curve for lags `1..min(n - 1, MAX_LAG)`, in
    /// increasing lag order.
    pub curve: Vec<CorrelationPoint>,
}

/// Compute weighted moments and the autocorrelation analysis of a series.
///
/// The normalized autocorrelation at lag `i` weights each sample pair by
/// the geometric mean of its two weights:
///
/// ```text
/// c[i] = Σ_k sqrt(w[k] w[k+i]) (v[k] - m)(v[k+i] - m)
///        / Σ_k sqrt(w[k] w[k+i]) / var
/// ```
///
/// The integrated time sums `1 + 2 Σ c[i]` with automatic windowing: the
/// sum truncates permanently at the first negative coefficient, which is
/// where the estimator turns noise-dominated.
///
/// # Errors
///
/// [`AnalysisError::EffectiveSampleTooSmall`] when `neff ≤ 1` and
/// [`AnalysisError::ZeroVariance`] when all values are equal.
///
/// # Panics
///
/// Panics if the series is empty.
pub fn analyze(series: &WeightedSeries) -> Result<CorrelationAnalysis, AnalysisError> {
    let v = &series.values;
    let w = &series.weights;
    let n = v.len();
    assert!(n > 0, "cannot analyze an empty series");

    let norm: f64 = w.iter().sum();
    let mean = v.iter().zip(w).map(|(x, wt)| x * wt).sum::<f64>() / norm;

    let sum_sq_weights: f64 = w.iter().map(|wt| wt * wt).sum();
    let effective_count = norm * norm / sum_sq_weights;
    if effective_count <= 1.0 {
        return Err(AnalysisError::EffectiveSampleTooSmall {
            neff: effective_count,
        });
    }

    let raw_variance = v
        .iter()
        .zip(w)
        .map(|(x, wt)| wt * (x - mean) * (x - mean))
        .sum::<f64>()
        / norm;
    let variance = raw_variance * effective_count / (effective_count - 1.0);
    if variance <= 0.0 {
        return Err(AnalysisError::ZeroVariance);
    }
    let std_dev = variance.sqrt();

    let window = (n - 1).min(MAX_LAG);
    let mut curve = Vec::with_capacity(window.saturating_sub(1));
    for lag in 1..window {
        let mut covariance = 0.0;
        let mut lag_norm = 0.0;
        for k in 0..n - lag {
            let pair_weight = (w[k] * w[k + lag]).sqrt();
            covariance += pair_weight * (v[k] - mean) * (v[k + lag] - mean);
            lag_norm += pair_weight;
        }
        curve.push(CorrelationPoint {
            lag,
            coefficient: covariance / lag_norm / variance,
        });
    }

    // Automatic windowing: the first negative coefficient closes the sum
    // before contributing.
    let mut integrated_time = 1.0;
    let mut in_window = true;
    for point in &curve {
        if point.coefficient < 0.0 {
            in_window = false;
        }
        if in_window {
            integrated_time += 2.0 * point.coefficient;
        }
    }
    let integrated_time = integrated_time.max(1.0);

    Ok(CorrelationAnalysis {
        mean,
        count: n,
        effective_count,
        variance,
        std_dev,
        integrated_time,
        corrected_effective_count: effective_count / integrated_time,
        corrected_error: (variance * integrated_time / effective_count).sqrt(),
        curve,
    })
}
