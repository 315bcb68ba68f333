//! Weighted density histogram of the value distribution.

use serde::{Deserialize, Serialize};

use super::AnalysisError;
use crate::constants::HISTOGRAM_BINS;
use crate::data::WeightedSeries;

/// One histogram bin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistogramBin {
    /// Center of the bin on the value axis.
    pub center: f64,

    /// Weighted density: accumulated weight over `n * bin_width`.
    pub density: f64,
}

/// Weighted density histogram over `[min(v), max(v)]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Histogram {
    /// The `HISTOGRAM_BINS` bins, in increasing center order.
    pub bins: Vec<HistogramBin>,

    /// Smallest value in the series.
    pub min: f64,

    /// Largest value in the series.
    pub max: f64,

    /// Width of each bin, `(max - min) / HISTOGRAM_BINS`.
    pub bin_width: f64,
}

/// Bin the weighted values into `HISTOGRAM_BINS` equal-width bins.
///
/// Bin assignment rounds rather than floors: a sample lands in
/// `floor((v - min)/width + 0.5)`, so bin boundaries sit half a width
/// below each center. The rounding pushes the sample at `v == max` one
/// past the end; the index is clamped into `[0, HISTOGRAM_BINS - 1]`, so
/// that weight accumulates in the last bin. Densities are normalized by
/// `n * width` and integrate to 1 for unit weights.
///
/// # Errors
///
/// [`AnalysisError::ZeroRange`] when all values are equal (including a
/// single-sample series), which makes the bin width zero.
///
/// # Panics
///
/// Panics if the series is empty.
pub fn analyze(series: &WeightedSeries) -> Result<Histogram, AnalysisError> {
    let v = &series.values;
    let w = &series.weights;
    let n = v.len();
    assert!(n > 0, "cannot analyze an empty series");

    let mut min = v[0];
    let mut max = v[0];
    for &x in &v[1..] {
        min = min.min(x);
        max = max.max(x);
    }
    let bin_width = (max - min) / HISTOGRAM_BINS as f64;
    if bin_width <= 0.0 {
        return Err(AnalysisError::ZeroRange);
    }

    let mut counts = vec![0.0f64; HISTOGRAM_BINS];
    for (&x, &wt) in v.iter().zip(w) {
        let bin = ((x - min) / bin_width + 0.5).floor() as usize;
        counts[bin.min(HISTOGRAM_BINS - 1)] += wt;
    }

    let scale = n as f64 * bin_width;
    let bins = counts
        .iter()
        .enumerate()
        .map(|(i, &count)| HistogramBin {
            center: min + (i as f64 + 0.5) * bin_width,
            density: count / scale,
        })
        .collect();

    Ok(Histogram {
        bins,
        min,
        max,
        bin_width,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_density_integrates_to_one_for_unit_weights() {
        let values: Vec<f64> = (0..1000).map(|i| (i as f64 * 0.7391).sin()).collect();
        let series = WeightedSeries::unweighted(values);
        let histogram = analyze(&series).unwrap();

        let integral: f64 = histogram
            .bins
            .iter()
            .map(|bin| bin.density * histogram.bin_width)
            .sum();
        assert!((integral - 1.0).abs() < 1e-9, "integral {}", integral);
    }

    #[test]
    fn test_maximum_value_clamps_into_last_bin() {
        // Range [0, 31] gives unit bin width; 31.0 rounds to bin 31 and
        // must be clamped into bin 30.
        let series = WeightedSeries::unweighted(vec![0.0, 31.0]);
        let histogram = analyze(&series).unwrap();

        assert_eq!(histogram.bins.len(), HISTOGRAM_BINS);
        assert!((histogram.bin_width - 1.0).abs() < 1e-12);
        assert!((histogram.bins[0].density - 0.5).abs() < 1e-12);
        assert!((histogram.bins[30].density - 0.5).abs() < 1e-12);
        for bin in &histogram.bins[1..30] {
            assert_eq!(bin.density, 0.0);
        }
    }

    #[test]
    fn test_rounding_assignment_splits_at_half_width() {
        // With unit bin width, 0.4 rounds down into bin 0 and 0.6 up
        // into bin 1.
        let series = WeightedSeries::unweighted(vec![0.0, 0.4, 0.6, 31.0]);
        let histogram = analyze(&series).unwrap();

        assert!((histogram.bins[0].density - 0.5).abs() < 1e-12);
        assert!((histogram.bins[1].density - 0.25).abs() < 1e-12);
        assert!((histogram.bins[30].density - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_centers_are_offset_half_a_width() {
        let series = WeightedSeries::unweighted(vec![0.0, 31.0]);
        let histogram = analyze(&series).unwrap();
        for (i, bin) in histogram.bins.iter().enumerate() {
            let expected = histogram.min + (i as f64 + 0.5) * histogram.bin_width;
            assert!((bin.center - expected).abs() < 1e-12);
        }
    }

    #[test]
    fn test_weights_scale_bin_mass() {
        // Two values, one with triple weight; densities split 3:1 but the
        // normalization stays by raw count.
        let series = WeightedSeries::new(vec![0.0, 31.0], vec![3.0, 1.0]);
        let histogram = analyze(&series).unwrap();

        assert!((histogram.bins[0].density - 1.5).abs() < 1e-12);
        assert!((histogram.bins[30].density - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_constant_values_are_degenerate() {
        let series = WeightedSeries::unweighted(vec![2.0, 2.0, 2.0]);
        assert!(matches!(analyze(&series), Err(AnalysisError::ZeroRange)));

        let single = WeightedSeries::unweighted(vec![5.0]);
        assert!(matches!(analyze(&single), Err(AnalysisError::ZeroRange)));
    }
}
