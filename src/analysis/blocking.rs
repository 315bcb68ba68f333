//! Blocking analysis of the standard error.
//!
//! Groups the raw series into blocks of growing size and reports the
//! standard error of the block means at each size. For correlated data the
//! estimate climbs with block size until blocks are long enough to be
//! effectively independent, where it plateaus at the true error. Weights
//! are ignored throughout.

use serde::{Deserialize, Serialize};

use crate::constants::{BLOCK_SIZE_SAMPLES, MIN_BLOCKS};

/// Standard error of the mean at one block size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BlockPoint {
    /// Block size in samples.
    pub size: usize,

    /// Standard error of the block means, never negative.
    pub error: f64,
}

/// Block-error curve over the tried block sizes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlockingAnalysis {
    /// One point per tried block size, in increasing size order.
    pub points: Vec<BlockPoint>,

    /// Sizes skipped because fewer than two complete blocks fit.
    pub skipped_sizes: Vec<usize>,
}

/// Compute the block-error curve of a value series.
///
/// Block sizes step from 1 towards `n / MIN_BLOCKS` in
/// `BLOCK_SIZE_SAMPLES` strides; size 1 is always tried, so even a series
/// barely longer than `MIN_BLOCKS` yields a row. At each size the first
/// `floor(n / size)` complete blocks are kept (remainder discarded) and
/// the standard error of their means is
/// `sqrt((⟨m²⟩ - ⟨m⟩²) / (nblk - 1))`, with the variance clamped at zero
/// against floating-point cancellation. A size that leaves fewer than two
/// blocks is recorded in `skipped_sizes` and produces no point.
pub fn analyze(values: &[f64]) -> BlockingAnalysis {
    let n = values.len();
    let largest = n / MIN_BLOCKS;
    let step = (largest / BLOCK_SIZE_SAMPLES).max(1);
    let upper = largest.max(2);

    let mut points = Vec::new();
    let mut skipped_sizes = Vec::new();

    let mut size = 1;
    while size < upper {
        let nblk = n / size;
        if nblk < 2 {
            skipped_sizes.push(size);
            size += step;
            continue;
        }

        let mut mean = 0.0;
        let mut mean_sq = 0.0;
        for block in values.chunks_exact(size) {
            let block_mean = block.iter().sum::<f64>() / size as f64;
            mean += block_mean;
            mean_sq += block_mean * block_mean;
        }
        mean /= nblk as f64;
        mean_sq /= nblk as f64;

        let error = ((mean_sq - mean * mean).max(0.0) / (nblk - 1) as f64).sqrt();
        points.push(BlockPoint { size, error });

        size += step;
    }

    BlockingAnalysis {
        points,
        skipped_sizes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_size_error_is_plain_standard_error() {
        // n = 10 keeps only block size 1: nblk = 10, block means are the
        // values themselves, error = sqrt((<v²> - <v>²) / 9) = 1/3.
        let values: Vec<f64> = (0..10).map(|i| if i % 2 == 0 { 0.0 } else { 2.0 }).collect();
        let analysis = analyze(&values);

        assert_eq!(analysis.points.len(), 1);
        assert_eq!(analysis.points[0].size, 1);
        assert!((analysis.points[0].error - 1.0 / 3.0).abs() < 1e-12);
        assert!(analysis.skipped_sizes.is_empty());
    }

    #[test]
    fn test_minimum_length_series_produces_a_row() {
        let values = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let analysis = analyze(&values);
        assert!(!analysis.points.is_empty());
        assert_eq!(analysis.points[0].size, 1);
    }

    #[test]
    fn test_tried_sizes_step_below_largest() {
        let values: Vec<f64> = (0..100).map(|i| i as f64).collect();
        let analysis = analyze(&values);

        // largest = 20, step = 1, sizes 1..20.
        let sizes: Vec<usize> = analysis.points.iter().map(|p| p.size).collect();
        assert_eq!(sizes, (1..20).collect::<Vec<_>>());
    }

    #[test]
    fn test_errors_are_non_negative() {
        let values: Vec<f64> = (0..500)
            .map(|i| ((i * 2654435761_usize) % 1000) as f64 / 1000.0)
            .collect();
        let analysis = analyze(&values);
        assert!(!analysis.points.is_empty());
        for point in &analysis.points {
            assert!(point.error >= 0.0, "size {} gave {}", point.size, point.error);
        }
    }

    #[test]
    fn test_remainder_samples_are_discarded() {
        // 24 zeros and one huge tail value. At size 2 the tail is in the
        // discarded remainder, so all block means are zero.
        let mut values = vec![0.0; 24];
        values.push(1e6);
        let analysis = analyze(&values);

        let at_two = analysis.points.iter().find(|p| p.size == 2).unwrap();
        assert_eq!(at_two.error, 0.0);
        let at_one = analysis.points.iter().find(|p| p.size == 1).unwrap();
        assert!(at_one.error > 0.0);
    }

    #[test]
    fn test_correlated_series_error_grows_with_block_size() {
        use rand::SeedableRng;
        use rand_distr::{Distribution, StandardNormal};
        use rand_xoshiro::Xoshiro256StarStar;

        // AR(1) noise: single-sample errors understate the true
        // uncertainty, blocks longer than the correlation time recover it.
        let phi = 0.9f64;
        let scale = (1.0 - phi * phi).sqrt();
        let mut rng = Xoshiro256StarStar::seed_from_u64(7);
        let mut previous = 0.0;
        let values: Vec<f64> = (0..4000)
            .map(|_| {
                let noise: f64 = StandardNormal.sample(&mut rng);
                previous = phi * previous + scale * noise;
                previous
            })
            .collect();

        let analysis = analyze(&values);
        let single = analysis.points.iter().find(|p| p.size == 1).unwrap().error;
        let blocked = analysis
            .points
            .iter()
            .find(|p| p.size >= 33)
            .unwrap()
            .error;
        assert!(blocked > 2.0 * single, "blocked {} single {}", blocked, single);
    }

    #[test]
    fn test_single_sample_series_is_skipped() {
        let analysis = analyze(&[1.0]);
        assert!(analysis.points.is_empty());
        assert_eq!(analysis.skipped_sizes, vec![1]);
    }

    #[test]
    fn test_two_sample_series_has_one_row() {
        let analysis = analyze(&[1.0, 3.0]);
        assert_eq!(analysis.points.len(), 1);
        let point = analysis.points[0];
        assert_eq!(point.size, 1);
        // Block means 1 and 3: sqrt((5 - 4) / 1) = 1.
        assert!((point.error - 1.0).abs() < 1e-12);
    }
}
