//! Violin histogram binning
//!
//! Adaptive square-root binning over the full sample range, normalized by
//! the tallest bin. The normalized counts drive the violin's half-width
//! profile, so the peak bin is always exactly 1.0 and the counts do not sum
//! to unit mass (this is a shape, not a probability density).

use serde::{Deserialize, Serialize};

/// Largest number of bins regardless of sample count.
pub const MAX_BINS: usize = 50;

/// A single violin bin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViolinBin {
    /// Midpoint of the bin's value range.
    pub center: f64,
    /// Bin count scaled by the tallest bin, in `[0, 1]`.
    pub normalized_count: f64,
}

/// Number of bins for `n` samples: `floor(sqrt(n))`, capped at [`MAX_BINS`],
/// at least 1.
pub fn bin_count(n: usize) -> usize {
    ((n as f64).sqrt().floor() as usize).clamp(1, MAX_BINS)
}

/// Build the violin histogram for a sample set.
///
/// Bins span the full sample range, outliers included; the top edge is
/// clamped into the last bin so `v == max` is always counted. An empty input
/// yields an empty histogram, and an all-identical input collapses to a
/// single bin holding the full count.
pub fn violin_bins(samples: &[f64]) -> Vec<ViolinBin> {
    if samples.is_empty() {
        return Vec::new();
    }

    let min = samples.iter().copied().fold(f64::INFINITY, f64::min);
    let max = samples.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let bins = bin_count(samples.len());
    let bin_width = (max - min) / bins as f64;

    if bin_width == 0.0 {
        // Degenerate range: every sample shares one value.
        return vec![ViolinBin {
            center: min,
            normalized_count: 1.0,
        }];
    }

    let counts = raw_counts(samples, min, bin_width, bins);
    let tallest = counts.iter().copied().max().unwrap_or(1) as f64;

    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| ViolinBin {
            center: min + (i as f64 + 0.5) * bin_width,
            normalized_count: count as f64 / tallest,
        })
        .collect()
}

/// Raw per-bin counts; every sample lands in exactly one bin.
fn raw_counts(samples: &[f64], min: f64, bin_width: f64, bins: usize) -> Vec<u64> {
    let mut counts = vec![0_u64; bins];
    for &v in samples {
        let idx = (((v - min) / bin_width).floor() as usize).min(bins - 1);
        counts[idx] += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bin_count_square_root_rule() {
        assert_eq!(bin_count(1), 1);
        assert_eq!(bin_count(3), 1);
        assert_eq!(bin_count(4), 2);
        assert_eq!(bin_count(10), 3);
        assert_eq!(bin_count(100), 10);
        assert_eq!(bin_count(2500), 50);
        assert_eq!(bin_count(1_000_000), 50);
    }

    #[test]
    fn test_raw_counts_cover_every_sample() {
        let samples: Vec<f64> = (0..97).map(|i| (i * 7 % 31) as f64).collect();
        let min = samples.iter().copied().fold(f64::INFINITY, f64::min);
        let max = samples.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let bins = bin_count(samples.len());
        let counts = raw_counts(&samples, min, (max - min) / bins as f64, bins);

        assert_eq!(counts.len(), bins);
        assert_eq!(counts.iter().sum::<u64>() as usize, samples.len());
    }

    #[test]
    fn test_max_value_lands_in_last_bin() {
        // (max - min) / width == bins exactly; the clamp keeps it in range
        let samples = vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0];
        let bins = violin_bins(&samples);

        assert_eq!(bins.len(), 3);
        assert!(bins.last().unwrap().normalized_count > 0.0);
    }

    #[test]
    fn test_tallest_bin_is_exactly_one() {
        let samples = vec![1.0, 1.1, 1.2, 1.3, 5.0, 9.0, 9.1, 9.2, 9.3, 9.4];
        let bins = violin_bins(&samples);

        let peak = bins
            .iter()
            .map(|b| b.normalized_count)
            .fold(f64::NEG_INFINITY, f64::max);
        assert_eq!(peak, 1.0);
        assert!(bins
            .iter()
            .all(|b| (0.0..=1.0).contains(&b.normalized_count)));
    }

    #[test]
    fn test_bin_centers() {
        // 1..=10 gives 3 bins of width 3 starting at 1
        let samples: Vec<f64> = (1..=10).map(f64::from).collect();
        let bins = violin_bins(&samples);

        let centers: Vec<f64> = bins.iter().map(|b| b.center).collect();
        assert_eq!(centers, vec![2.5, 5.5, 8.5]);
    }

    #[test]
    fn test_identical_samples_collapse_to_one_bin() {
        let samples = vec![5.0; 5];
        let bins = violin_bins(&samples);

        assert_eq!(bins.len(), 1);
        assert_eq!(bins[0].center, 5.0);
        assert_eq!(bins[0].normalized_count, 1.0);
    }

    #[test]
    fn test_empty_samples_yield_empty_histogram() {
        assert!(violin_bins(&[]).is_empty());
    }
}
