//! Box plot summary statistics
//!
//! Nearest-rank quartiles, Tukey outlier fences, and the five number
//! summary used to draw the box and whiskers.

use serde::{Deserialize, Serialize};

/// Five number summary statistics
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FiveNumberSummary {
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

impl FiveNumberSummary {
    /// Get the interquartile range
    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }

    /// Get the range
    pub fn range(&self) -> f64 {
        self.max - self.min
    }

    /// Lower fence for outlier detection (Q1 - 1.5 * IQR)
    pub fn lower_fence(&self) -> f64 {
        self.q1 - 1.5 * self.iqr()
    }

    /// Upper fence for outlier detection (Q3 + 1.5 * IQR)
    pub fn upper_fence(&self) -> f64 {
        self.q3 + 1.5 * self.iqr()
    }
}

/// Box plot statistics: the five number summary plus the outlier set.
///
/// The summary's `min`/`max` are whisker ends taken from the non-outlier
/// subset, while `q1`/`median`/`q3` are quartiles of the full sample:
/// whiskers reflect the trimmed range, the box reflects the full population.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxPlotStats {
    pub summary: FiveNumberSummary,
    /// Values strictly outside the fences, in ascending order.
    pub outliers: Vec<f64>,
}

impl BoxPlotStats {
    /// Compute box plot statistics from unsorted values.
    ///
    /// Sorts a copy internally; the input is never mutated. Returns `None`
    /// for an empty input.
    pub fn new(values: &[f64]) -> Option<Self> {
        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);
        Self::from_sorted(&sorted)
    }

    /// Compute box plot statistics from values already sorted ascending.
    pub fn from_sorted(sorted: &[f64]) -> Option<Self> {
        if sorted.is_empty() {
            return None;
        }

        let q1 = nearest_rank(sorted, 0.25);
        let median = nearest_rank(sorted, 0.5);
        let q3 = nearest_rank(sorted, 0.75);

        let iqr = q3 - q1;
        let lower_fence = q1 - 1.5 * iqr;
        let upper_fence = q3 + 1.5 * iqr;

        let (non_outliers, outliers) = partition_outliers(sorted, lower_fence, upper_fence);
        let (min, max) = whisker_range(&non_outliers, sorted);

        Some(Self {
            summary: FiveNumberSummary {
                min,
                q1,
                median,
                q3,
                max,
            },
            outliers,
        })
    }
}

/// Nearest-rank quantile over sorted values: `sorted[floor(n * fraction)]`,
/// clamped to the last index. No interpolation between adjacent ranks.
///
/// Returns `f64::NAN` if the input is empty.
pub fn nearest_rank(sorted: &[f64], fraction: f64) -> f64 {
    if sorted.is_empty() {
        return f64::NAN;
    }
    let idx = (sorted.len() as f64 * fraction).floor() as usize;
    sorted[idx.min(sorted.len() - 1)]
}

/// Split sorted values into `(non_outliers, outliers)` against the fences.
///
/// Comparison is strict: values exactly equal to a fence are not outliers.
/// Both halves keep ascending order and together partition the input
/// exactly.
pub fn partition_outliers(
    sorted: &[f64],
    lower_fence: f64,
    upper_fence: f64,
) -> (Vec<f64>, Vec<f64>) {
    let (outliers, non_outliers): (Vec<f64>, Vec<f64>) = sorted
        .iter()
        .copied()
        .partition(|&v| v < lower_fence || v > upper_fence);
    (non_outliers, outliers)
}

/// Whisker endpoints from the non-outlier subset.
///
/// When the fences exclude every sample the whiskers fall back to the full
/// sorted range, so the summary never carries an undefined value.
fn whisker_range(non_outliers: &[f64], sorted: &[f64]) -> (f64, f64) {
    match (non_outliers.first(), non_outliers.last()) {
        (Some(&lo), Some(&hi)) => (lo, hi),
        _ => (sorted[0], sorted[sorted.len() - 1]),
    }
}
