//! Per-field distribution snapshot and the compute pipeline
//!
//! [`compute`] is the single entry point the compute host calls: it combines
//! the box plot summary and the violin histogram into one immutable
//! [`FieldDistribution`] the chart layer can render directly.

use serde::{Deserialize, Serialize};

use crate::histogram::{violin_bins, ViolinBin};
use crate::summary::BoxPlotStats;

/// Everything the chart layer needs to draw one field.
///
/// A later computation produces a wholly new value; snapshots are never
/// mutated after creation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldDistribution {
    /// Extracted samples in dataset order (rendered as jittered points).
    pub samples: Vec<f64>,
    /// Box statistics, `None` when there is no data to summarize.
    pub stats: Option<BoxPlotStats>,
    /// Violin bins spanning the full sample range.
    pub bins: Vec<ViolinBin>,
}

impl FieldDistribution {
    /// The "no data" result: empty selection or no numeric values. This is
    /// an expected steady state, not an error.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether this is the "no data" result.
    pub fn is_empty(&self) -> bool {
        self.stats.is_none()
    }
}

/// Compute the full distribution for one field's samples.
///
/// Deterministic and total: identical input yields an identical result, and
/// an empty input yields [`FieldDistribution::empty`] rather than an error.
/// The input slice is never mutated. Callers guarantee the samples are
/// finite numbers (see `Dataset::numeric_samples` in vioplot-core).
pub fn compute(samples: &[f64]) -> FieldDistribution {
    if samples.is_empty() {
        return FieldDistribution::empty();
    }

    let mut sorted = samples.to_vec();
    sorted.sort_by(f64::total_cmp);

    FieldDistribution {
        samples: samples.to_vec(),
        stats: BoxPlotStats::from_sorted(&sorted),
        bins: violin_bins(samples),
    }
}
