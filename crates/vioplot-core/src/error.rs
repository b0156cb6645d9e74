//! Error types for vioplot-core
//!
//! Only host/infrastructure failures are errors. "No data" (empty selection,
//! no numeric values) is an expected state and flows through as an empty
//! [`FieldDistribution`](vioplot_stats::FieldDistribution), never as an error.

use thiserror::Error;

/// Errors surfaced by the compute host
#[derive(Error, Debug)]
pub enum ComputeError {
    /// The background worker could not be started
    #[error("failed to start compute worker: {message}")]
    WorkerSpawn { message: String },

    /// The background worker is gone: the host was torn down or the worker
    /// exited. Reported distinctly so requests are never silently dropped.
    #[error("compute worker unavailable")]
    WorkerUnavailable,
}

/// Result type alias for compute host operations
pub type ComputeResult<T> = Result<T, ComputeError>;
