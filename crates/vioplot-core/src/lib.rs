//! vioplot-core - Dataset model and background compute host
//!
//! This crate provides everything around the statistics engine in
//! `vioplot-stats`:
//!
//! - **Dataset**: records, field descriptors, and numeric sample extraction
//! - **ComputeHost**: a per-chart worker thread that turns `(dataset, field)`
//!   requests into [`FieldDistribution`](vioplot_stats::FieldDistribution)
//!   updates without ever blocking the interactive side
//! - **Errors**: host/infrastructure failures; the engine itself is total
//!
//! # Concurrency Model
//!
//! One interactive thread plus one background worker per chart, communicating
//! only via channels. The worker coalesces bursts of requests down to the
//! newest one, updates carry sequence numbers, and stale deliveries are
//! discarded on the consumer side.

pub mod dataset;
pub mod error;
pub mod host;

pub use dataset::*;
pub use error::*;
pub use host::*;
