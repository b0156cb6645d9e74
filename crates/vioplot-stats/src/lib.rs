//! vioplot-stats - Statistical engine for box plot / violin charts
//!
//! This crate turns a raw array of numeric samples into everything an
//! interactive box plot with a violin overlay needs to draw itself:
//!
//! - **Summary**: nearest-rank quartiles, Tukey fences, and a five number
//!   summary whose whiskers come from the non-outlier subset
//! - **Histogram**: adaptive square-root binning normalized by the tallest
//!   bin, driving the violin's width profile
//! - **Distribution**: the immutable per-field result snapshot and the
//!   `compute` pipeline combining both
//!
//! # Design Philosophy
//!
//! Every function here is pure and total: identical input yields an
//! identical result, and degenerate inputs (empty samples, zero-width
//! ranges, all-outlier partitions) resolve to documented fallbacks instead
//! of errors. Concurrency lives one crate up, in the compute host.

pub mod distribution;
pub mod histogram;
pub mod summary;

pub use distribution::*;
pub use histogram::*;
pub use summary::*;
