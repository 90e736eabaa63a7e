//! Read-side aggregates computed from registry snapshots.
//!
//! # Responsibility
//! - Provide chart-ready datasets and the running summary.
//!
//! # Invariants
//! - Aggregates are recomputed on demand; nothing is cached.
//! - Output ordering is deterministic.

pub mod charts;
