//! Registry layer abstractions and the in-memory implementation.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts for patient records.
//! - Keep collection bookkeeping out of service/business orchestration.
//!
//! # Invariants
//! - Registry ordering is insertion order, which is also display order.
//! - Registry APIs return semantic errors (`DuplicateId`, `NotFound`)
//!   instead of panicking.

pub mod patient_repo;
