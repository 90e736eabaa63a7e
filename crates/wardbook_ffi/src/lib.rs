//! Flutter-facing boundary crate for Wardbook.
//!
//! # Responsibility
//! - Expose admission use-cases to the desktop UI via FRB.
//! - Own the process-wide registry instance; core stays sync-free.

pub mod api;
