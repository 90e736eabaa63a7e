//! Domain model for the patient registry.
//!
//! # Responsibility
//! - Define the canonical patient and doctor records used by core logic.
//! - Own the fixed staff roster and the synthetic fallback doctor.
//!
//! # Invariants
//! - Every patient is identified by a user-supplied id, unique in the
//!   registry.
//! - Doctors compare by value; no code relies on instance identity.

pub mod doctor;
pub mod patient;
