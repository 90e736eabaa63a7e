//! Patient domain record.
//!
//! # Responsibility
//! - Define the canonical patient shape stored by the registry.
//!
//! # Invariants
//! - `id` is the unique registry key; uniqueness is enforced at insertion.
//! - `doctor` always holds the value the assignment table resolves for the
//!   current `disease` text.

use crate::model::doctor::Doctor;
use serde::{Deserialize, Serialize};

/// User-supplied unique registry key (e.g. `P001`).
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type PatientId = String;

/// Canonical patient record.
///
/// The assigned doctor is stored as an owned value copy; doctor comparisons
/// are by value, never by instance identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    /// Serialized as `patient_id` to match external schema naming.
    #[serde(rename = "patient_id")]
    pub id: PatientId,
    /// Full display name.
    pub name: String,
    /// Age in whole years, parsed from form text at admission time.
    pub age: u32,
    /// Gender exactly as typed into the form.
    pub gender: String,
    /// Free-text disease description driving doctor assignment.
    pub disease: String,
    /// Doctor resolved for the current disease text.
    pub doctor: Doctor,
}

impl Patient {
    /// Creates a patient record from already-validated fields.
    ///
    /// Callers are expected to resolve `doctor` through the assignment table
    /// before constructing the record.
    pub fn new(
        id: impl Into<PatientId>,
        name: impl Into<String>,
        age: u32,
        gender: impl Into<String>,
        disease: impl Into<String>,
        doctor: Doctor,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            age,
            gender: gender.into(),
            disease: disease.into(),
            doctor,
        }
    }
}
