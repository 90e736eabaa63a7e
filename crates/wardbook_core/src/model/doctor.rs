//! Doctor roster and department model.
//!
//! # Responsibility
//! - Define the closed department set and the doctor record.
//! - Provide the fixed staff roster and the on-demand fallback doctor.
//!
//! # Invariants
//! - Staff roster ids are unique and stable for the process lifetime.
//! - `fallback_doctor()` returns a value-equal record on every call; the
//!   only sound doctor comparison is by value (id), never by reference.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Stable roster identifier (`D101`..`D105`, or `D000` for the fallback).
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type DoctorId = String;

/// Closed set of departments a patient can be routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Department {
    Cardiology,
    Neurology,
    Orthopedics,
    Dermatology,
    Pediatrics,
    /// Catch-all department served by the fallback doctor.
    GeneralMedicine,
}

impl Department {
    /// Human-readable label used by table rows and chart axes.
    pub fn label(self) -> &'static str {
        match self {
            Self::Cardiology => "Cardiology",
            Self::Neurology => "Neurology",
            Self::Orthopedics => "Orthopedics",
            Self::Dermatology => "Dermatology",
            Self::Pediatrics => "Pediatrics",
            Self::GeneralMedicine => "General Medicine",
        }
    }
}

impl Display for Department {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Staff or fallback doctor record. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Doctor {
    /// Serialized as `doctor_id` to match external schema naming.
    #[serde(rename = "doctor_id")]
    pub id: DoctorId,
    /// Display name, including title.
    pub name: String,
    /// Department this doctor admits for.
    pub department: Department,
}

impl Doctor {
    fn new(id: &str, name: &str, department: Department) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            department,
        }
    }
}

/// Fixed staff roster, in roster-id order. One doctor per staff department.
static STAFF_DOCTORS: Lazy<Vec<Doctor>> = Lazy::new(|| {
    vec![
        Doctor::new("D101", "Dr. Mehta", Department::Cardiology),
        Doctor::new("D102", "Dr. Sharma", Department::Neurology),
        Doctor::new("D103", "Dr. Verma", Department::Orthopedics),
        Doctor::new("D104", "Dr. Patel", Department::Dermatology),
        Doctor::new("D105", "Dr. Gupta", Department::Pediatrics),
    ]
});

/// Returns the fixed staff roster.
pub fn staff_doctors() -> &'static [Doctor] {
    &STAFF_DOCTORS
}

/// Number of staff doctors, shown in the running summary display.
pub fn staff_doctor_count() -> usize {
    STAFF_DOCTORS.len()
}

/// Returns the staff doctor admitting for `department`, if one exists.
///
/// `Department::GeneralMedicine` has no staff doctor; callers fall back to
/// [`fallback_doctor`] for it.
pub fn doctor_for_department(department: Department) -> Option<Doctor> {
    STAFF_DOCTORS
        .iter()
        .find(|doctor| doctor.department == department)
        .cloned()
}

/// Synthesizes the General Medicine fallback doctor.
///
/// A fresh value is built on every call; all of them compare equal, so no
/// caller may rely on singleton identity.
pub fn fallback_doctor() -> Doctor {
    Doctor::new("D000", "Dr. General", Department::GeneralMedicine)
}
