//! Core domain logic for Wardbook.
//! This crate is the single source of truth for admission invariants.

pub mod assign;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod stats;

pub use assign::{assign_department, assign_doctor, AssignmentRule, ASSIGNMENT_RULES};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::doctor::{
    doctor_for_department, fallback_doctor, staff_doctor_count, staff_doctors, Department, Doctor,
    DoctorId,
};
pub use model::patient::{Patient, PatientId};
pub use repo::patient_repo::{MemoryPatientRepository, PatientRepository, RepoError, RepoResult};
pub use service::admission_service::{AdmissionError, AdmissionForm, AdmissionService};
pub use stats::charts::{
    department_distribution, gender_distribution, registry_summary, DepartmentCount, GenderShare,
    RegistrySummary,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
