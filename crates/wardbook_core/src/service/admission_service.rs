//! Admission use-case service.
//!
//! # Responsibility
//! - Validate raw form input into patient records.
//! - Run doctor assignment on every admit and update.
//! - Delegate registry mutations to repository implementations.
//!
//! # Invariants
//! - Every stored patient carries the doctor the assignment table resolves
//!   for its current disease text.
//! - Validation failures never reach the repository.
//! - Log events carry ids and departments only, never names or disease text.

use crate::assign::assign_doctor;
use crate::model::patient::Patient;
use crate::repo::patient_repo::{PatientRepository, RepoError, RepoResult};
use crate::stats::charts::{registry_summary, RegistrySummary};
use log::info;
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));

/// The five raw text fields exactly as the form collects them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdmissionForm {
    pub patient_id: String,
    pub name: String,
    pub age: String,
    pub gender: String,
    pub disease: String,
}

/// Service error for admission use-cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdmissionError {
    /// A required form field is empty after trimming.
    MissingField(&'static str),
    /// Age text does not parse as a whole number.
    InvalidAge(String),
    /// Registry-level failure.
    Repo(RepoError),
}

impl Display for AdmissionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField(field) => write!(f, "missing required field: {field}"),
            Self::InvalidAge(raw) => write!(f, "age must be a whole number, got `{raw}`"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for AdmissionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for AdmissionError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Admission service facade over repository implementations.
pub struct AdmissionService<R: PatientRepository> {
    repo: R,
}

impl<R: PatientRepository> AdmissionService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Validates the form and admits a new patient.
    ///
    /// # Contract
    /// - All five fields must be non-empty after trimming.
    /// - Age must parse as a whole number.
    /// - The admitting doctor is resolved from the disease text.
    /// - Fails with `DuplicateId` when the patient id is taken.
    pub fn admit(&mut self, form: &AdmissionForm) -> Result<Patient, AdmissionError> {
        let record = build_patient(form)?;
        self.repo.add_patient(record.clone())?;
        info!(
            "event=patient_admitted module=service status=ok patient_id={} department={:?}",
            record.id, record.doctor.department
        );
        Ok(record)
    }

    /// Validates the form and replaces the record keyed by its patient id.
    ///
    /// The doctor is re-resolved from the submitted disease text on every
    /// update, not only when the disease field changed.
    pub fn update(&mut self, form: &AdmissionForm) -> Result<Patient, AdmissionError> {
        let record = build_patient(form)?;
        self.repo.update_patient(record.clone())?;
        info!(
            "event=patient_updated module=service status=ok patient_id={} department={:?}",
            record.id, record.doctor.department
        );
        Ok(record)
    }

    /// Removes one patient by id; returns the removed record.
    pub fn discharge(&mut self, id: &str) -> RepoResult<Patient> {
        let removed = self.repo.remove_patient(id)?;
        info!(
            "event=patient_discharged module=service status=ok patient_id={}",
            removed.id
        );
        Ok(removed)
    }

    /// Gets one patient by id.
    pub fn patient(&self, id: &str) -> Option<Patient> {
        self.repo.get_patient(id)
    }

    /// Snapshot of all patients in admission order.
    pub fn patients(&self) -> Vec<Patient> {
        self.repo.list_patients()
    }

    /// Current registry size.
    pub fn patient_count(&self) -> usize {
        self.repo.patient_count()
    }

    /// Running summary for the header display.
    pub fn summary(&self) -> RegistrySummary {
        registry_summary(self.repo.patient_count())
    }

    /// Admits the three startup sample patients.
    ///
    /// Intended for fresh registries; an already-taken sample id surfaces as
    /// a `DuplicateId` error.
    pub fn seed_sample_patients(&mut self) -> Result<(), AdmissionError> {
        let samples = [
            ("P001", "John Doe", "35", "Male", "Heart disease"),
            ("P002", "Jane Smith", "28", "Female", "Skin rash"),
            ("P003", "Mike Johnson", "45", "Male", "Bone fracture"),
        ];
        for (patient_id, name, age, gender, disease) in samples {
            self.admit(&AdmissionForm {
                patient_id: patient_id.to_string(),
                name: name.to_string(),
                age: age.to_string(),
                gender: gender.to_string(),
                disease: disease.to_string(),
            })?;
        }
        Ok(())
    }
}

fn build_patient(form: &AdmissionForm) -> Result<Patient, AdmissionError> {
    let patient_id = require_field("patient_id", &form.patient_id)?;
    let name = require_field("name", &form.name)?;
    let age_text = require_field("age", &form.age)?;
    let gender = require_field("gender", &form.gender)?;
    let disease = require_field("disease", &form.disease)?;

    let age = age_text
        .parse::<u32>()
        .map_err(|_| AdmissionError::InvalidAge(age_text.clone()))?;

    let doctor = assign_doctor(&disease);
    Ok(Patient::new(patient_id, name, age, gender, disease, doctor))
}

/// Trims and collapses whitespace runs; empty results are a `MissingField`.
fn require_field(field: &'static str, raw: &str) -> Result<String, AdmissionError> {
    let collapsed = WHITESPACE_RE.replace_all(raw.trim(), " ");
    if collapsed.is_empty() {
        return Err(AdmissionError::MissingField(field));
    }
    Ok(collapsed.into_owned())
}

#[cfg(test)]
mod tests {
    use super::{require_field, AdmissionError};

    #[test]
    fn require_field_collapses_inner_whitespace() {
        let value = require_field("name", "  John   \t Doe ").expect("field should be accepted");
        assert_eq!(value, "John Doe");
    }

    #[test]
    fn require_field_rejects_blank_input() {
        let err = require_field("gender", " \t ").expect_err("blank input must be rejected");
        assert_eq!(err, AdmissionError::MissingField("gender"));
    }
}
