//! Patient registry contracts and in-memory implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over the ordered patient collection.
//! - Enforce id uniqueness at insertion time.
//!
//! # Invariants
//! - Ids are unique; uniqueness is checked by linear scan on add.
//! - Failed operations leave the registry unchanged.
//! - Iteration order is insertion order.

use crate::model::patient::{Patient, PatientId};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Registry error for patient CRUD operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    /// Add collision: the id is already present.
    DuplicateId(PatientId),
    /// Update/remove target does not exist.
    NotFound(PatientId),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateId(id) => write!(f, "patient id already exists: {id}"),
            Self::NotFound(id) => write!(f, "patient not found: {id}"),
        }
    }
}

impl Error for RepoError {}

/// Repository interface for patient CRUD operations.
pub trait PatientRepository {
    /// Appends one patient. Fails with `DuplicateId` when the id is taken.
    fn add_patient(&mut self, patient: Patient) -> RepoResult<()>;
    /// Returns the patient with the given id, if present.
    fn get_patient(&self, id: &str) -> Option<Patient>;
    /// Replaces the record with the same id in place, keeping its position.
    fn update_patient(&mut self, patient: Patient) -> RepoResult<()>;
    /// Removes at most one record; returns it, or `NotFound`.
    fn remove_patient(&mut self, id: &str) -> RepoResult<Patient>;
    /// Snapshot of all records in insertion order.
    fn list_patients(&self) -> Vec<Patient>;
    /// Current registry size.
    fn patient_count(&self) -> usize;
}

/// In-memory, insertion-ordered patient registry.
///
/// The application owns exactly one instance and mutates it from a single
/// control flow, so no interior synchronization is used here.
#[derive(Debug, Default)]
pub struct MemoryPatientRepository {
    patients: Vec<Patient>,
}

impl MemoryPatientRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PatientRepository for MemoryPatientRepository {
    fn add_patient(&mut self, patient: Patient) -> RepoResult<()> {
        if self.patients.iter().any(|existing| existing.id == patient.id) {
            return Err(RepoError::DuplicateId(patient.id));
        }
        self.patients.push(patient);
        Ok(())
    }

    fn get_patient(&self, id: &str) -> Option<Patient> {
        self.patients
            .iter()
            .find(|patient| patient.id == id)
            .cloned()
    }

    fn update_patient(&mut self, patient: Patient) -> RepoResult<()> {
        match self
            .patients
            .iter_mut()
            .find(|existing| existing.id == patient.id)
        {
            Some(slot) => {
                *slot = patient;
                Ok(())
            }
            None => Err(RepoError::NotFound(patient.id)),
        }
    }

    fn remove_patient(&mut self, id: &str) -> RepoResult<Patient> {
        match self.patients.iter().position(|patient| patient.id == id) {
            Some(index) => Ok(self.patients.remove(index)),
            None => Err(RepoError::NotFound(id.to_string())),
        }
    }

    fn list_patients(&self) -> Vec<Patient> {
        self.patients.clone()
    }

    fn patient_count(&self) -> usize {
        self.patients.len()
    }
}
