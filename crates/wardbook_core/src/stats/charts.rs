//! Chart datasets over registry snapshots.
//!
//! # Responsibility
//! - Compute patients-per-department and gender-share datasets.
//! - Provide the running summary shown in the window header.
//!
//! # Invariants
//! - Labels are sorted alphabetically for deterministic rendering.
//! - Only departments/genders with at least one patient appear.
//! - Gender shares sum to 100 for any non-empty snapshot.

use crate::model::doctor::{staff_doctor_count, Department};
use crate::model::patient::Patient;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

/// One bar of the patients-per-department chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DepartmentCount {
    pub department: Department,
    pub count: usize,
}

/// One slice of the gender distribution chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenderShare {
    /// Gender exactly as stored on the records.
    pub gender: String,
    pub count: usize,
    /// Percentage share of the snapshot, in `0.0..=100.0`.
    pub share: f64,
}

/// Running summary for the header display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RegistrySummary {
    pub patient_count: usize,
    pub doctor_count: usize,
}

impl Display for RegistrySummary {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Patients: {} | Doctors: {}",
            self.patient_count, self.doctor_count
        )
    }
}

/// Builds the running summary for the current registry size.
pub fn registry_summary(patient_count: usize) -> RegistrySummary {
    RegistrySummary {
        patient_count,
        doctor_count: staff_doctor_count(),
    }
}

/// Counts patients per assigned department, sorted by department label.
pub fn department_distribution(patients: &[Patient]) -> Vec<DepartmentCount> {
    let mut counts: BTreeMap<&'static str, DepartmentCount> = BTreeMap::new();
    for patient in patients {
        let department = patient.doctor.department;
        counts
            .entry(department.label())
            .or_insert(DepartmentCount {
                department,
                count: 0,
            })
            .count += 1;
    }
    counts.into_values().collect()
}

/// Counts patients per distinct gender string, sorted by label, with each
/// entry's percentage share of the snapshot.
pub fn gender_distribution(patients: &[Patient]) -> Vec<GenderShare> {
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for patient in patients {
        *counts.entry(patient.gender.clone()).or_insert(0) += 1;
    }

    let total = patients.len();
    counts
        .into_iter()
        .map(|(gender, count)| GenderShare {
            gender,
            count,
            share: count as f64 * 100.0 / total as f64,
        })
        .collect()
}
