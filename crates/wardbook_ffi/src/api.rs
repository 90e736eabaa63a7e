//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose stable, use-case-level functions to Dart via FRB.
//! - Keep error semantics simple: every error becomes an `ok=false`
//!   envelope with a human-readable message.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - The process-wide registry lives behind `OnceLock<Mutex<..>>` here;
//!   `wardbook_core` itself carries no synchronization.

use log::warn;
use std::sync::{Mutex, OnceLock};
use wardbook_core::{
    core_version as core_version_inner, department_distribution, gender_distribution,
    init_logging as init_logging_inner, AdmissionForm, AdmissionService, MemoryPatientRepository,
    Patient,
};

static REGISTRY: OnceLock<Mutex<AdmissionService<MemoryPatientRepository>>> = OnceLock::new();

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Sync call; may perform small file-system setup work.
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on
///   failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// One row of the ward table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatientRow {
    pub patient_id: String,
    pub name: String,
    pub age: u32,
    pub gender: String,
    pub disease: String,
    pub doctor_name: String,
    pub department: String,
}

/// Generic action response envelope for form-button flows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionResponse {
    /// Whether the operation succeeded.
    pub ok: bool,
    /// Human-readable message for the blocking notice the UI shows.
    pub message: String,
}

impl ActionResponse {
    fn success(message: impl Into<String>) -> Self {
        Self {
            ok: true,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: message.into(),
        }
    }
}

/// Lookup response for a single patient.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatientResponse {
    pub item: Option<PatientRow>,
    pub message: String,
}

/// List response for the ward table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatientListResponse {
    /// Rows in admission order.
    pub items: Vec<PatientRow>,
    pub message: String,
}

/// One bar of the patients-per-department chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepartmentBar {
    pub label: String,
    pub count: u64,
}

/// Department chart dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepartmentChartResponse {
    /// Bars sorted by label.
    pub bars: Vec<DepartmentBar>,
    pub message: String,
}

/// One slice of the gender distribution chart.
#[derive(Debug, Clone, PartialEq)]
pub struct GenderSlice {
    pub label: String,
    pub count: u64,
    pub share_percent: f64,
}

/// Gender chart dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct GenderChartResponse {
    /// Slices sorted by label.
    pub slices: Vec<GenderSlice>,
    pub message: String,
}

/// Running summary for the header display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryResponse {
    pub patient_count: u64,
    pub doctor_count: u64,
    /// Preformatted header line, e.g. `Patients: 3 | Doctors: 5`.
    pub headline: String,
}

/// Registers a new patient from the five form fields.
///
/// # FFI contract
/// - Sync call over the in-process registry.
/// - Never panics.
/// - On success the message names the admitting department.
#[flutter_rust_bridge::frb(sync)]
pub fn register_patient(
    patient_id: String,
    name: String,
    age: String,
    gender: String,
    disease: String,
) -> ActionResponse {
    let form = AdmissionForm {
        patient_id,
        name,
        age,
        gender,
        disease,
    };
    match with_service(|service| service.admit(&form)) {
        Ok(Ok(patient)) => {
            ActionResponse::success(format!("Patient added to {}.", patient.doctor.department))
        }
        Ok(Err(err)) => ActionResponse::failure(format!("register_patient failed: {err}")),
        Err(message) => ActionResponse::failure(message),
    }
}

/// Updates the patient keyed by `patient_id` from the five form fields.
///
/// The admitting doctor is re-resolved from the submitted disease text.
///
/// # FFI contract
/// - Sync call over the in-process registry.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn update_patient(
    patient_id: String,
    name: String,
    age: String,
    gender: String,
    disease: String,
) -> ActionResponse {
    let form = AdmissionForm {
        patient_id,
        name,
        age,
        gender,
        disease,
    };
    match with_service(|service| service.update(&form)) {
        Ok(Ok(_)) => ActionResponse::success("Patient record updated."),
        Ok(Err(err)) => ActionResponse::failure(format!("update_patient failed: {err}")),
        Err(message) => ActionResponse::failure(message),
    }
}

/// Removes the patient keyed by `patient_id`.
///
/// # FFI contract
/// - Sync call over the in-process registry.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn remove_patient(patient_id: String) -> ActionResponse {
    match with_service(|service| service.discharge(&patient_id)) {
        Ok(Ok(_)) => ActionResponse::success("Patient deleted."),
        Ok(Err(err)) => ActionResponse::failure(format!("remove_patient failed: {err}")),
        Err(message) => ActionResponse::failure(message),
    }
}

/// Gets one patient for row-selection form filling.
///
/// # FFI contract
/// - Sync call over the in-process registry.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn get_patient(patient_id: String) -> PatientResponse {
    match with_service(|service| service.patient(&patient_id)) {
        Ok(Some(patient)) => PatientResponse {
            item: Some(to_patient_row(&patient)),
            message: String::new(),
        },
        Ok(None) => PatientResponse {
            item: None,
            message: format!("patient not found: {patient_id}"),
        },
        Err(message) => PatientResponse {
            item: None,
            message,
        },
    }
}

/// Lists all patients in admission order for the ward table.
///
/// # FFI contract
/// - Sync call over the in-process registry.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn list_patients() -> PatientListResponse {
    match with_service(|service| service.patients()) {
        Ok(patients) => {
            let items: Vec<_> = patients.iter().map(to_patient_row).collect();
            let message = format!("{} patient(s).", items.len());
            PatientListResponse { items, message }
        }
        Err(message) => PatientListResponse {
            items: Vec::new(),
            message,
        },
    }
}

/// Patients-per-department chart dataset.
///
/// # FFI contract
/// - Sync call; recomputed from the current registry snapshot.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn department_chart() -> DepartmentChartResponse {
    match with_service(|service| service.patients()) {
        Ok(patients) => {
            if patients.is_empty() {
                return DepartmentChartResponse {
                    bars: Vec::new(),
                    message: "No patients to visualize.".to_string(),
                };
            }
            let bars = department_distribution(&patients)
                .into_iter()
                .map(|bar| DepartmentBar {
                    label: bar.department.label().to_string(),
                    count: bar.count as u64,
                })
                .collect();
            DepartmentChartResponse {
                bars,
                message: String::new(),
            }
        }
        Err(message) => DepartmentChartResponse {
            bars: Vec::new(),
            message,
        },
    }
}

/// Gender distribution chart dataset.
///
/// # FFI contract
/// - Sync call; recomputed from the current registry snapshot.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn gender_chart() -> GenderChartResponse {
    match with_service(|service| service.patients()) {
        Ok(patients) => {
            if patients.is_empty() {
                return GenderChartResponse {
                    slices: Vec::new(),
                    message: "No patients to visualize.".to_string(),
                };
            }
            let slices = gender_distribution(&patients)
                .into_iter()
                .map(|slice| GenderSlice {
                    label: slice.gender,
                    count: slice.count as u64,
                    share_percent: slice.share,
                })
                .collect();
            GenderChartResponse {
                slices,
                message: String::new(),
            }
        }
        Err(message) => GenderChartResponse {
            slices: Vec::new(),
            message,
        },
    }
}

/// Running summary for the header display.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn registry_summary() -> SummaryResponse {
    match with_service(|service| service.summary()) {
        Ok(summary) => SummaryResponse {
            patient_count: summary.patient_count as u64,
            doctor_count: summary.doctor_count as u64,
            headline: summary.to_string(),
        },
        Err(message) => SummaryResponse {
            patient_count: 0,
            doctor_count: 0,
            headline: message,
        },
    }
}

/// Admits the three startup sample patients.
///
/// # FFI contract
/// - Sync call; intended for a fresh registry.
/// - Never panics; collisions with existing ids are reported as failure.
#[flutter_rust_bridge::frb(sync)]
pub fn load_sample_patients() -> ActionResponse {
    match with_service(|service| service.seed_sample_patients()) {
        Ok(Ok(())) => ActionResponse::success("Sample patients loaded."),
        Ok(Err(err)) => ActionResponse::failure(format!("load_sample_patients failed: {err}")),
        Err(message) => ActionResponse::failure(message),
    }
}

fn with_service<T>(
    f: impl FnOnce(&mut AdmissionService<MemoryPatientRepository>) -> T,
) -> Result<T, String> {
    let registry = REGISTRY
        .get_or_init(|| Mutex::new(AdmissionService::new(MemoryPatientRepository::new())));
    match registry.lock() {
        Ok(mut service) => Ok(f(&mut service)),
        Err(_) => {
            warn!("event=registry_lock module=ffi status=error error_code=poisoned");
            Err("patient registry is unavailable".to_string())
        }
    }
}

fn to_patient_row(patient: &Patient) -> PatientRow {
    PatientRow {
        patient_id: patient.id.clone(),
        name: patient.name.clone(),
        age: patient.age,
        gender: patient.gender.clone(),
        disease: patient.disease.clone(),
        doctor_name: patient.doctor.name.clone(),
        department: patient.doctor.department.label().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::{
        core_version, department_chart, get_patient, init_logging, list_patients, register_patient,
        registry_summary, remove_patient, update_patient,
    };
    use std::time::{SystemTime, UNIX_EPOCH};

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_empty_log_dir() {
        let error = init_logging("info".to_string(), String::new());
        assert!(!error.is_empty());
    }

    #[test]
    fn init_logging_rejects_relative_log_dir() {
        let error = init_logging("info".to_string(), "tmp/logs".to_string());
        assert!(!error.is_empty());
    }

    #[test]
    fn register_then_get_roundtrip() {
        let id = unique_token("reg");
        let response = register_patient(
            id.clone(),
            "John Doe".to_string(),
            "35".to_string(),
            "Male".to_string(),
            "Heart disease".to_string(),
        );
        assert!(response.ok, "{}", response.message);
        assert_eq!(response.message, "Patient added to Cardiology.");

        let lookup = get_patient(id.clone());
        let row = lookup.item.expect("registered patient should be found");
        assert_eq!(row.patient_id, id);
        assert_eq!(row.doctor_name, "Dr. Mehta");
        assert_eq!(row.department, "Cardiology");

        let listed = list_patients();
        assert!(listed.items.iter().any(|item| item.patient_id == id));
    }

    #[test]
    fn duplicate_registration_is_reported() {
        let id = unique_token("dup");
        let first = register_patient(
            id.clone(),
            "Jane Smith".to_string(),
            "28".to_string(),
            "Female".to_string(),
            "Skin rash".to_string(),
        );
        assert!(first.ok, "{}", first.message);

        let second = register_patient(
            id.clone(),
            "Jane Smith".to_string(),
            "28".to_string(),
            "Female".to_string(),
            "Skin rash".to_string(),
        );
        assert!(!second.ok);
        assert!(second.message.contains("already exists"));
    }

    #[test]
    fn blank_field_is_reported_without_panicking() {
        let response = register_patient(
            unique_token("blank"),
            "John Doe".to_string(),
            "35".to_string(),
            "Male".to_string(),
            "  ".to_string(),
        );
        assert!(!response.ok);
        assert!(response.message.contains("disease"));
    }

    #[test]
    fn update_moves_patient_between_departments() {
        let id = unique_token("upd");
        let created = register_patient(
            id.clone(),
            "John Doe".to_string(),
            "35".to_string(),
            "Male".to_string(),
            "Heart disease".to_string(),
        );
        assert!(created.ok, "{}", created.message);

        let updated = update_patient(
            id.clone(),
            "John Doe".to_string(),
            "35".to_string(),
            "Male".to_string(),
            "Skin rash".to_string(),
        );
        assert!(updated.ok, "{}", updated.message);
        assert_eq!(updated.message, "Patient record updated.");

        let row = get_patient(id).item.expect("updated patient should exist");
        assert_eq!(row.department, "Dermatology");
    }

    #[test]
    fn remove_missing_patient_is_reported() {
        let response = remove_patient(unique_token("gone"));
        assert!(!response.ok);
        assert!(response.message.contains("not found"));
    }

    #[test]
    fn summary_headline_has_fixed_doctor_count() {
        let summary = registry_summary();
        assert_eq!(summary.doctor_count, 5);
        assert!(summary.headline.ends_with("| Doctors: 5"));
    }

    #[test]
    fn department_chart_counts_registered_patients() {
        let id = unique_token("chart");
        let created = register_patient(
            id,
            "Mike Johnson".to_string(),
            "45".to_string(),
            "Male".to_string(),
            "Bone fracture".to_string(),
        );
        assert!(created.ok, "{}", created.message);

        let chart = department_chart();
        let orthopedics = chart
            .bars
            .iter()
            .find(|bar| bar.label == "Orthopedics")
            .expect("orthopedics bar should exist");
        assert!(orthopedics.count >= 1);
    }

    fn unique_token(prefix: &str) -> String {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("time went backwards")
            .as_nanos();
        format!("{prefix}-{nanos}")
    }
}
