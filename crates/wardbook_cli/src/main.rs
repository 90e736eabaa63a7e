//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `wardbook_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use wardbook_core::{
    department_distribution, gender_distribution, AdmissionService, MemoryPatientRepository,
};

fn main() {
    println!("wardbook_core version={}", wardbook_core::core_version());

    let mut service = AdmissionService::new(MemoryPatientRepository::new());
    if let Err(err) = service.seed_sample_patients() {
        eprintln!("sample data failed: {err}");
        std::process::exit(1);
    }

    let patients = service.patients();
    println!("{}", service.summary());
    for patient in &patients {
        println!(
            "{} | {} | {} | {} | {} | {} | {}",
            patient.id,
            patient.name,
            patient.age,
            patient.gender,
            patient.disease,
            patient.doctor.name,
            patient.doctor.department
        );
    }

    for bar in department_distribution(&patients) {
        println!("department {}: {}", bar.department, bar.count);
    }
    for slice in gender_distribution(&patients) {
        println!("gender {}: {} ({:.1}%)", slice.gender, slice.count, slice.share);
    }
}
