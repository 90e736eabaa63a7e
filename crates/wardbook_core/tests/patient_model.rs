use wardbook_core::{assign_doctor, fallback_doctor, Patient};

#[test]
fn new_keeps_fields_verbatim() {
    let doctor = assign_doctor("bone fracture");
    let patient = Patient::new("P009", "Mike Johnson", 45, "Male", "Bone fracture", doctor);

    assert_eq!(patient.id, "P009");
    assert_eq!(patient.name, "Mike Johnson");
    assert_eq!(patient.age, 45);
    assert_eq!(patient.gender, "Male");
    assert_eq!(patient.disease, "Bone fracture");
    assert_eq!(patient.doctor.id, "D103");
}

#[test]
fn serialization_uses_expected_wire_fields() {
    let patient = Patient::new(
        "P001",
        "John Doe",
        35,
        "Male",
        "Heart disease",
        assign_doctor("Heart disease"),
    );

    let json = serde_json::to_value(&patient).unwrap();
    assert_eq!(json["patient_id"], "P001");
    assert_eq!(json["name"], "John Doe");
    assert_eq!(json["age"], 35);
    assert_eq!(json["gender"], "Male");
    assert_eq!(json["disease"], "Heart disease");
    assert_eq!(json["doctor"]["doctor_id"], "D101");
    assert_eq!(json["doctor"]["name"], "Dr. Mehta");
    assert_eq!(json["doctor"]["department"], "cardiology");

    let decoded: Patient = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, patient);
}

#[test]
fn fallback_department_uses_snake_case_wire_form() {
    let json = serde_json::to_value(fallback_doctor()).unwrap();
    assert_eq!(json["doctor_id"], "D000");
    assert_eq!(json["department"], "general_medicine");
}
