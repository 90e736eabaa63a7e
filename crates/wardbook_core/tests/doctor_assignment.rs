use wardbook_core::{assign_department, assign_doctor, fallback_doctor, Department};

#[test]
fn cardiac_keywords_resolve_to_cardiology_in_any_case() {
    for disease in ["Heart disease", "HEART failure", "cardiovascular", "myoCARDIOpathy"] {
        assert_eq!(
            assign_department(disease),
            Department::Cardiology,
            "disease `{disease}` should route to cardiology"
        );
    }
}

#[test]
fn cardiac_keywords_win_over_every_later_keyword() {
    // One disease string per lower-priority family, each also carrying a
    // cardiac term.
    for disease in [
        "heart and brain trauma",
        "cardio issue after bone fracture",
        "heart condition with skin rash",
        "child with cardio complaint and fever",
    ] {
        assert_eq!(assign_department(disease), Department::Cardiology);
    }
}

#[test]
fn each_keyword_family_routes_to_its_department() {
    assert_eq!(assign_department("brain tumor"), Department::Neurology);
    assert_eq!(assign_department("neuropathy"), Department::Neurology);
    assert_eq!(assign_department("broken bone"), Department::Orthopedics);
    assert_eq!(assign_department("hip fracture"), Department::Orthopedics);
    assert_eq!(assign_department("skin infection"), Department::Dermatology);
    assert_eq!(assign_department("itchy rash"), Department::Dermatology);
    assert_eq!(assign_department("sick child"), Department::Pediatrics);
    assert_eq!(assign_department("high fever"), Department::Pediatrics);
}

#[test]
fn skin_outranks_child_terms() {
    assert_eq!(
        assign_department("child presenting skin rash"),
        Department::Dermatology
    );
}

#[test]
fn matching_is_substring_not_whole_word() {
    assert_eq!(assign_department("heartburn"), Department::Cardiology);
    assert_eq!(assign_department("childhood asthma"), Department::Pediatrics);
}

#[test]
fn unknown_disease_gets_the_general_medicine_fallback() {
    let doctor = assign_doctor("unknown ailment");
    assert_eq!(doctor, fallback_doctor());
    assert_eq!(doctor.department, Department::GeneralMedicine);
}

#[test]
fn assigned_doctor_matches_assigned_department() {
    for disease in ["heart", "brain", "bone", "skin", "child", "none of these"] {
        let department = assign_department(disease);
        let doctor = assign_doctor(disease);
        assert_eq!(doctor.department, department);
    }
}
