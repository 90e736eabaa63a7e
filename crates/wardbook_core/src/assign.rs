//! Keyword-priority doctor assignment.
//!
//! # Responsibility
//! - Map free-text disease descriptions to an admitting department/doctor.
//!
//! # Invariants
//! - Rules are evaluated in fixed priority order, first match wins.
//! - Matching is case-insensitive substring containment, not whole-word.
//! - Every input resolves to a doctor; unmatched text falls back to
//!   General Medicine.

use crate::model::doctor::{doctor_for_department, fallback_doctor, Department, Doctor};

/// One priority row of the assignment table.
#[derive(Debug, Clone, Copy)]
pub struct AssignmentRule {
    /// Lowercase keywords matched as substrings of the disease text.
    pub keywords: &'static [&'static str],
    /// Department this row routes to.
    pub department: Department,
}

/// Priority-ordered assignment table.
///
/// Row order is load-bearing: a description containing both a skin keyword
/// and a child keyword routes to Dermatology because that row is evaluated
/// first. Kept as an ordered slice, never an unordered map.
pub const ASSIGNMENT_RULES: &[AssignmentRule] = &[
    AssignmentRule {
        keywords: &["heart", "cardio"],
        department: Department::Cardiology,
    },
    AssignmentRule {
        keywords: &["brain", "neuro"],
        department: Department::Neurology,
    },
    AssignmentRule {
        keywords: &["bone", "fracture"],
        department: Department::Orthopedics,
    },
    AssignmentRule {
        keywords: &["skin", "rash"],
        department: Department::Dermatology,
    },
    AssignmentRule {
        keywords: &["child", "fever"],
        department: Department::Pediatrics,
    },
];

/// Resolves the admitting department for a disease description.
pub fn assign_department(disease: &str) -> Department {
    let needle = disease.to_lowercase();
    ASSIGNMENT_RULES
        .iter()
        .find(|rule| rule.keywords.iter().any(|keyword| needle.contains(keyword)))
        .map_or(Department::GeneralMedicine, |rule| rule.department)
}

/// Resolves the admitting doctor for a disease description.
///
/// Never fails: unmatched text yields the General Medicine fallback doctor.
pub fn assign_doctor(disease: &str) -> Doctor {
    doctor_for_department(assign_department(disease)).unwrap_or_else(fallback_doctor)
}

#[cfg(test)]
mod tests {
    use super::{assign_department, assign_doctor, ASSIGNMENT_RULES};
    use crate::model::doctor::Department;

    #[test]
    fn every_rule_has_keywords_in_lowercase() {
        for rule in ASSIGNMENT_RULES {
            assert!(!rule.keywords.is_empty());
            for keyword in rule.keywords {
                assert_eq!(*keyword, keyword.to_lowercase());
            }
        }
    }

    #[test]
    fn matching_is_case_insensitive_substring() {
        assert_eq!(assign_department("CARDIO stress"), Department::Cardiology);
        assert_eq!(assign_department("heartburn"), Department::Cardiology);
        assert_eq!(assign_department("hairline Fracture"), Department::Orthopedics);
    }

    #[test]
    fn earlier_rows_win_over_later_keywords() {
        // Contains both a skin keyword and a child keyword.
        assert_eq!(
            assign_department("skin rash in a child"),
            Department::Dermatology
        );
        // Cardiac keywords outrank everything after them.
        assert_eq!(
            assign_department("heart trouble with fever and rash"),
            Department::Cardiology
        );
    }

    #[test]
    fn unmatched_text_falls_back_to_general_medicine() {
        let doctor = assign_doctor("unknown ailment");
        assert_eq!(doctor.id, "D000");
        assert_eq!(doctor.department, Department::GeneralMedicine);
    }

    #[test]
    fn matched_text_resolves_to_staff_doctor() {
        let doctor = assign_doctor("brain injury");
        assert_eq!(doctor.id, "D102");
        assert_eq!(doctor.department, Department::Neurology);
    }
}
