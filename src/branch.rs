//! Branch classification from campus identifiers.
//!
//! A campus id qualifies for branch aggregation only when it belongs to the
//! 2024 admission cohort; the two characters after the cohort tag select the
//! branch via a fixed code table.

/// Admission cohort whose records take part in branch aggregation.
pub const COHORT_TAG: &str = "2024";

/// Branch code table. Report output iterates branches in this order.
pub static BRANCH_CODES: &[(&str, &str)] = &[
    ("A7", "CS"),
    ("AA", "ECE"),
    ("A8", "ENI"),
    ("A3", "EEE"),
    ("A4", "MECH"),
    ("A5", "BPHARM"),
    ("AD", "MANU"),
];

/// Resolves a campus id to its branch name, or `None` when the id does not
/// qualify (wrong cohort, too short, or unmapped branch code).
pub fn classify(campus_id: &str) -> Option<&'static str> {
    if campus_id.len() < 6 {
        return None;
    }
    if campus_id.get(0..4)? != COHORT_TAG {
        return None;
    }
    let code = campus_id.get(4..6)?;

    BRANCH_CODES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, name)| *name)
}
