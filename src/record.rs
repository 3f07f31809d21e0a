//! Student record type, scoring metrics, and row parsing.

use serde::Serialize;
use thiserror::Error;

/// Number of cells a gradebook row must carry to be parseable.
pub const MIN_COLUMNS: usize = 11;

/// One row of the gradebook: identifiers plus the six component scores
/// and the total recorded in the sheet. Immutable once parsed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentRecord {
    pub sl_no: i64,
    pub class_no: i64,
    pub emplid: String,
    pub campus_id: String,
    pub quiz: f64,
    pub mid_sem: f64,
    pub lab_test: f64,
    pub weekly_labs: f64,
    pub pre_compre: f64,
    pub compre: f64,
    pub total: f64,
}

impl StudentRecord {
    /// Sum of the six component scores, independent of the recorded total.
    pub fn computed_total(&self) -> f64 {
        self.quiz + self.mid_sem + self.lab_test + self.weekly_labs + self.pre_compre + self.compre
    }

    /// Selects one numeric field by metric.
    pub fn score(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Quiz => self.quiz,
            Metric::MidSem => self.mid_sem,
            Metric::LabTest => self.lab_test,
            Metric::WeeklyLabs => self.weekly_labs,
            Metric::PreCompre => self.pre_compre,
            Metric::Compre => self.compre,
            Metric::Total => self.total,
        }
    }
}

/// The seven numeric fields every averaging and ranking pass runs over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Metric {
    Quiz,
    MidSem,
    LabTest,
    WeeklyLabs,
    PreCompre,
    Compre,
    Total,
}

impl Metric {
    /// Fixed reporting order.
    pub const ALL: [Metric; 7] = [
        Metric::Quiz,
        Metric::MidSem,
        Metric::LabTest,
        Metric::WeeklyLabs,
        Metric::PreCompre,
        Metric::Compre,
        Metric::Total,
    ];

    /// Label used in report output.
    pub fn label(self) -> &'static str {
        match self {
            Metric::Quiz => "Quiz",
            Metric::MidSem => "Mid-Sem",
            Metric::LabTest => "Lab Test",
            Metric::WeeklyLabs => "Weekly Labs",
            Metric::PreCompre => "Pre-Compre",
            Metric::Compre => "Compre",
            Metric::Total => "Total",
        }
    }

    pub(crate) fn idx(self) -> usize {
        self as usize
    }
}

/// Why a single gradebook row could not be turned into a [`StudentRecord`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("row has {0} cells, expected at least {MIN_COLUMNS}")]
    TooFewCells(usize),
    #[error("invalid {field}: {raw}")]
    BadField { field: &'static str, raw: String },
}

fn parse_int(field: &'static str, raw: &str) -> Result<i64, ParseError> {
    raw.parse::<i64>().map_err(|_| ParseError::BadField {
        field,
        raw: raw.to_string(),
    })
}

fn parse_score(field: &'static str, raw: &str) -> Result<f64, ParseError> {
    raw.parse::<f64>().map_err(|_| ParseError::BadField {
        field,
        raw: raw.to_string(),
    })
}

/// Parses one row of string cells into a [`StudentRecord`].
///
/// Column layout is fixed and positional: [0]=Sl No, [1]=Class No,
/// [2]=Emplid, [3]=Campus ID, [4..10]=the six component scores, [10]=Total.
///
/// # Errors
///
/// Returns a [`ParseError`] naming the first offending field and its raw
/// text; no partial record is ever produced.
pub fn parse_row(cells: &[String]) -> Result<StudentRecord, ParseError> {
    if cells.len() < MIN_COLUMNS {
        return Err(ParseError::TooFewCells(cells.len()));
    }

    Ok(StudentRecord {
        sl_no: parse_int("Sl No", &cells[0])?,
        class_no: parse_int("Class No", &cells[1])?,
        emplid: cells[2].clone(),
        campus_id: cells[3].clone(),
        quiz: parse_score("Quiz", &cells[4])?,
        mid_sem: parse_score("Mid-Sem", &cells[5])?,
        lab_test: parse_score("Lab Test", &cells[6])?,
        weekly_labs: parse_score("Weekly Labs", &cells[7])?,
        pre_compre: parse_score("Pre-Compre", &cells[8])?,
        compre: parse_score("Compre", &cells[9])?,
        total: parse_score("Total", &cells[10])?,
    })
}
