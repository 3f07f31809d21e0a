//! Total-consistency checking and the single pass that folds raw rows into
//! a [`GradebookSummary`].

use serde::Serialize;
use std::fmt;
use tracing::{debug, warn};

use crate::aggregate::{BranchAggregates, GeneralAggregate};
use crate::branch;
use crate::record::{self, StudentRecord, MIN_COLUMNS};

/// One record whose component sum disagrees with its recorded total.
/// Observational only; the record stays in the record set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Discrepancy {
    pub emplid: String,
    pub computed: f64,
    pub recorded: f64,
}

impl fmt::Display for Discrepancy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Discrepancy for {}: Computed Total {:.2} != Recorded Total {:.2}",
            self.emplid, self.computed, self.recorded
        )
    }
}

/// Flags a record whose exact component sum differs from the recorded total.
/// No tolerance is applied.
pub fn check_total(record: &StudentRecord) -> Option<Discrepancy> {
    let computed = record.computed_total();
    if computed != record.total {
        return Some(Discrepancy {
            emplid: record.emplid.clone(),
            computed,
            recorded: record.total,
        });
    }
    None
}

/// Everything the report needs, produced by one pass over the raw rows.
#[derive(Debug, Default, Serialize)]
pub struct GradebookSummary {
    pub records: Vec<StudentRecord>,
    pub discrepancies: Vec<Discrepancy>,
    pub general: GeneralAggregate,
    pub branches: BranchAggregates,
}

impl GradebookSummary {
    /// Folds raw rows into records, discrepancies, and aggregates.
    ///
    /// Row 0 is always treated as the header and skipped. Rows with fewer
    /// than [`MIN_COLUMNS`] cells are skipped silently. Rows with a
    /// malformed field are logged with their 1-based row number and
    /// excluded; processing always continues with the next row.
    pub fn from_rows<I>(rows: I) -> Self
    where
        I: IntoIterator<Item = Vec<String>>,
    {
        let mut summary = GradebookSummary::default();

        for (i, row) in rows.into_iter().enumerate() {
            if i == 0 {
                continue;
            }
            if row.len() < MIN_COLUMNS {
                continue;
            }

            let record = match record::parse_row(&row) {
                Ok(record) => record,
                Err(e) => {
                    warn!(row = i + 1, error = %e, "Skipping malformed row");
                    continue;
                }
            };

            if let Some(discrepancy) = check_total(&record) {
                summary.discrepancies.push(discrepancy);
            }

            if let Some(branch) = branch::classify(&record.campus_id) {
                summary.branches.add(branch, record.total);
            }

            summary.general.add(&record);
            summary.records.push(record);
        }

        debug!(
            records = summary.records.len(),
            discrepancies = summary.discrepancies.len(),
            "Gradebook pass complete"
        );

        summary
    }
}
