//! Report rendering for a [`GradebookSummary`].
//!
//! Supports the plain-text report plus pretty-print and JSON log dumps.

use anyhow::Result;
use std::io::Write;
use tracing::debug;

use crate::audit::GradebookSummary;
use crate::rank::{self, TOP_K};
use crate::record::Metric;

/// Logs the summary using Rust's debug pretty-print format.
pub fn print_pretty(summary: &GradebookSummary) {
    debug!("{:#?}", summary);
}

/// Logs the summary as pretty-printed JSON.
pub fn print_json(summary: &GradebookSummary) -> Result<()> {
    debug!("{}", serde_json::to_string_pretty(summary)?);
    Ok(())
}

fn format_average(avg: Option<f64>) -> String {
    match avg {
        Some(v) => format!("{v:.2}"),
        None => "no data".to_string(),
    }
}

/// Writes the full report in its fixed order: discrepancies, general
/// averages, branch averages, then top-3 rankings per metric.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn render(summary: &GradebookSummary, out: &mut impl Write) -> Result<()> {
    if summary.discrepancies.is_empty() {
        writeln!(out, "No discrepancies found.")?;
    } else {
        writeln!(out, "Discrepancies found:")?;
        for discrepancy in &summary.discrepancies {
            writeln!(out, "{discrepancy}")?;
        }
    }

    writeln!(out, "\nGeneral Averages:")?;
    for metric in Metric::ALL {
        writeln!(
            out,
            "{}: {}",
            metric.label(),
            format_average(summary.general.average(metric))
        )?;
    }

    writeln!(out, "\nBranch-wise Averages (2024 Only):")?;
    for (name, aggregate) in summary.branches.iter_table_order() {
        writeln!(
            out,
            "Branch average for {} is {}",
            name,
            format_average(aggregate.average())
        )?;
    }

    writeln!(out, "\nTop 3 Students:")?;
    for metric in Metric::ALL {
        writeln!(out, "\nTop 3 Students for {}:", metric.label())?;
        for (i, record) in rank::top_by_metric(&summary.records, metric, TOP_K)
            .iter()
            .enumerate()
        {
            writeln!(
                out,
                "{}. Emplid: {}, Marks: {:.2}",
                i + 1,
                record.emplid,
                record.score(metric)
            )?;
        }
    }

    Ok(())
}
