//! Tabular source: reads a gradebook CSV into rows of string cells.

use anyhow::{Context, Result};
use csv::ReaderBuilder;
use std::fs::File;
use std::io;
use tracing::debug;

/// Materializes every row of a CSV reader as string cells.
///
/// The reader runs headerless and flexible: the header row and any short
/// rows come through as plain cell sequences, and skipping them is the
/// pipeline's decision, not the reader's.
///
/// # Errors
///
/// Returns an error if any row cannot be read.
pub fn rows_from_reader<R: io::Read>(reader: R) -> Result<Vec<Vec<String>>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut rows = Vec::new();
    for result in rdr.records() {
        let record = result.context("failed to read gradebook row")?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    Ok(rows)
}

/// Loads all rows from a gradebook file on disk.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or read.
pub fn load_rows(path: &str) -> Result<Vec<Vec<String>>> {
    let file = File::open(path).with_context(|| format!("failed to open gradebook: {path}"))?;
    let rows = rows_from_reader(file)?;
    debug!(path, rows = rows.len(), "Gradebook rows loaded");
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_include_header_and_short_rows() {
        let csv = "Sl No,Class No,Emplid\n1,101,E001\n2\n";
        let rows = rows_from_reader(csv.as_bytes()).unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], ["Sl No", "Class No", "Emplid"]);
        assert_eq!(rows[1], ["1", "101", "E001"]);
        assert_eq!(rows[2], ["2"]);
    }

    #[test]
    fn test_empty_input_yields_no_rows() {
        let rows = rows_from_reader("".as_bytes()).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let err = load_rows("/nonexistent/gradebook.csv").unwrap_err();
        assert!(err.to_string().contains("failed to open gradebook"));
    }
}
