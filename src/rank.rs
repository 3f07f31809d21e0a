//! Top-K ranking per metric over an immutable record collection.

use crate::record::{Metric, StudentRecord};

/// Number of ranked students reported per metric.
pub const TOP_K: usize = 3;

/// Returns up to `k` records ordered descending by `metric`.
///
/// Ranks through an index vector so the base collection is never reordered;
/// ranking one metric cannot affect the result for another. The sort is
/// stable, so ties keep their original input order.
pub fn top_by_metric<'a>(
    records: &'a [StudentRecord],
    metric: Metric,
    k: usize,
) -> Vec<&'a StudentRecord> {
    let mut order: Vec<usize> = (0..records.len()).collect();
    order.sort_by(|&a, &b| records[b].score(metric).total_cmp(&records[a].score(metric)));

    order.into_iter().take(k).map(|i| &records[i]).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::parse_row;

    fn record(emplid: &str, scores: [f64; 7]) -> StudentRecord {
        let cells: Vec<String> = ["1", "101", emplid, "2024A7001"]
            .iter()
            .map(|c| c.to_string())
            .chain(scores.iter().map(|s| s.to_string()))
            .collect();
        parse_row(&cells).unwrap()
    }

    fn sample() -> Vec<StudentRecord> {
        vec![
            record("E1", [5.0, 1.0, 9.0, 1.0, 1.0, 1.0, 18.0]),
            record("E2", [9.0, 2.0, 5.0, 2.0, 2.0, 2.0, 22.0]),
            record("E3", [7.0, 3.0, 7.0, 3.0, 3.0, 3.0, 26.0]),
            record("E4", [1.0, 4.0, 1.0, 4.0, 4.0, 4.0, 18.0]),
        ]
    }

    fn emplids(ranked: &[&StudentRecord]) -> Vec<String> {
        ranked.iter().map(|r| r.emplid.clone()).collect()
    }

    #[test]
    fn test_top_three_descending() {
        let records = sample();
        let top = top_by_metric(&records, Metric::Quiz, TOP_K);
        assert_eq!(emplids(&top), ["E2", "E3", "E1"]);
    }

    #[test]
    fn test_fewer_records_than_k() {
        let records = sample()[..2].to_vec();
        let top = top_by_metric(&records, Metric::Total, TOP_K);
        assert_eq!(top.len(), 2);
        assert_eq!(emplids(&top), ["E2", "E1"]);
    }

    #[test]
    fn test_empty_records() {
        let top = top_by_metric(&[], Metric::Compre, TOP_K);
        assert!(top.is_empty());
    }

    #[test]
    fn test_ties_keep_input_order() {
        let records = sample();
        // E1 and E4 both total 18.0; E1 appears first in the input.
        let top = top_by_metric(&records, Metric::Total, 4);
        assert_eq!(emplids(&top), ["E3", "E2", "E1", "E4"]);
    }

    #[test]
    fn test_ranking_does_not_reorder_base() {
        let records = sample();
        let _ = top_by_metric(&records, Metric::Quiz, TOP_K);
        let after: Vec<_> = records.iter().map(|r| r.emplid.clone()).collect();
        assert_eq!(after, ["E1", "E2", "E3", "E4"]);
    }

    #[test]
    fn test_metric_calls_are_order_independent() {
        let records = sample();
        let lab_first = emplids(&top_by_metric(&records, Metric::LabTest, TOP_K));

        // Rank a different metric in between, then re-rank.
        let _ = top_by_metric(&records, Metric::MidSem, TOP_K);
        let lab_again = emplids(&top_by_metric(&records, Metric::LabTest, TOP_K));

        assert_eq!(lab_first, lab_again);
        assert_eq!(lab_first, ["E1", "E3", "E2"]);
    }
}
