//! Running-sum accumulators for general and branch-wise averages.

use serde::Serialize;
use std::collections::HashMap;

use crate::branch::BRANCH_CODES;
use crate::record::{Metric, StudentRecord};

/// Running sums for all seven metrics across every parsed record.
#[derive(Debug, Default, Serialize)]
pub struct GeneralAggregate {
    sums: [f64; Metric::ALL.len()],
    count: usize,
}

impl GeneralAggregate {
    /// Folds one record into the running sums.
    pub fn add(&mut self, record: &StudentRecord) {
        for metric in Metric::ALL {
            self.sums[metric.idx()] += record.score(metric);
        }
        self.count += 1;
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Arithmetic mean for one metric, or `None` when no records were parsed.
    pub fn average(&self, metric: Metric) -> Option<f64> {
        if self.count == 0 {
            return None;
        }
        Some(self.sums[metric.idx()] / self.count as f64)
    }
}

/// Running total and head count for one branch.
#[derive(Debug, Default, Serialize)]
pub struct BranchAggregate {
    pub total: f64,
    pub students: usize,
}

impl BranchAggregate {
    /// Mean of the recorded totals, or `None` for an empty aggregate.
    pub fn average(&self) -> Option<f64> {
        if self.students == 0 {
            return None;
        }
        Some(self.total / self.students as f64)
    }
}

/// Branch-name-keyed aggregates, created lazily on the first qualifying
/// record per branch.
#[derive(Debug, Default, Serialize)]
pub struct BranchAggregates(HashMap<&'static str, BranchAggregate>);

impl BranchAggregates {
    /// Routes one record's recorded total into a branch.
    pub fn add(&mut self, branch: &'static str, total: f64) {
        let entry = self.0.entry(branch).or_default();
        entry.total += total;
        entry.students += 1;
    }

    pub fn get(&self, branch: &str) -> Option<&BranchAggregate> {
        self.0.get(branch)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Populated branches in branch-code table order, keeping report output
    /// deterministic.
    pub fn iter_table_order(&self) -> impl Iterator<Item = (&'static str, &BranchAggregate)> {
        BRANCH_CODES
            .iter()
            .filter_map(|(_, name)| self.0.get(name).map(|agg| (*name, agg)))
    }
}
