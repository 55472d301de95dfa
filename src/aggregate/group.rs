//! Grouped sums: one series per grouping column.

use crate::error::JobError;
use crate::table::{Table, Value};
use std::collections::BTreeMap;

/// Ordered (group key, sum) pairs for one grouping column of one table.
///
/// Produced fresh per (file, group column) pair and consumed immediately by
/// the chart renderer; aggregation never merges across files.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregatedSeries {
    pub group_column: String,
    pub points: Vec<(Value, f64)>,
}

/// Group `table` by `group_col` and sum `measure_col` per distinct value.
///
/// Keys come back in `Value` order, so numeric group keys sort numerically
/// and text keys lexicographically.
pub fn group_sum(
    table: &Table,
    measure_col: &str,
    group_col: &str,
) -> Result<AggregatedSeries, JobError> {
    let keys = table.column(group_col).ok_or_else(|| JobError::MissingColumn {
        column: group_col.to_string(),
    })?;
    let measures = table
        .column(measure_col)
        .ok_or_else(|| JobError::MissingColumn {
            column: measure_col.to_string(),
        })?;

    let mut sums: BTreeMap<Value, f64> = BTreeMap::new();
    for (key, value) in keys.iter().zip(measures) {
        *sums.entry(key.clone()).or_insert(0.0) += value.as_f64().unwrap_or(0.0);
    }

    Ok(AggregatedSeries {
        group_column: group_col.to_string(),
        points: sums.into_iter().collect(),
    })
}
