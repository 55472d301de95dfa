//! Measure resolution: turn the job's measure field into one synthetic
//! column on the table, plus the display label for the aggregated quantity.

use crate::config::OneOrMany;
use crate::error::JobError;
use crate::table::{Table, Value};

/// Name of the synthetic column holding the per-row measure total.
pub const MEASURE_COLUMN: &str = "calculated_value";

/// Outcome of measure resolution. `column` names the synthetic column that
/// was inserted into the table; `label` is the display name for it.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedMeasure {
    pub column: String,
    pub label: String,
}

/// Resolve `measure` against `table`, inserting the synthetic column.
///
/// A single measure name must be present in the table. A list of names is
/// intersected with the table's columns in config order: absent names are
/// silently ignored so heterogeneous source files degrade gracefully, and
/// only an empty intersection is an error. The synthetic column is a direct
/// copy for a single name, or the row-wise sum over the present subset
/// (non-numeric cells contribute 0). The label falls back to the measure
/// name, or the present names joined with " + ", when `chart_label` is unset.
pub fn resolve_measure(
    measure: &OneOrMany,
    chart_label: Option<&str>,
    table: &mut Table,
) -> Result<ResolvedMeasure, JobError> {
    let label;

    match measure {
        OneOrMany::One(name) => {
            let source = table
                .column(name)
                .ok_or_else(|| JobError::MissingColumn {
                    column: name.clone(),
                })?
                .to_vec();
            table.insert_column(MEASURE_COLUMN, source);
            label = chart_label.unwrap_or(name.as_str()).to_string();
        }
        OneOrMany::Many(names) => {
            let mut present: Vec<String> = Vec::new();
            let mut totals = vec![0.0f64; table.row_count()];
            for name in names {
                if let Some(column) = table.column(name) {
                    for (total, value) in totals.iter_mut().zip(column) {
                        *total += value.as_f64().unwrap_or(0.0);
                    }
                    present.push(name.clone());
                }
            }

            if present.is_empty() {
                return Err(JobError::NoMeasureColumns {
                    columns: names.clone(),
                });
            }

            table.insert_column(MEASURE_COLUMN, totals.into_iter().map(Value::Float).collect());
            label = chart_label
                .map(str::to_string)
                .unwrap_or_else(|| present.join(" + "));
        }
    }

    Ok(ResolvedMeasure {
        column: MEASURE_COLUMN.to_string(),
        label,
    })
}
