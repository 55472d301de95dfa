//! Aggregation layer: resolve the measure column, then group-and-sum.

pub mod group;
pub mod measure;

pub use group::{AggregatedSeries, group_sum};
pub use measure::{MEASURE_COLUMN, ResolvedMeasure, resolve_measure};
