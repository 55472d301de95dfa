//! Error taxonomy.
//!
//! `ConfigError` is structural: nothing downstream of a broken config is
//! trustworthy, so it aborts the run. `JobError` covers the data-level
//! failures expected across a heterogeneous batch; the pipeline catches it
//! per file or per group column and keeps going.

use std::path::PathBuf;
use thiserror::Error;

/// Fatal configuration failures raised by `load_config`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("configuration file not found at {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to decode JSON from {}: {reason}", path.display())]
    Format { path: PathBuf, reason: String },

    #[error("no job entries found in {}", .0.display())]
    Empty(PathBuf),
}

/// Recoverable failures scoped to one file or one group-column render.
#[derive(Debug, Error)]
pub enum JobError {
    #[error("failed to parse {}: {reason}", path.display())]
    Parse { path: PathBuf, reason: String },

    #[error("column {column:?} not found")]
    MissingColumn { column: String },

    #[error("none of the measure columns {columns:?} are present")]
    NoMeasureColumns { columns: Vec<String> },

    #[error("unknown chart kind {0:?}, supported: \"bar\", \"line\"")]
    UnsupportedChartKind(String),

    #[error("failed to write chart {}: {reason}", path.display())]
    ArtifactWrite { path: PathBuf, reason: String },
}
