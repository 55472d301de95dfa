//! Orchestration: iterate jobs, discover files, aggregate, render.
//!
//! Failure isolation boundaries: a config-level error is fatal and surfaces
//! from `load_config`; a file that fails to parse or has no usable measure
//! column is logged and skipped; an aggregation or render failure is scoped
//! to its group column. One bad input never aborts the batch.

use crate::aggregate::{group_sum, resolve_measure};
use crate::config::{JobSpec, OneOrMany, load_config};
use crate::error::{ConfigError, JobError};
use crate::files::resolve_files;
use crate::render::render_chart;
use crate::table::parse_csv_file;
use log::{error, info, warn};
use std::path::Path;

/// Drives the whole batch: config in, chart artifacts out.
#[derive(Debug, Default)]
pub struct Visualizer {
    jobs: Vec<JobSpec>,
}

impl Visualizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load and normalize the job list. Fatal on a missing, malformed, or
    /// empty config; on success the previous job list (if any) is replaced.
    pub fn load_config(&mut self, path: &Path) -> Result<(), ConfigError> {
        self.jobs = load_config(path)?;
        Ok(())
    }

    /// Process every loaded job in order. Calling this before `load_config`
    /// is a warning no-op, not an error.
    pub fn process_all(&self) -> crate::Result<()> {
        if self.jobs.is_empty() {
            warn!("no configuration loaded, call load_config() first");
            return Ok(());
        }

        for (i, job) in self.jobs.iter().enumerate() {
            info!("processing job {} of {}", i + 1, self.jobs.len());
            self.process_job(job);
        }
        Ok(())
    }

    fn process_job(&self, job: &JobSpec) {
        let Some(pattern) = job.path_pattern.as_deref().filter(|p| !p.is_empty()) else {
            warn!("job missing pathPattern, skipping");
            return;
        };
        let Some(measure) = job.measure.as_ref().filter(|m| !m.is_empty()) else {
            warn!("job missing measure, skipping");
            return;
        };
        let Some(group_by) = job.group_by.as_ref().filter(|g| !g.is_empty()) else {
            warn!("job missing groupBy, skipping");
            return;
        };
        let Some(chart_kind) = job.chart_kind.as_deref().filter(|k| !k.is_empty()) else {
            warn!("job missing chartKind, skipping");
            return;
        };

        let files = match resolve_files(pattern) {
            Ok(files) => files,
            Err(e) => {
                warn!("cannot expand pattern {pattern:?}: {e}, skipping job");
                return;
            }
        };
        info!("found {} file(s) matching {pattern:?}", files.len());

        for path in &files {
            if let Err(e) =
                self.process_file(path, measure, group_by, chart_kind, job.chart_label.as_deref())
            {
                match e {
                    JobError::Parse { .. } => error!("{e}"),
                    _ => warn!("skipping {}: {e}", path.display()),
                }
            }
        }
    }

    /// Parse one file, resolve its measure, and render one chart per group
    /// column. Group-level failures are logged here and do not affect
    /// sibling group columns.
    fn process_file(
        &self,
        path: &Path,
        measure: &OneOrMany,
        group_by: &OneOrMany,
        chart_kind: &str,
        chart_label: Option<&str>,
    ) -> Result<(), JobError> {
        info!("processing {}", path.display());

        let mut table = parse_csv_file(path)?;
        let resolved = resolve_measure(measure, chart_label, &mut table)?;

        let output_dir = path.parent().unwrap_or_else(|| Path::new("."));
        let base = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("chart");

        for group_col in group_by.names() {
            let series = match group_sum(&table, &resolved.column, group_col) {
                Ok(series) => series,
                Err(e) => {
                    warn!("{}: {e}, skipping group", path.display());
                    continue;
                }
            };
            if let Err(e) = render_chart(&series, chart_kind, output_dir, base, &resolved.label) {
                warn!("{}: {e}", path.display());
            }
        }

        Ok(())
    }
}
