//! Loading and normalizing the job list from a JSON config file.

use crate::config::JobSpec;
use crate::error::ConfigError;
use log::{info, warn};
use serde_json::Value as JsonValue;
use std::path::Path;

/// Load the ordered job list from `path`.
///
/// The root may be an array of job objects or a single job object, which is
/// normalized into a one-element list. An entry that does not match the
/// descriptor shape (e.g. a numeric `measure`) is skipped with a warning so
/// its siblings still run; only unparseable JSON and a non-object/array root
/// are format errors. A list with no usable entries is an error: a config
/// that describes no work is almost certainly a mistake.
pub fn load_config(path: &Path) -> Result<Vec<JobSpec>, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::NotFound(path.to_path_buf()));
    }

    let format_err = |reason: String| ConfigError::Format {
        path: path.to_path_buf(),
        reason,
    };

    let text = std::fs::read_to_string(path).map_err(|e| format_err(e.to_string()))?;
    let root: JsonValue = serde_json::from_str(&text).map_err(|e| format_err(e.to_string()))?;

    let entries = match root {
        JsonValue::Array(items) => items,
        JsonValue::Object(_) => vec![root],
        _ => {
            return Err(format_err(
                "root must be a job object or an array of job objects".to_string(),
            ));
        }
    };

    // Per-entry problems are not structural: a wrong-typed field in one
    // descriptor must not stop valid siblings from running.
    let mut jobs = Vec::with_capacity(entries.len());
    for (i, entry) in entries.into_iter().enumerate() {
        match serde_json::from_value::<JobSpec>(entry) {
            Ok(job) => jobs.push(job),
            Err(e) => warn!("skipping job entry {}: {}", i + 1, e),
        }
    }

    if jobs.is_empty() {
        return Err(ConfigError::Empty(path.to_path_buf()));
    }

    info!("loaded {} job(s) from {}", jobs.len(), path.display());
    Ok(jobs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OneOrMany;
    use std::io::Write;

    fn write_config(dir: &tempfile::TempDir, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join("config.json");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn loads_a_list_of_jobs() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(
            &dir,
            r#"[{"pathPattern": "data/*.csv", "measure": "Income", "groupBy": "Year", "chartKind": "bar"}]"#,
        );

        let jobs = load_config(&path).unwrap();
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].path_pattern.as_deref(), Some("data/*.csv"));
        assert_eq!(jobs[0].group_by, Some(OneOrMany::One("Year".to_string())));
    }

    #[test]
    fn single_object_root_becomes_one_element_list() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(&dir, r#"{"pathPattern": "data/*.csv"}"#);

        let jobs = load_config(&path).unwrap();
        assert_eq!(jobs.len(), 1);
    }

    #[test]
    fn missing_file_is_not_found() {
        let err = load_config(Path::new("does/not/exist.json")).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn malformed_json_is_a_format_error_naming_the_source() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(&dir, "{invalid_json: true");

        let err = load_config(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Format { .. }));
        assert!(err.to_string().contains("config.json"));
    }

    #[test]
    fn scalar_root_is_a_format_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(&dir, "42");

        let err = load_config(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Format { .. }));
    }

    #[test]
    fn wrong_typed_entry_is_skipped_and_siblings_survive() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(
            &dir,
            r#"[
                {"pathPattern": "data/*.csv", "measure": 42, "groupBy": "Year", "chartKind": "bar"},
                {"pathPattern": "data/*.csv", "measure": "Income", "groupBy": "Year", "chartKind": "bar"}
            ]"#,
        );

        let jobs = load_config(&path).unwrap();
        assert_eq!(jobs.len(), 1);
        assert_eq!(
            jobs[0].measure,
            Some(OneOrMany::One("Income".to_string()))
        );
    }

    #[test]
    fn all_entries_unusable_is_an_empty_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(&dir, r#"[{"measure": 42}]"#);

        let err = load_config(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Empty(_)));
    }

    #[test]
    fn empty_list_is_an_empty_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(&dir, "[]");

        let err = load_config(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Empty(_)));
    }
}
