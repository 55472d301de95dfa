//! File discovery: expand a glob pattern into concrete regular files.

use crate::Result;
use anyhow::Context;
use log::warn;
use std::collections::BTreeSet;
use std::path::PathBuf;

/// Expand `pattern` (recursive `**` supported) into the matching regular
/// files, deduplicated, in the order the filesystem enumeration yields them.
///
/// Directories matched by the pattern are filtered out. An empty result is a
/// valid "no files matched" outcome, not an error; unreadable matches are
/// skipped with a warning.
pub fn resolve_files(pattern: &str) -> Result<Vec<PathBuf>> {
    let matches =
        glob::glob(pattern).with_context(|| format!("invalid file pattern {pattern:?}"))?;

    let mut seen = BTreeSet::new();
    let mut files = Vec::new();
    for entry in matches {
        match entry {
            Ok(path) => {
                if path.is_dir() || !seen.insert(path.clone()) {
                    continue;
                }
                files.push(path);
            }
            Err(e) => warn!("skipping unreadable match for {pattern:?}: {e}"),
        }
    }
    Ok(files)
}
