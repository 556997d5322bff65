//! Glob pattern expansion for batch runs.

use std::path::PathBuf;

use crate::error::{Error, Result};

/// Expands a glob pattern into the ordered set of matching paths.
///
/// A valid pattern that matches nothing returns an empty vector; callers
/// treat that as zero work, not as a failure. Directory entries that cannot
/// be read while matching are skipped.
///
/// # Errors
///
/// Returns [`Error::Pattern`] if the pattern is syntactically invalid.
pub fn resolve_pattern(pattern: &str) -> Result<Vec<PathBuf>> {
    let paths = glob::glob(pattern).map_err(|source| Error::Pattern {
        pattern: pattern.to_string(),
        source,
    })?;

    Ok(paths.flatten().collect())
}
