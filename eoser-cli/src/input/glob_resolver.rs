//! File pattern resolution using glob

use std::path::PathBuf;

use anyhow::{Context, Result};
use glob::glob;

use super::STDIN_MARKER;
use crate::error::CliError;

/// Resolve input patterns to a sorted, deduplicated list of files
///
/// `-` is passed through unchanged and always comes first.
pub fn resolve_patterns(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    let mut read_stdin = false;

    for pattern in patterns {
        if pattern == STDIN_MARKER {
            read_stdin = true;
            continue;
        }

        let paths = glob(pattern).map_err(|_| CliError::InvalidPattern(pattern.clone()))?;
        let before = files.len();

        for path_result in paths {
            let path = path_result.with_context(|| format!("Error resolving pattern: {pattern}"))?;
            if path.is_file() {
                files.push(path);
            }
        }

        if files.len() == before {
            log::warn!("Pattern \"{pattern}\" matched no files");
        }
    }

    files.sort();
    files.dedup();

    if read_stdin {
        files.insert(0, PathBuf::from(STDIN_MARKER));
    }

    if files.is_empty() {
        return Err(CliError::NoInputFiles.into());
    }

    Ok(files)
}
