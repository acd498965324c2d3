//! Recursive discovery of `.go` files.

use crate::config::Settings;
use crate::error::{FiletagError, Result};
use globset::GlobSet;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::{DirEntry, WalkDir};

/// Directory names the Go tool never descends into.
const SKIPPED_DIR_NAMES: &[&str] = &["vendor", "testdata"];

/// Expand files and directories into a sorted, deduplicated list of Go files.
///
/// Explicit file arguments are always kept, whatever their extension.
///
/// # Returns
///
/// * `Ok(Vec<PathBuf>)` - Files to check
/// * `Err(FiletagError::IoError)` - A path does not exist or cannot be read
/// * `Err(FiletagError::UserError)` - An exclude glob is invalid
pub fn collect_go_files(paths: &[PathBuf], settings: &Settings) -> Result<Vec<PathBuf>> {
    let exclude = settings.exclude_set()?;
    let mut files = Vec::new();

    for path in paths {
        let metadata = std::fs::metadata(path).map_err(|e| {
            FiletagError::IoError(format!("cannot access '{}': {}", path.display(), e))
        })?;

        if metadata.is_dir() {
            walk_dir(path, &exclude, &mut files)?;
        } else {
            files.push(path.clone());
        }
    }

    files.sort();
    files.dedup();
    Ok(files)
}

fn walk_dir(root: &Path, exclude: &GlobSet, files: &mut Vec<PathBuf>) -> Result<()> {
    let walker = WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || keep_entry(root, entry, exclude));

    for next in walker {
        let entry = next.map_err(|e| convert_walkdir_error(root, e))?;
        if entry.file_type().is_file() && entry.file_name().to_string_lossy().ends_with(".go") {
            files.push(entry.into_path());
        }
    }

    Ok(())
}

/// Prune excluded paths and directories the Go tool skips.
fn keep_entry(root: &Path, entry: &DirEntry, exclude: &GlobSet) -> bool {
    let path = entry.path();
    if is_excluded(root, path, exclude) {
        debug!(path = %path.display(), "excluded by settings");
        return false;
    }
    if entry.file_type().is_dir() && is_skipped_dir(&entry.file_name().to_string_lossy()) {
        debug!(path = %path.display(), "skipping directory");
        return false;
    }
    true
}

fn convert_walkdir_error(root: &Path, err: walkdir::Error) -> FiletagError {
    let path = err.path().unwrap_or(root).display().to_string();
    FiletagError::IoError(format!("failed to read directory '{}': {}", path, err))
}

/// Whether the Go tool would ignore a directory with this name.
pub(crate) fn is_skipped_dir(name: &str) -> bool {
    name.starts_with('.') || name.starts_with('_') || SKIPPED_DIR_NAMES.contains(&name)
}

/// Match `path` relative to `root`, with `/` separators, against the exclude set.
fn is_excluded(root: &Path, path: &Path, exclude: &GlobSet) -> bool {
    if exclude.is_empty() {
        return false;
    }
    let relative = path.strip_prefix(root).unwrap_or(path);
    let normalized = relative.to_string_lossy().replace('\\', "/");
    exclude.is_match(normalized.as_str())
}
