//! Host adapter: find Go files on disk and run the analyzer over them.
//!
//! Directory walking follows the Go tool conventions: `vendor` and
//! `testdata` directories and anything starting with `.` or `_` are skipped.
//! Settings `exclude` globs prune further, matched against paths relative to
//! the walked directory.

mod walk;

#[cfg(test)]
mod tests;

use crate::analyzer::Analyzer;
use crate::config::Settings;
use crate::error::{FiletagError, Result};
use crate::rules::Violation;
use crate::source::GoSourceFile;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::debug;

pub use walk::collect_go_files;

/// A violation together with the file it was found in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub file: String,
    pub line: usize,
    pub column: usize,
    pub pattern: String,
    pub tag: String,
    pub message: String,
}

impl Diagnostic {
    pub fn new(file: impl Into<String>, violation: Violation) -> Self {
        Self {
            file: file.into(),
            line: violation.position.line,
            column: violation.position.column,
            pattern: violation.pattern,
            tag: violation.tag,
            message: violation.message,
        }
    }
}

/// Check a single file on disk.
///
/// Invalid UTF-8 is replaced rather than rejected; only the read itself can fail.
pub fn check_file(path: &Path, analyzer: &Analyzer) -> Result<Vec<Diagnostic>> {
    let bytes = std::fs::read(path).map_err(|e| {
        FiletagError::IoError(format!("failed to read '{}': {}", path.display(), e))
    })?;
    let source = String::from_utf8_lossy(&bytes);

    let display = path.display().to_string();
    let file = GoSourceFile::parse(display.clone(), &source);
    Ok(analyzer
        .run(&file)
        .into_iter()
        .map(|v| Diagnostic::new(display.clone(), v))
        .collect())
}

/// Expand `paths` and check every Go file found, in path order.
pub fn check_paths(
    paths: &[PathBuf],
    analyzer: &Analyzer,
    settings: &Settings,
) -> Result<Vec<Diagnostic>> {
    let files = collect_go_files(paths, settings)?;
    debug!(files = files.len(), "collected Go files");

    let mut diagnostics = Vec::new();
    for path in &files {
        diagnostics.extend(check_file(path, analyzer)?);
    }
    Ok(diagnostics)
}
