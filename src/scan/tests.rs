//! Tests for file discovery and checking.

use super::walk::is_skipped_dir;
use super::{Diagnostic, check_file, check_paths, collect_go_files};
use crate::analyzer::Analyzer;
use crate::config::Settings;
use crate::error::FiletagError;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

// =========================================================================
// Helper functions
// =========================================================================

fn write(root: &Path, relative: &str, content: &str) -> PathBuf {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, content).unwrap();
    path
}

/// File names relative to `root`, with `/` separators.
fn relative_names(root: &Path, files: &[PathBuf]) -> Vec<String> {
    files
        .iter()
        .map(|f| {
            f.strip_prefix(root)
                .unwrap()
                .to_string_lossy()
                .replace('\\', "/")
        })
        .collect()
}

fn create_project() -> TempDir {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    write(root, "main.go", "package main\n");
    write(root, "api/api.go", "package api\n");
    write(
        root,
        "api/api_integration_test.go",
        "//go:build integration\n\npackage api\n",
    );
    write(root, "api/db_integration_test.go", "package api\n");
    write(root, "api/README.md", "# api\n");
    write(root, "vendor/dep/dep.go", "package dep\n");
    write(root, "testdata/fixture.go", "package fixture\n");
    write(root, ".git/hooks.go", "package hooks\n");
    write(root, "_scratch/tmp.go", "package tmp\n");
    write(root, "gen/models.go", "package gen\n");
    dir
}

// =========================================================================
// Discovery
// =========================================================================

#[test]
fn test_collect_walks_directories_and_skips_go_conventions() {
    let dir = create_project();
    let files = collect_go_files(&[dir.path().to_path_buf()], &Settings::default()).unwrap();

    assert_eq!(
        relative_names(dir.path(), &files),
        vec![
            "api/api.go",
            "api/api_integration_test.go",
            "api/db_integration_test.go",
            "gen/models.go",
            "main.go",
        ]
    );
}

#[test]
fn test_collect_honors_exclude_globs() {
    let dir = create_project();
    let settings = Settings::from_yaml("exclude: [\"gen/**\", \"main.go\"]").unwrap();
    let files = collect_go_files(&[dir.path().to_path_buf()], &settings).unwrap();

    assert_eq!(
        relative_names(dir.path(), &files),
        vec![
            "api/api.go",
            "api/api_integration_test.go",
            "api/db_integration_test.go",
        ]
    );
}

#[test]
fn test_collect_keeps_explicit_files() {
    let dir = create_project();
    let readme = dir.path().join("api/README.md");
    let vendored = dir.path().join("vendor/dep/dep.go");

    let files = collect_go_files(&[vendored.clone(), readme.clone()], &Settings::default()).unwrap();
    assert_eq!(files, vec![readme, vendored]);
}

#[test]
fn test_collect_deduplicates_overlapping_paths() {
    let dir = create_project();
    let api = dir.path().join("api");
    let files = collect_go_files(&[api.clone(), api.join("api.go")], &Settings::default()).unwrap();
    assert_eq!(files.len(), 3);
}

#[test]
fn test_collect_missing_path_is_io_error() {
    let dir = TempDir::new().unwrap();
    let err = collect_go_files(&[dir.path().join("nope")], &Settings::default()).unwrap_err();
    assert!(matches!(err, FiletagError::IoError(_)));
}

#[cfg(unix)]
#[test]
fn test_collect_does_not_follow_directory_symlinks() {
    let dir = create_project();
    let outside = TempDir::new().unwrap();
    write(outside.path(), "linked.go", "package linked\n");
    std::os::unix::fs::symlink(outside.path(), dir.path().join("link")).unwrap();

    let files = collect_go_files(&[dir.path().to_path_buf()], &Settings::default()).unwrap();
    assert!(files.iter().all(|f| !f.ends_with("linked.go")));
    assert_eq!(files.len(), 5);
}

#[test]
fn test_collect_prunes_excluded_directories() {
    let dir = create_project();
    let settings = Settings::from_yaml("exclude: [\"api\"]").unwrap();
    let files = collect_go_files(&[dir.path().to_path_buf()], &settings).unwrap();

    assert_eq!(relative_names(dir.path(), &files), vec!["gen/models.go", "main.go"]);
}

#[test]
fn test_skipped_dir_names() {
    assert!(is_skipped_dir("vendor"));
    assert!(is_skipped_dir("testdata"));
    assert!(is_skipped_dir(".git"));
    assert!(is_skipped_dir("_build"));
    assert!(!is_skipped_dir("internal"));
}

// =========================================================================
// Checking
// =========================================================================

#[test]
fn test_check_paths_reports_missing_tags() {
    let dir = create_project();
    let analyzer = Analyzer::from_flag(Some("*_integration_test.go:integration")).unwrap();

    let diagnostics =
        check_paths(&[dir.path().to_path_buf()], &analyzer, &Settings::default()).unwrap();

    assert_eq!(diagnostics.len(), 1);
    assert!(diagnostics[0].file.ends_with("db_integration_test.go"));
    assert_eq!(diagnostics[0].line, 1);
    assert_eq!(diagnostics[0].column, 1);
    assert_eq!(diagnostics[0].tag, "integration");
    assert_eq!(
        diagnostics[0].message,
        "missing expected build tag: \"integration\""
    );
}

#[test]
fn test_check_paths_with_empty_config_reports_nothing() {
    let dir = create_project();
    let analyzer = Analyzer::default();
    let diagnostics =
        check_paths(&[dir.path().to_path_buf()], &analyzer, &Settings::default()).unwrap();
    assert!(diagnostics.is_empty());
}

#[test]
fn test_check_file_tolerates_invalid_utf8() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("foo.go");
    fs::write(&path, b"// \xff\xfe\n\npackage foo\n").unwrap();

    let analyzer = Analyzer::from_flag(Some("foo.go:tag1")).unwrap();
    let diagnostics = check_file(&path, &analyzer).unwrap();

    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].line, 3);
}

#[test]
fn test_diagnostic_serializes_flat() {
    let diagnostic = Diagnostic {
        file: "foo.go".to_string(),
        line: 1,
        column: 1,
        pattern: "*foo.go".to_string(),
        tag: "tag1".to_string(),
        message: "missing expected build tag: \"tag1\"".to_string(),
    };
    let value = serde_json::to_value(&diagnostic).unwrap();
    assert_eq!(value["file"], "foo.go");
    assert_eq!(value["line"], 1);
    assert_eq!(value["tag"], "tag1");
}
