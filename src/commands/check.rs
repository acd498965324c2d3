//! Implementation of the check run.
//!
//! # Steps
//!
//! 1. Load the settings file, if any
//! 2. Build the rules (`--filetags` wins over the file); a malformed
//!    entry aborts here, before any file is read
//! 3. Collect and check Go files
//! 4. Print the report
//!
//! # Exit Codes
//!
//! - 0: No diagnostics
//! - 1: Malformed `filetags` or invalid settings
//! - 2: An input could not be read
//! - 3: At least one file is missing a required tag

use crate::cli::{Cli, OutputFormat};
use filebuildtag::analyzer::Analyzer;
use filebuildtag::config::Settings;
use filebuildtag::error::{FiletagError, Result};
use filebuildtag::report::{render_json, render_text};
use filebuildtag::scan::{Diagnostic, check_paths};
use std::collections::BTreeSet;
use std::path::PathBuf;
use tracing::info;

/// Execute the check and print diagnostics to stdout.
pub fn cmd_check(cli: Cli) -> Result<()> {
    let diagnostics = run_check(&cli)?;

    match cli.format {
        OutputFormat::Text => print!("{}", render_text(&diagnostics)),
        OutputFormat::Json => println!("{}", render_json(&diagnostics)?),
    }

    outcome(&diagnostics)
}

/// Everything but printing: load, check, collect.
fn run_check(cli: &Cli) -> Result<Vec<Diagnostic>> {
    let settings = match &cli.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };

    let filetags = settings.parse_filetags(cli.filetags.as_deref())?;
    info!(rules = filetags.len(), "loaded filetags");
    let analyzer = Analyzer::new(filetags);

    let paths = if cli.paths.is_empty() {
        vec![PathBuf::from(".")]
    } else {
        cli.paths.clone()
    };

    check_paths(&paths, &analyzer, &settings)
}

/// Map diagnostics to the run's result.
fn outcome(diagnostics: &[Diagnostic]) -> Result<()> {
    if diagnostics.is_empty() {
        return Ok(());
    }
    let files: BTreeSet<&str> = diagnostics.iter().map(|d| d.file.as_str()).collect();
    Err(FiletagError::DiagnosticsFound(files.len()))
}
