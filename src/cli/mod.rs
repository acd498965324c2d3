//! CLI argument parsing for filebuildtag.
//!
//! Uses clap derive macros for declarative argument definitions. The check
//! itself lives in the `commands` module.

use clap::{Parser, ValueEnum};
use filebuildtag::analyzer::{DOC, FLAG_FILETAGS_DOC};
use std::path::PathBuf;

/// Check that Go files carry the build tags their file names require.
#[derive(Parser, Debug)]
#[command(name = "filebuildtag")]
#[command(author, version, about, long_about = DOC)]
pub struct Cli {
    /// Files or directories to check (default: current directory).
    ///
    /// Directories are walked recursively for `.go` files, skipping
    /// `vendor`, `testdata` and names starting with `.` or `_`.
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    #[arg(long = "filetags", value_name = "SPEC", help = FLAG_FILETAGS_DOC)]
    pub filetags: Option<String>,

    /// YAML settings file providing `filetags` and `exclude`.
    ///
    /// `--filetags` wins over the file's `filetags` value.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output format for diagnostics.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Log walk and check decisions to stderr.
    #[arg(short, long)]
    pub verbose: bool,
}

/// How diagnostics are printed.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// `path:line:column: message`, one per line.
    Text,
    /// A JSON array of diagnostic objects.
    Json,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
