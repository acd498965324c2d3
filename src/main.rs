//! filebuildtag: check that Go files carry the build tags their names require.
//!
//! This is the main entry point for the `filebuildtag` CLI. It parses
//! arguments, installs logging, runs the check and maps the outcome to an
//! exit code.

mod cli;
mod commands;

use cli::Cli;
use filebuildtag::exit_codes;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    init_logging(cli.verbose);

    match commands::dispatch(cli) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            ExitCode::from(err.exit_code() as u8)
        }
    }
}

/// Log to stderr so stdout carries only the report.
///
/// `RUST_LOG` controls the filter; `--verbose` forces debug output.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("filebuildtag=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
