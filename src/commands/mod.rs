//! Command implementations for filebuildtag.
//!
//! There is a single command, the check; `dispatch` is the entry point
//! `main` calls with the parsed arguments.

mod check;

use crate::cli::Cli;
use filebuildtag::error::Result;

/// Dispatch the parsed command line to its implementation.
pub fn dispatch(cli: Cli) -> Result<()> {
    check::cmd_check(cli)
}
