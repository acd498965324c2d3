//! Build tag extraction.
//!
//! Reads the build constraint lines in a file's header and flattens every tag
//! they mention into one set. Only presence matters here: `linux,amd64`,
//! `linux amd64` and `linux && amd64` all yield `{amd64, linux}`. A tag under
//! negation keeps its `!` so it never satisfies a requirement for the bare tag.
//!
//! Extraction never fails. Lines that are not well-formed constraints, or
//! that sit where the Go toolchain would ignore them, contribute nothing.

mod constraint;
mod extract;


// Re-export public API
pub use constraint::parse_constraint_line;
pub use extract::{TagSet, extract_build_tags};
