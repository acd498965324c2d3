//! filebuildtag: lint Go files for the build tags their file names require.
//!
//! Files are bound to required tags through glob patterns, e.g. every
//! `*_integration_test.go` file must declare the `integration` tag:
//!
//! ```
//! use filebuildtag::Analyzer;
//! use filebuildtag::source::GoSourceFile;
//!
//! let analyzer = Analyzer::from_flag(Some("*_integration_test.go:integration")).unwrap();
//! let file = GoSourceFile::parse("api_integration_test.go", "package api\n");
//!
//! let violations = analyzer.run(&file);
//! assert_eq!(violations[0].message, "missing expected build tag: \"integration\"");
//! ```

pub mod analyzer;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod markers;
pub mod report;
pub mod rules;
pub mod scan;
pub mod source;

pub use analyzer::Analyzer;
pub use error::{FiletagError, Result};
