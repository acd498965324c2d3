//! The `filebuildtag` analyzer: rule registration glue.
//!
//! Ties the configured rules to the extractor and the rule engine so a host
//! can hand over one parsed file at a time and collect violations.

use crate::config::Filetags;
use crate::error::Result;
use crate::markers::extract_build_tags;
use crate::rules::{Violation, check};
use crate::source::ParsedFile;
use tracing::{debug, warn};

/// Analyzer name.
pub const NAME: &str = "filebuildtag";

/// Analyzer documentation.
pub const DOC: &str = r#"ensure Go files have the expected "//go:build <tag>" or "// +build <tag>" constraint based on the file name

Bind file names to their expected build tags, such as:
	Files named "foo.go" must have the "foo" build tag
	Files with the suffix "*_integration_test.go" must have the "integration" build tag"#;

/// Name of the option holding the pattern to tag bindings.
pub const FLAG_FILETAGS_NAME: &str = "filetags";

/// Usage text of the `filetags` option.
pub const FLAG_FILETAGS_DOC: &str = r#"Comma-separated list of file names and build tags using the form "pattern:tag". For example:
- Single pattern: "*foo.go:tag1"
- Multiple patterns: "*foo.go:tag1,*foo2.go:tag2""#;

/// Checks files against an immutable set of rules.
///
/// Holds no mutable state; one instance can be shared by any number of
/// threads checking different files.
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    filetags: Filetags,
}

impl Analyzer {
    /// Create an analyzer for already-parsed rules.
    pub fn new(filetags: Filetags) -> Self {
        for rule in filetags.iter().filter(|r| !r.is_valid_glob()) {
            warn!(
                pattern = rule.pattern(),
                tag = rule.tag(),
                "pattern is not a valid glob and will never match"
            );
        }
        Self { filetags }
    }

    /// Create an analyzer from the raw `filetags` option.
    ///
    /// An absent option means no rules. A malformed option is an error and
    /// must abort the run before any file is checked.
    pub fn from_flag(raw: Option<&str>) -> Result<Self> {
        let filetags = match raw {
            Some(raw) => Filetags::parse(raw)?,
            None => Filetags::default(),
        };
        Ok(Self::new(filetags))
    }

    /// The rules this analyzer enforces.
    pub fn filetags(&self) -> &Filetags {
        &self.filetags
    }

    /// Check one file.
    pub fn run<F: ParsedFile + ?Sized>(&self, file: &F) -> Vec<Violation> {
        if self.filetags.is_empty() {
            return Vec::new();
        }

        let tags = extract_build_tags(file);
        let violations = check(file.file_name(), &tags, &self.filetags, file.start_position());
        debug!(
            file = file.file_name(),
            violations = violations.len(),
            "checked file"
        );
        violations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FiletagError;
    use crate::source::GoSourceFile;

    #[test]
    fn absent_flag_means_no_rules() {
        let analyzer = Analyzer::from_flag(None).unwrap();
        assert!(analyzer.filetags().is_empty());

        let file = GoSourceFile::parse("foo.go", "package foo\n");
        assert!(analyzer.run(&file).is_empty());
    }

    #[test]
    fn malformed_flag_is_rejected() {
        let err = Analyzer::from_flag(Some("*.go:tag1:extra")).unwrap_err();
        assert!(matches!(err, FiletagError::MalformedEntry { .. }));
        assert!(err.to_string().contains("*.go:tag1:extra"));
    }

    #[test]
    fn reports_missing_tag_at_package_clause() {
        let analyzer = Analyzer::from_flag(Some("*foo.go:tag1")).unwrap();
        let file = GoSourceFile::parse("pkg/foo.go", "// Copyright.\n\npackage foo\n");

        let violations = analyzer.run(&file);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].message, "missing expected build tag: \"tag1\"");
        assert_eq!(violations[0].position.line, 3);
    }

    #[test]
    fn accepts_tag_from_either_syntax() {
        let analyzer = Analyzer::from_flag(Some("*_integration_test.go:integration")).unwrap();

        let go_build = GoSourceFile::parse(
            "api_integration_test.go",
            "//go:build integration\n\npackage api\n",
        );
        let plus_build = GoSourceFile::parse(
            "api_integration_test.go",
            "// +build integration\n\npackage api\n",
        );

        assert!(analyzer.run(&go_build).is_empty());
        assert!(analyzer.run(&plus_build).is_empty());
    }

    #[test]
    fn misplaced_constraint_does_not_count() {
        let analyzer = Analyzer::from_flag(Some("*_integration_test.go:integration")).unwrap();
        let file = GoSourceFile::parse(
            "api_integration_test.go",
            "// +build integration\npackage api\n",
        );
        assert_eq!(analyzer.run(&file).len(), 1);
    }

    #[test]
    fn analyzer_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Analyzer>();
    }
}
