//! Placement rules for build constraint comments.

use super::constraint::parse_constraint_line;
use crate::source::ParsedFile;
use std::collections::BTreeSet;
use tracing::trace;

/// Distinct build tags declared by one file.
pub type TagSet = BTreeSet<String>;

/// Extract the build tags declared in a file's header.
///
/// Constraint lines count only while they are in the header region:
/// - a comment group adjoining the first declaration (no blank line in
///   between) is package documentation, so it and everything after it is
///   ignored
/// - a group that opens with a `/* */` comment ends the region
///
/// # Example
///
/// ```
/// use filebuildtag::markers::extract_build_tags;
/// use filebuildtag::source::GoSourceFile;
///
/// let file = GoSourceFile::parse("foo.go", "// +build linux,amd64 darwin\n\npackage foo\n");
/// let tags: Vec<_> = extract_build_tags(&file).into_iter().collect();
/// assert_eq!(tags, ["amd64", "darwin", "linux"]);
/// ```
pub fn extract_build_tags<F: ParsedFile + ?Sized>(file: &F) -> TagSet {
    let start_line = file.start_position().line;
    let mut tags = TagSet::new();

    for group in file.leading_comments() {
        let (Some(first), Some(end_line)) = (group.comments.first(), group.end_line()) else {
            continue;
        };
        if end_line + 1 >= start_line || !first.is_line_comment() {
            break;
        }

        for comment in &group.comments {
            if let Some(line_tags) = parse_constraint_line(&comment.text) {
                tags.extend(line_tags);
            }
        }
    }

    trace!(file = file.file_name(), ?tags, "extracted build tags");
    tags
}
