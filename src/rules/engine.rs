//! Rule evaluation for one file.

use super::types::Violation;
use crate::config::Filetags;
use crate::markers::TagSet;
use crate::source::Position;
use std::path::Path;

/// Strip directory components, keeping only the file's base name.
pub fn base_name(file_name: &str) -> &str {
    Path::new(file_name)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(file_name)
}

/// Check one file's declared tags against every configured rule.
///
/// For each rule whose glob matches the base name of `file_name` and whose
/// tag is absent from `markers`, one violation anchored at `start` is
/// produced. Rules are independent; there is no short-circuiting and no
/// deduplication across rules. Output follows the rule order of `filetags`.
///
/// # Example
///
/// ```
/// use filebuildtag::config::Filetags;
/// use filebuildtag::markers::TagSet;
/// use filebuildtag::rules::check;
/// use filebuildtag::source::Position;
///
/// let filetags = Filetags::parse("*foo.go:tag1").unwrap();
/// let violations = check("pkg/foo.go", &TagSet::new(), &filetags, Position::default());
///
/// assert_eq!(violations.len(), 1);
/// assert_eq!(violations[0].message, "missing expected build tag: \"tag1\"");
/// ```
pub fn check(
    file_name: &str,
    markers: &TagSet,
    filetags: &Filetags,
    start: Position,
) -> Vec<Violation> {
    let name = base_name(file_name);

    filetags
        .iter()
        .filter(|rule| rule.matches(name) && !markers.contains(rule.tag()))
        .map(|rule| Violation::missing_tag(start, rule.pattern(), rule.tag()))
        .collect()
}
