//! Core types for rule check results.

use crate::source::Position;
use serde::Serialize;

/// Message reported when a matched file lacks its required tag.
pub fn missing_tag_message(tag: &str) -> String {
    format!("missing expected build tag: \"{}\"", tag)
}

/// A file matched `pattern` but does not declare `tag`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// Where the diagnostic is anchored (the file's start position).
    pub position: Position,
    /// The glob pattern that matched the file name.
    pub pattern: String,
    /// The build tag the file was required to declare.
    pub tag: String,
    /// Human-readable diagnostic message.
    pub message: String,
}

impl Violation {
    /// Create a missing-tag violation.
    pub fn missing_tag(
        position: Position,
        pattern: impl Into<String>,
        tag: impl Into<String>,
    ) -> Self {
        let tag = tag.into();
        Self {
            position,
            pattern: pattern.into(),
            message: missing_tag_message(&tag),
            tag,
        }
    }
}
