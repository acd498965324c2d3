//! Parsed source file abstraction.
//!
//! The lint rule only needs three things from a parser front end: the file's
//! name, the comment groups that precede its first declaration, and the
//! position diagnostics are anchored at. `ParsedFile` captures exactly that.
//! `GoSourceFile` is the bundled implementation, built by scanning the header
//! of a Go file.

mod scanner;


pub use scanner::GoSourceFile;

use serde::Serialize;
use std::fmt;

/// A 1-based line and byte column in a source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self { line: 1, column: 1 }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A single `//` or `/* */` comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    /// Comment text including its `//` or `/*` opener (and `*/` closer).
    pub text: String,
    /// Position of the first character of the opener.
    pub position: Position,
    /// Line holding the last character of the comment.
    pub end_line: usize,
}

impl Comment {
    /// Whether this is a `//` line comment.
    pub fn is_line_comment(&self) -> bool {
        self.text.starts_with("//")
    }
}

/// Comments with no blank line between them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentGroup {
    pub comments: Vec<Comment>,
}

impl CommentGroup {
    /// Line of the group's first comment.
    pub fn start_line(&self) -> Option<usize> {
        self.comments.first().map(|c| c.position.line)
    }

    /// Line of the group's last comment end.
    pub fn end_line(&self) -> Option<usize> {
        self.comments.last().map(|c| c.end_line)
    }
}

/// The capabilities the build-tag rule needs from a parsed file.
pub trait ParsedFile {
    /// File name as supplied by the host; directory components may be present.
    fn file_name(&self) -> &str;

    /// Comment groups that appear before the file's first declaration.
    fn leading_comments(&self) -> &[CommentGroup];

    /// Position of the file's first declaration (the `package` clause in Go).
    fn start_position(&self) -> Position;
}
