//! Header scanner for Go source files.
//!
//! Lexes only as far as the first non-comment token, which is all the
//! build-tag rule looks at. The scanner never fails: anything it does not
//! understand simply ends the header.

use super::{Comment, CommentGroup, ParsedFile, Position};
use tracing::trace;

const BOM: &str = "\u{FEFF}";

/// A Go file reduced to its header: leading comment groups and the position
/// of the first declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoSourceFile {
    name: String,
    comments: Vec<CommentGroup>,
    start: Position,
}

impl GoSourceFile {
    /// Scan the header of `source`.
    ///
    /// `name` is the path or file name the host knows the file by.
    ///
    /// # Example
    ///
    /// ```
    /// use filebuildtag::source::{GoSourceFile, ParsedFile};
    ///
    /// let file = GoSourceFile::parse("foo.go", "//go:build tag1\n\npackage foo\n");
    /// assert_eq!(file.leading_comments().len(), 1);
    /// assert_eq!(file.start_position().line, 3);
    /// ```
    pub fn parse(name: impl Into<String>, source: &str) -> Self {
        let name = name.into();
        let (comments, start) = scan_header(source);
        trace!(file = %name, groups = comments.len(), %start, "scanned header");
        Self {
            name,
            comments,
            start,
        }
    }
}

impl ParsedFile for GoSourceFile {
    fn file_name(&self) -> &str {
        &self.name
    }

    fn leading_comments(&self) -> &[CommentGroup] {
        &self.comments
    }

    fn start_position(&self) -> Position {
        self.start
    }
}

/// Byte cursor tracking 1-based line and column.
struct Cursor<'a> {
    bytes: &'a [u8],
    offset: usize,
    line: usize,
    column: usize,
}

impl<'a> Cursor<'a> {
    fn new(source: &'a str) -> Self {
        let mut cursor = Self {
            bytes: source.as_bytes(),
            offset: 0,
            line: 1,
            column: 1,
        };
        if source.starts_with(BOM) {
            cursor.offset = BOM.len();
            cursor.column += BOM.len();
        }
        cursor
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.offset).copied()
    }

    fn peek_next(&self) -> Option<u8> {
        self.bytes.get(self.offset + 1).copied()
    }

    fn bump(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.offset += 1;
        if b == b'\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(b)
    }

    fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(b' ' | b'\t' | b'\r' | b'\n')) {
            self.bump();
        }
    }
}

/// Collect comment groups up to the first token and return that token's position.
fn scan_header(source: &str) -> (Vec<CommentGroup>, Position) {
    let mut cursor = Cursor::new(source);
    let mut groups: Vec<CommentGroup> = Vec::new();
    let mut current = CommentGroup::default();

    let start = loop {
        cursor.skip_whitespace();

        let comment = match (cursor.peek(), cursor.peek_next()) {
            (Some(b'/'), Some(b'/')) => scan_line_comment(&mut cursor, source),
            (Some(b'/'), Some(b'*')) => match scan_block_comment(&mut cursor, source) {
                Some(comment) => comment,
                // Unterminated: the rest of the input is inside the comment.
                None => break cursor.position(),
            },
            _ => break cursor.position(),
        };

        // A blank line between comments starts a new group.
        if let Some(end) = current.end_line() {
            if comment.position.line > end + 1 {
                groups.push(std::mem::take(&mut current));
            }
        }
        current.comments.push(comment);
    };

    if !current.comments.is_empty() {
        groups.push(current);
    }

    (groups, start)
}

fn scan_line_comment(cursor: &mut Cursor<'_>, source: &str) -> Comment {
    let position = cursor.position();
    let begin = cursor.offset;
    while !matches!(cursor.peek(), None | Some(b'\n')) {
        cursor.bump();
    }
    Comment {
        text: source[begin..cursor.offset].trim_end_matches('\r').to_string(),
        position,
        end_line: position.line,
    }
}

fn scan_block_comment(cursor: &mut Cursor<'_>, source: &str) -> Option<Comment> {
    let position = cursor.position();
    let begin = cursor.offset;
    cursor.bump();
    cursor.bump();
    loop {
        match (cursor.peek(), cursor.peek_next()) {
            (Some(b'*'), Some(b'/')) => {
                let end_line = cursor.line;
                cursor.bump();
                cursor.bump();
                return Some(Comment {
                    text: source[begin..cursor.offset].to_string(),
                    position,
                    end_line,
                });
            }
            (None, _) => return None,
            _ => {
                cursor.bump();
            }
        }
    }
}
