//! Parsing of the `filetags` option into pattern/tag rules.

use crate::error::{FiletagError, Result};
use globset::{GlobBuilder, GlobMatcher};

/// One configured rule: files whose base name matches `pattern` must
/// declare the build tag `tag`.
#[derive(Clone)]
pub struct TagRule {
    pattern: String,
    tag: String,
    /// `None` when the pattern is not a valid glob; such a rule never matches.
    matcher: Option<GlobMatcher>,
}

impl std::fmt::Debug for TagRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TagRule")
            .field("pattern", &self.pattern)
            .field("tag", &self.tag)
            .field("valid_glob", &self.matcher.is_some())
            .finish()
    }
}

impl TagRule {
    /// Create a rule, compiling its glob.
    ///
    /// Glob compile errors are swallowed: the rule is kept but never matches.
    pub fn new(pattern: impl Into<String>, tag: impl Into<String>) -> Self {
        let pattern = pattern.into();
        let matcher = compile_glob(&pattern);
        Self {
            pattern,
            tag: tag.into(),
            matcher,
        }
    }

    /// The glob pattern as written in the configuration (trimmed).
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// The build tag files matching the pattern must declare.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Whether the pattern compiled to a usable glob.
    pub fn is_valid_glob(&self) -> bool {
        self.matcher.is_some()
    }

    /// Check whether a base file name matches this rule's pattern.
    pub fn matches(&self, base_name: &str) -> bool {
        self.matcher
            .as_ref()
            .is_some_and(|m| m.is_match(base_name))
    }
}

/// Compile a shell glob with file-name semantics: `*` and `?` never cross a
/// path separator and `\` escapes the next character. Braces are literal.
fn compile_glob(pattern: &str) -> Option<GlobMatcher> {
    GlobBuilder::new(&escape_braces(pattern))
        .literal_separator(true)
        .backslash_escape(true)
        .build()
        .ok()
        .map(|glob| glob.compile_matcher())
}

/// Escape `{` and `}` outside character classes so globset does not read
/// them as alternation.
fn escape_braces(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len());
    let mut escaped = false;
    let mut in_class = false;

    for c in pattern.chars() {
        if escaped {
            escaped = false;
        } else {
            match c {
                '\\' => escaped = true,
                '[' if !in_class => in_class = true,
                ']' if in_class => in_class = false,
                '{' | '}' if !in_class => out.push('\\'),
                _ => {}
            }
        }
        out.push(c);
    }

    out
}

/// The validated `pattern -> tag` mapping.
///
/// Rules keep the order in which their pattern first appeared. A pattern
/// repeated later in the option overwrites the earlier tag in place.
#[derive(Debug, Clone, Default)]
pub struct Filetags {
    rules: Vec<TagRule>,
}

impl Filetags {
    /// Parse a comma-separated `pattern:tag` list.
    ///
    /// Empty entries (after trimming) are skipped, so trailing commas and an
    /// empty string are accepted.
    ///
    /// # Returns
    ///
    /// * `Ok(Filetags)` - One rule per distinct pattern
    /// * `Err(FiletagError::MalformedEntry)` - An entry has zero or several
    ///   colons, or an empty side after trimming
    ///
    /// # Example
    ///
    /// ```
    /// use filebuildtag::config::Filetags;
    ///
    /// let filetags = Filetags::parse("*foo.go:tag1, *_integration_test.go:integration,").unwrap();
    /// assert_eq!(filetags.len(), 2);
    /// assert_eq!(filetags.get("*foo.go"), Some("tag1"));
    /// ```
    pub fn parse(raw: &str) -> Result<Self> {
        let mut filetags = Self::default();

        for entry in raw.split(',') {
            let trimmed = entry.trim();
            if trimmed.is_empty() {
                continue;
            }

            let mut parts = trimmed.split(':');
            let (pattern, tag) = match (parts.next(), parts.next(), parts.next()) {
                (Some(pattern), Some(tag), None) => (pattern.trim(), tag.trim()),
                _ => return Err(FiletagError::malformed(entry)),
            };
            if pattern.is_empty() || tag.is_empty() {
                return Err(FiletagError::malformed(entry));
            }

            filetags.insert(pattern, tag);
        }

        Ok(filetags)
    }

    /// Insert a rule, replacing the tag of an existing rule with the same pattern.
    fn insert(&mut self, pattern: &str, tag: &str) {
        match self.rules.iter_mut().find(|r| r.pattern == pattern) {
            Some(existing) => existing.tag = tag.to_string(),
            None => self.rules.push(TagRule::new(pattern, tag)),
        }
    }

    /// Number of distinct patterns.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether no rules are configured.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Iterate over rules in configuration order.
    pub fn iter(&self) -> std::slice::Iter<'_, TagRule> {
        self.rules.iter()
    }

    /// Look up the required tag for an exact pattern string.
    pub fn get(&self, pattern: &str) -> Option<&str> {
        self.rules
            .iter()
            .find(|r| r.pattern == pattern)
            .map(|r| r.tag.as_str())
    }
}

impl<'a> IntoIterator for &'a Filetags {
    type Item = &'a TagRule;
    type IntoIter = std::slice::Iter<'a, TagRule>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
