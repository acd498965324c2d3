//! Rendering of diagnostics for the command line.

use crate::error::{FiletagError, Result};
use crate::scan::Diagnostic;

/// Render one `path:line:column: message` line per diagnostic.
///
/// ```text
/// api/db_integration_test.go:3:1: missing expected build tag: "integration"
/// ```
pub fn render_text(diagnostics: &[Diagnostic]) -> String {
    let mut out = String::new();
    for d in diagnostics {
        out.push_str(&format!("{}:{}:{}: {}\n", d.file, d.line, d.column, d.message));
    }
    out
}

/// Render diagnostics as a pretty-printed JSON array.
pub fn render_json(diagnostics: &[Diagnostic]) -> Result<String> {
    serde_json::to_string_pretty(diagnostics)
        .map_err(|e| FiletagError::UserError(format!("failed to serialize diagnostics: {}", e)))
}
