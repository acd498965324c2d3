//! Error types for filebuildtag.
//!
//! Uses thiserror for derive macros. Only configuration parsing, settings
//! loading and file I/O can fail; tag extraction and rule checks are total.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for filebuildtag operations.
///
/// Each variant maps to a specific process exit code.
#[derive(Error, Debug)]
pub enum FiletagError {
    /// A `filetags` entry does not follow the `pattern:tag` grammar.
    ///
    /// `entry` is the offending entry exactly as it appeared between commas.
    #[error("malformed argument: \"{entry}\", must be of the form \"pattern:tag\"")]
    MalformedEntry { entry: String },

    /// User provided invalid arguments or settings.
    #[error("{0}")]
    UserError(String),

    /// Reading an input file or directory failed.
    #[error("I/O failure: {0}")]
    IoError(String),

    /// The run completed and reported at least one diagnostic.
    #[error("{0} file(s) missing expected build tags")]
    DiagnosticsFound(usize),
}

impl FiletagError {
    /// Create a malformed entry error echoing the raw entry.
    pub fn malformed(entry: impl Into<String>) -> Self {
        FiletagError::MalformedEntry {
            entry: entry.into(),
        }
    }

    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            FiletagError::MalformedEntry { .. } => exit_codes::USER_ERROR,
            FiletagError::UserError(_) => exit_codes::USER_ERROR,
            FiletagError::IoError(_) => exit_codes::IO_FAILURE,
            FiletagError::DiagnosticsFound(_) => exit_codes::DIAGNOSTICS_FOUND,
        }
    }
}

/// Result type alias for filebuildtag operations.
pub type Result<T> = std::result::Result<T, FiletagError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_entry_has_user_error_exit_code() {
        let err = FiletagError::malformed("*.go:a:b");
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn io_error_has_correct_exit_code() {
        let err = FiletagError::IoError("permission denied".to_string());
        assert_eq!(err.exit_code(), exit_codes::IO_FAILURE);
    }

    #[test]
    fn diagnostics_found_has_correct_exit_code() {
        let err = FiletagError::DiagnosticsFound(2);
        assert_eq!(err.exit_code(), exit_codes::DIAGNOSTICS_FOUND);
    }

    #[test]
    fn malformed_entry_message_echoes_entry_verbatim() {
        let err = FiletagError::malformed("  *.go:tag1:extra ");
        assert_eq!(
            err.to_string(),
            "malformed argument: \"  *.go:tag1:extra \", must be of the form \"pattern:tag\""
        );
    }

    #[test]
    fn error_messages_are_descriptive() {
        let err = FiletagError::UserError("bad --format".to_string());
        assert_eq!(err.to_string(), "bad --format");

        let err = FiletagError::IoError("failed to read 'a.go'".to_string());
        assert_eq!(err.to_string(), "I/O failure: failed to read 'a.go'");
    }
}
