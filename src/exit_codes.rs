//! Exit code constants for the filebuildtag CLI.
//!
//! - 0: Success, no diagnostics
//! - 1: User error (bad args, malformed filetags, invalid settings)
//! - 2: I/O failure while reading inputs
//! - 3: Diagnostics reported (analysis-driver convention)

/// Successful execution with nothing to report.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, malformed `filetags`, or invalid settings file.
pub const USER_ERROR: i32 = 1;

/// I/O failure: an input file or directory could not be read.
pub const IO_FAILURE: i32 = 2;

/// At least one file is missing a required build tag.
pub const DIAGNOSTICS_FOUND: i32 = 3;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [SUCCESS, USER_ERROR, IO_FAILURE, DIAGNOSTICS_FOUND];
        for (i, &a) in codes.iter().enumerate() {
            for (j, &b) in codes.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "Exit codes must be distinct");
                }
            }
        }
    }

    #[test]
    fn diagnostics_use_driver_convention() {
        assert_eq!(SUCCESS, 0);
        assert_eq!(DIAGNOSTICS_FOUND, 3);
    }
}
