//! File name to build tag rule checks.
//!
//! Each configured rule is applied on its own: a file whose base name matches
//! the rule's glob must declare the rule's tag, otherwise one violation is
//! reported at the file's start position.

mod engine;
mod types;


// Re-export public API
pub use engine::{base_name, check};
pub use types::{Violation, missing_tag_message};
