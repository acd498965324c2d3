//! Configuration for filebuildtag.
//!
//! Two layers:
//! - `Filetags`: the `pattern:tag` option string parsed into validated rules
//! - `Settings`: an optional YAML file carrying the same option plus
//!   directory exclusions for the command-line front end

mod filetags;
mod settings;


// Re-export public API
pub use filetags::{Filetags, TagRule};
pub use settings::{FiletagsSetting, Settings};
