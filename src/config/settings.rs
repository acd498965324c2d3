//! Optional YAML settings file for the command-line front end.

use super::filetags::Filetags;
use crate::error::{FiletagError, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use serde::Deserialize;
use std::path::Path;

/// The `filetags` value as written in YAML.
///
/// Either the option string itself or a list of `pattern:tag` entries.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum FiletagsSetting {
    Joined(String),
    List(Vec<String>),
}

impl Default for FiletagsSetting {
    fn default() -> Self {
        FiletagsSetting::Joined(String::new())
    }
}

impl FiletagsSetting {
    /// The value in option-string form.
    pub fn as_option(&self) -> String {
        match self {
            FiletagsSetting::Joined(raw) => raw.clone(),
            FiletagsSetting::List(entries) => entries.join(","),
        }
    }
}

/// Settings loaded from a YAML file such as `.filebuildtag.yaml`.
///
/// Unknown fields are ignored for forward compatibility.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Pattern to tag bindings, same grammar as `--filetags`.
    pub filetags: FiletagsSetting,

    /// Globs (relative to each walked directory, `/` separators) whose
    /// matches are skipped while walking.
    pub exclude: Vec<String>,
}

impl Settings {
    /// Load settings from a YAML file.
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - Successfully loaded and validated settings
    /// * `Err(FiletagError::UserError)` - Read error, parse error or invalid glob
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            FiletagError::UserError(format!(
                "failed to read settings file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse settings from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // serde_yaml maps an empty document to unit, not to an empty mapping
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let settings: Settings = serde_yaml::from_str(yaml).map_err(|e| {
            FiletagError::UserError(format!("failed to parse settings YAML: {}", e))
        })?;

        settings.validate()?;
        Ok(settings)
    }

    /// Validate settings values.
    ///
    /// Validation rules:
    /// - every `exclude` entry must be a valid glob
    /// - `filetags` must follow the `pattern:tag` grammar
    pub fn validate(&self) -> Result<()> {
        self.exclude_set()?;
        self.parse_filetags(None)?;
        Ok(())
    }

    /// Build the effective rules, letting a command-line value win over the file.
    pub fn parse_filetags(&self, override_raw: Option<&str>) -> Result<Filetags> {
        match override_raw {
            Some(raw) => Filetags::parse(raw),
            None => Filetags::parse(&self.filetags.as_option()),
        }
    }

    /// Compile `exclude` into a glob set.
    pub fn exclude_set(&self) -> Result<GlobSet> {
        let mut builder = GlobSetBuilder::new();
        for pattern in &self.exclude {
            let glob = Glob::new(pattern).map_err(|e| {
                FiletagError::UserError(format!(
                    "invalid exclude pattern '{}': {}\n\
                     Fix: edit the settings file and correct or remove this pattern.",
                    pattern, e
                ))
            })?;
            builder.add(glob);
        }
        builder
            .build()
            .map_err(|e| FiletagError::UserError(format!("failed to build exclude set: {}", e)))
    }
}
