use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Normalization and empty-query behavior, read at the start of every search.
///
/// Persisted as `search.toml`. Missing keys fall back to `false`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Lowercase both query and tags before comparison.
    pub ignore_case: bool,
    /// Trim leading/trailing whitespace from both query and tags.
    ///
    /// Interior whitespace is kept: `"he llo"` stays `"he llo"`.
    pub ignore_spaces: bool,
    /// An empty (normalized) query yields every item instead of none.
    pub show_all_on_empty_query: bool,
}

impl SearchConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ignore_case(mut self, ignore_case: bool) -> Self {
        self.ignore_case = ignore_case;
        self
    }

    pub fn with_ignore_spaces(mut self, ignore_spaces: bool) -> Self {
        self.ignore_spaces = ignore_spaces;
        self
    }

    pub fn with_show_all_on_empty_query(mut self, show_all: bool) -> Self {
        self.show_all_on_empty_query = show_all;
        self
    }

    /// Returns the config file path within the given directory.
    pub fn path(dir: &Path) -> PathBuf {
        dir.join("search.toml")
    }

    /// Loads config from a TOML file. Returns default config if file doesn't exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Saves config to a TOML file.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

/// Errors that can occur when loading or saving config.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}
