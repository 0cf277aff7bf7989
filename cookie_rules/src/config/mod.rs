//! Session configuration, loaded from TOML.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Result, RulesError};

/// How elapsed time is measured when computing a generator's output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ElapsedRounding {
    /// Full-precision elapsed seconds; only the aggregate is rounded.
    #[default]
    Precise,
    /// Elapsed time rounded to whole seconds, each instance's output rounded
    /// to cents, then the aggregate rounded again.
    WholeSeconds,
}

/// Tunables for a [`crate::Session`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct SessionConfig {
    pub elapsed_rounding: ElapsedRounding,
}

impl SessionConfig {
    /// Parse a config from TOML text. Missing keys take their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Read and parse a config file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| RulesError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }
}
