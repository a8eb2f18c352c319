//! Engine options with TOML preset support.
//!
//! Pool sizes, seeding and pacing are consolidated here. Options serialize
//! to/from TOML for presets on disk and parse from JSON when a web host
//! passes them in from script.

mod engine;
mod pools;

use std::path::Path;

pub use engine::EngineOptions;
pub use pools::PoolOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::BackdropError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[pools]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Entity pool sizes.
    pub pools: PoolOptions,
    /// Start-up theme, seeding and pacing.
    pub engine: EngineOptions,
}

impl Options {
    /// Generate JSON Schema describing the exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// [`BackdropError::Io`] when the file cannot be read and
    /// [`BackdropError::OptionsParse`] when it is not valid TOML.
    pub fn load(path: &Path) -> Result<Self, BackdropError> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| BackdropError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// [`BackdropError::Io`] when the file or its parent directory cannot be
    /// written.
    pub fn save(&self, path: &Path) -> Result<(), BackdropError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| BackdropError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content).map_err(BackdropError::Io)
    }

    /// Parse options from a JSON string. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// [`BackdropError::OptionsParse`] on malformed JSON or mistyped fields.
    pub fn from_json(json: &str) -> Result<Self, BackdropError> {
        serde_json::from_str(json)
            .map_err(|e| BackdropError::OptionsParse(e.to_string()))
    }
}
