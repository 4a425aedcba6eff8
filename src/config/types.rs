//! Configuration type definitions

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::Charset;
use crate::error::TreeResult;

use super::loader::{self, ConfigWarning};

/// Tree construction configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct TreeConfig {
    /// Exclude patterns applied to every walk
    #[serde(default)]
    pub exclude: Vec<String>,
}

/// Connector style setting; `auto` picks based on the terminal
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum CharsetMode {
    #[default]
    Auto,
    Unicode,
    Ascii,
}

impl CharsetMode {
    /// Resolve to a concrete charset
    pub fn resolve(self, supports_unicode: bool) -> Charset {
        match self {
            CharsetMode::Unicode => Charset::Unicode,
            CharsetMode::Ascii => Charset::Ascii,
            CharsetMode::Auto if supports_unicode => Charset::Unicode,
            CharsetMode::Auto => Charset::Ascii,
        }
    }

    /// Parse a setting from an environment value
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "auto" => Some(CharsetMode::Auto),
            "unicode" | "utf8" | "utf-8" => Some(CharsetMode::Unicode),
            "ascii" => Some(CharsetMode::Ascii),
            _ => None,
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct OutputConfig {
    #[serde(default)]
    pub charset: CharsetMode,
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub tree: TreeConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> TreeResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> TreeResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from project config, user config, or defaults (with env overrides)
    pub fn load_layered(root: &Path) -> TreeResult<(Self, Vec<ConfigWarning>)> {
        loader::load_layered(root)
    }

    /// Apply environment variable overrides (FOLDERTREE_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }
}
