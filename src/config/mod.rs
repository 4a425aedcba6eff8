//! Configuration module for foldertree
//!
//! Configuration hierarchy (highest priority first):
//! 1. CLI flags
//! 2. Environment variables (FOLDERTREE_*)
//! 3. Project config (<root>/.foldertree.toml)
//! 4. User config (~/.config/foldertree/config.toml)
//! 5. Built-in defaults

mod loader;
mod types;

pub use loader::{
    parse_with_warnings, user_config_path, ConfigWarning, CONFIG_TEMPLATE, PROJECT_CONFIG_FILE,
};
pub use types::{CharsetMode, Config, OutputConfig, TreeConfig};
