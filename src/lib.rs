//! foldertree - directory trees, pruned to what matters
//!
//! Builds a tree from a directory (skipping excluded entries), optionally
//! prunes it down to a set of selected folders, and renders it as a
//! connector-and-indentation diagram.
//!
//! ```no_run
//! use foldertree::{LocalFs, TreeOptions, TreeUseCase};
//!
//! let options = TreeOptions::new("my-project")
//!     .with_selected(vec!["my-project/src".into()])
//!     .with_exclude(vec!["^target$".to_string()]);
//! let result = TreeUseCase::new(LocalFs::new()).execute(&options)?;
//! print!("{}", result.rendered);
//! # Ok::<(), foldertree::TreeError>(())
//! ```

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{validate_selections, RenderedTree, TreeOptions, TreeUseCase};
pub use config::{CharsetMode, Config, ConfigWarning};
pub use domain::entities::{NodeKind, TreeNode, TreeStats, PLACEHOLDER_NAME};
pub use domain::services::{
    build_tree, lowest_common_ancestor, prune, prune_at, render, render_with, TreeBuilder,
};
pub use domain::value_objects::{Charset, ExcludePatterns};
pub use error::{TreeError, TreeResult};
pub use infrastructure::{write_atomic, LocalFs};
