//! Tree Use Case
//!
//! Orchestrates one build → prune → render pass.
//!
//! This module handles:
//! - Resolving the root against the working directory
//! - Validating selected folders (exist, are directories, lie under the root)
//! - Compiling exclude patterns
//! - Building, optionally pruning, and rendering the tree

mod options;
mod result;
mod selection;
mod use_case;

pub use options::TreeOptions;
pub use result::RenderedTree;
pub use selection::validate_selections;
pub use use_case::TreeUseCase;
