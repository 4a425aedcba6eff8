//! Domain Entities
//!
//! - `TreeNode` - One entry of a directory hierarchy (or a placeholder for omitted siblings)

mod tree_node;

pub use tree_node::{NodeKind, TreeNode, TreeStats, PLACEHOLDER_NAME};
