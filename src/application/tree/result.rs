//! Tree result types

use std::path::PathBuf;

use serde::Serialize;

use crate::domain::entities::{TreeNode, TreeStats};
use crate::domain::value_objects::path::{serialize_lossy, serialize_lossy_all};

/// Output of one tree invocation
#[derive(Debug, Clone, Serialize)]
pub struct RenderedTree {
    /// Normalized absolute root that was walked
    #[serde(serialize_with = "serialize_lossy")]
    pub root: PathBuf,
    /// Normalized selections actually used (duplicates removed)
    #[serde(serialize_with = "serialize_lossy_all")]
    pub selected: Vec<PathBuf>,
    /// The tree that was rendered (pruned when selections were given)
    pub tree: TreeNode,
    /// Node counts of `tree`
    pub stats: TreeStats,
    /// Text diagram
    pub rendered: String,
}

impl RenderedTree {
    pub fn is_pruned(&self) -> bool {
        !self.selected.is_empty()
    }
}
