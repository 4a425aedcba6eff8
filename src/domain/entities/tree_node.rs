//! TreeNode Entity
//!
//! A structural value describing one filesystem entry and its (possibly
//! filtered) children. Trees are plain owned data: cloning a node clones
//! the whole subtree, so a pruned copy never aliases the full tree.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::value_objects::path::serialize_lossy;

/// Display label used for placeholder nodes
pub const PLACEHOLDER_NAME: &str = "...";

/// What a node stands for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// A directory (children reflect its entries)
    Directory,
    /// Any non-directory entry; always a leaf
    File,
    /// Stand-in for one or more omitted siblings
    Placeholder,
}

/// One entry of a directory hierarchy
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeNode {
    /// Base name of the path, or `"..."` for a placeholder
    pub name: String,
    /// Absolute path; empty for placeholders
    #[serde(serialize_with = "serialize_lossy")]
    pub full_path: PathBuf,
    pub kind: NodeKind,
    /// Ordered children; empty for leaves
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    /// Create a directory node with the given children
    pub fn directory(path: impl Into<PathBuf>, children: Vec<TreeNode>) -> Self {
        let full_path = path.into();
        Self {
            name: display_name(&full_path),
            full_path,
            kind: NodeKind::Directory,
            children,
        }
    }

    /// Create a leaf node for a non-directory entry
    pub fn file(path: impl Into<PathBuf>) -> Self {
        let full_path = path.into();
        Self {
            name: display_name(&full_path),
            full_path,
            kind: NodeKind::File,
            children: Vec::new(),
        }
    }

    /// Create the `"..."` placeholder that replaces omitted siblings
    pub fn placeholder() -> Self {
        Self {
            name: PLACEHOLDER_NAME.to_string(),
            full_path: PathBuf::new(),
            kind: NodeKind::Placeholder,
            children: Vec::new(),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.kind == NodeKind::Placeholder
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Find the node whose full path equals `path` (depth-first)
    pub fn find(&self, path: &Path) -> Option<&TreeNode> {
        self.path_to(path).and_then(|chain| chain.last().copied())
    }

    /// Chain of nodes from `self` down to the node at `path`, both inclusive
    ///
    /// Returns `None` when no node in this subtree has that path.
    pub fn path_to(&self, path: &Path) -> Option<Vec<&TreeNode>> {
        if self.is_placeholder() {
            return None;
        }
        if self.full_path == path {
            return Some(vec![self]);
        }
        if !path.starts_with(&self.full_path) {
            return None;
        }
        self.children.iter().find_map(|child| {
            child.path_to(path).map(|mut chain| {
                chain.insert(0, self);
                chain
            })
        })
    }

    /// Count nodes by kind across the whole subtree
    pub fn stats(&self) -> TreeStats {
        let mut stats = TreeStats::default();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            match node.kind {
                NodeKind::Directory => stats.directories += 1,
                NodeKind::File => stats.files += 1,
                NodeKind::Placeholder => stats.placeholders += 1,
            }
            stack.extend(node.children.iter());
        }
        stats
    }
}

/// Node counts for a tree
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TreeStats {
    pub directories: usize,
    pub files: usize,
    pub placeholders: usize,
}

impl TreeStats {
    pub fn total(&self) -> usize {
        self.directories + self.files + self.placeholders
    }
}

/// Base name of a path; falls back to the whole path for roots like `/`
fn display_name(path: &Path) -> String {
    match path.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => path.display().to_string(),
    }
}
