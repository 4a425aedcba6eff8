//! Tree Builder
//!
//! Walks a directory depth-first through the `FileSystem` port and produces a
//! `TreeNode`. Excluded entries are dropped before they are stat'ed, so
//! nothing beneath them is ever read.

use std::path::{Path, PathBuf};

use log::{debug, trace};

use crate::domain::entities::TreeNode;
use crate::domain::ports::{EntryKind, FileSystem, FsError};
use crate::domain::value_objects::ExcludePatterns;
use crate::error::{TreeError, TreeResult};

/// Builds trees from live filesystem state
pub struct TreeBuilder<'a, FS: FileSystem> {
    fs: FS,
    patterns: &'a ExcludePatterns,
}

impl<'a, FS: FileSystem> TreeBuilder<'a, FS> {
    pub fn new(fs: FS, patterns: &'a ExcludePatterns) -> Self {
        Self { fs, patterns }
    }

    /// Build the tree rooted at `root`.
    ///
    /// The root itself is never matched against exclude patterns. A missing
    /// root fails with `NotFound`; any other read failure, at any depth,
    /// aborts the build with `Filesystem`.
    pub fn build(&self, root: &Path) -> TreeResult<TreeNode> {
        let kind = self.fs.entry_kind(root)?;
        let mut ancestors = Vec::new();
        self.build_node(root, kind, &mut ancestors)
    }

    fn build_node(
        &self,
        path: &Path,
        kind: EntryKind,
        ancestors: &mut Vec<PathBuf>,
    ) -> TreeResult<TreeNode> {
        if kind == EntryKind::File {
            return Ok(TreeNode::file(path));
        }

        // Symlinked directories are followed; one that loops back onto the
        // current recursion stack is kept as a leaf.
        let canonical = self.fs.canonicalize(path).map_err(traversal_error)?;
        if ancestors.contains(&canonical) {
            debug!(
                "Not descending into {} (links back to {})",
                path.display(),
                canonical.display()
            );
            return Ok(TreeNode::directory(path, Vec::new()));
        }

        trace!("Listing {}", path.display());
        let entries = self.fs.read_dir(path).map_err(traversal_error)?;

        ancestors.push(canonical);
        let mut children = Vec::with_capacity(entries.len());
        for entry in entries {
            let name = entry
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();

            if let Some(pattern) = self.patterns.matching_pattern(&name, &entry) {
                debug!("Excluding {} (matches '{}')", entry.display(), pattern);
                continue;
            }

            let kind = self.fs.entry_kind(&entry).map_err(traversal_error)?;
            children.push(self.build_node(&entry, kind, ancestors)?);
        }
        ancestors.pop();

        Ok(TreeNode::directory(path, children))
    }
}

/// Build a tree with the given file system and exclude patterns
pub fn build_tree<FS: FileSystem>(
    fs: FS,
    root: &Path,
    patterns: &ExcludePatterns,
) -> TreeResult<TreeNode> {
    TreeBuilder::new(fs, patterns).build(root)
}

/// Failures below the root are read failures, never "root not found"
fn traversal_error(err: FsError) -> TreeError {
    match err {
        FsError::NotFound(path) => TreeError::Filesystem {
            path,
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        },
        other => other.into(),
    }
}
