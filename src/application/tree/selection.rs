//! Selection validation
//!
//! The pruner assumes every selection exists, is a directory and lies inside
//! the root. This is where those preconditions are enforced.

use std::path::{Path, PathBuf};

use crate::domain::ports::{EntryKind, FileSystem};
use crate::domain::value_objects::path::{is_ancestor_or_self, normalize};
use crate::error::{TreeError, TreeResult};

/// Normalize and check selections against `root`.
///
/// Relative selections resolve against `cwd`. Returns the normalized paths in
/// input order with duplicates removed. An empty input yields an empty output
/// (the caller then skips pruning).
pub fn validate_selections<FS: FileSystem>(
    fs: &FS,
    root: &Path,
    selections: &[PathBuf],
    cwd: &Path,
) -> TreeResult<Vec<PathBuf>> {
    let mut validated: Vec<PathBuf> = Vec::with_capacity(selections.len());

    for raw in selections {
        let path = normalize(raw, cwd);

        if fs.entry_kind(&path)? != EntryKind::Directory {
            return Err(TreeError::invalid_selection(path, "not a directory"));
        }

        if !is_ancestor_or_self(root, &path) {
            let reason = format!("outside of root {}", root.display());
            return Err(TreeError::invalid_selection(path, reason));
        }

        if !validated.contains(&path) {
            validated.push(path);
        }
    }

    Ok(validated)
}
