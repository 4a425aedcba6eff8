//! Path relations
//!
//! Lexical helpers used by selection validation and pruning:
//! - absolute, normalized paths (no `.`/`..` components)
//! - ancestor/descendant tests by whole components, never by string prefix

use std::path::{Path, PathBuf};

use path_clean::PathClean;
use serde::Serializer;

/// Resolve `path` against `base` (when relative) and remove `.`/`..` lexically
pub fn normalize(path: &Path, base: &Path) -> PathBuf {
    if path.is_absolute() {
        path.clean()
    } else {
        base.join(path).clean()
    }
}

/// `true` when `candidate` is `node` itself or lies beneath it
///
/// Equivalent to "the relative path from `node` to `candidate` does not step
/// outside `node`". An empty `node` path (a placeholder) is nobody's ancestor.
pub fn is_ancestor_or_self(node: &Path, candidate: &Path) -> bool {
    !node.as_os_str().is_empty() && candidate.starts_with(node)
}

/// `true` when `node` and `selected` lie on one root-to-leaf line
pub fn is_related(node: &Path, selected: &Path) -> bool {
    is_ancestor_or_self(node, selected) || is_ancestor_or_self(selected, node)
}

/// Serialize a path as a string; bytes that are not UTF-8 become U+FFFD
pub fn serialize_lossy<S: Serializer>(path: &Path, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&path.to_string_lossy())
}

/// Sequence form of [`serialize_lossy`]
pub fn serialize_lossy_all<S: Serializer>(paths: &[PathBuf], s: S) -> Result<S::Ok, S::Error> {
    s.collect_seq(paths.iter().map(|p| p.to_string_lossy()))
}
