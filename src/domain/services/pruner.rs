//! Tree Pruner
//!
//! Reduces a full tree to the part that matters for a set of selected folders:
//! nodes on the line between the root and a selection, plus everything below a
//! selection. Dropped siblings collapse into a single `"..."` placeholder.
//!
//! Pruning always returns a fresh tree; the input is only borrowed.

use std::path::PathBuf;

use crate::domain::entities::TreeNode;
use crate::domain::value_objects::path::is_related;
use crate::error::{TreeError, TreeResult};

/// Prune `full_tree` for the given selections and pick the display root.
///
/// - one selection: the result is rooted at the selected folder itself
/// - several selections: the result is rooted at their lowest common ancestor
///
/// Selections must be absolute, normalized paths inside the tree. A selection
/// that cannot be found in the tree (for example because an exclude pattern
/// removed it) fails with `NoCommonAncestor`.
pub fn prune(full_tree: &TreeNode, selected: &[PathBuf]) -> TreeResult<TreeNode> {
    match selected {
        [] => Err(TreeError::invalid_selection(
            PathBuf::new(),
            "no folders selected",
        )),
        [single] => {
            let root = full_tree
                .find(single)
                .ok_or_else(|| TreeError::NoCommonAncestor {
                    paths: vec![single.clone()],
                })?;
            Ok(prune_at(root, selected))
        }
        _ => {
            let root = lowest_common_ancestor(full_tree, selected)?;
            Ok(prune_at(root, selected))
        }
    }
}

/// Filter the children of `node` (recursively) without choosing a new root.
///
/// A child survives when it is related to at least one selection. If any
/// sibling is dropped, one placeholder is appended after the survivors.
/// Placeholders already present in the input count as dropped siblings.
pub fn prune_at(node: &TreeNode, selected: &[PathBuf]) -> TreeNode {
    if node.is_placeholder() || node.is_leaf() {
        return node.clone();
    }

    let mut children = Vec::with_capacity(node.children.len());
    let mut omitted = false;

    for child in &node.children {
        if is_relevant(child, selected) {
            children.push(prune_at(child, selected));
        } else {
            omitted = true;
        }
    }

    if omitted {
        children.push(TreeNode::placeholder());
    }

    TreeNode {
        name: node.name.clone(),
        full_path: node.full_path.clone(),
        kind: node.kind,
        children,
    }
}

/// Deepest node lying on the root-to-selection path of every selection.
///
/// Paths are compared depth by depth on full-path equality until they diverge.
pub fn lowest_common_ancestor<'a>(
    tree: &'a TreeNode,
    selected: &[PathBuf],
) -> TreeResult<&'a TreeNode> {
    let mut chains = Vec::with_capacity(selected.len());
    let mut missing = Vec::new();

    for path in selected {
        match tree.path_to(path) {
            Some(chain) => chains.push(chain),
            None => missing.push(path.clone()),
        }
    }

    if !missing.is_empty() {
        return Err(TreeError::NoCommonAncestor { paths: missing });
    }

    let no_ancestor = || TreeError::NoCommonAncestor {
        paths: selected.to_vec(),
    };
    let (first, rest) = chains.split_first().ok_or_else(no_ancestor)?;

    let mut lca = None;
    for (depth, node) in first.iter().enumerate() {
        let shared = rest.iter().all(|chain| {
            chain
                .get(depth)
                .is_some_and(|other| other.full_path == node.full_path)
        });
        if !shared {
            break;
        }
        lca = Some(*node);
    }

    lca.ok_or_else(no_ancestor)
}

fn is_relevant(node: &TreeNode, selected: &[PathBuf]) -> bool {
    !node.is_placeholder()
        && selected
            .iter()
            .any(|sel| is_related(&node.full_path, sel))
}
