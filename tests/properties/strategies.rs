//! Random tree generation shared by the property suites.

use std::path::{Path, PathBuf};

use proptest::prelude::*;

use foldertree::TreeNode;

/// Shape of a tree before paths are assigned
#[derive(Debug, Clone)]
pub enum Shape {
    File,
    Dir(Vec<Shape>),
}

pub fn shape() -> impl Strategy<Value = Shape> {
    let leaf = prop_oneof![Just(Shape::File), Just(Shape::Dir(Vec::new()))];
    leaf.prop_recursive(5, 48, 5, |inner| {
        proptest::collection::vec(inner, 0..5).prop_map(Shape::Dir)
    })
}

/// Root directory containing `shape`; children are named `n0`, `n1`, ...
pub fn build(shape: &Shape) -> TreeNode {
    let children = match shape {
        Shape::File => vec![materialize(&Shape::File, Path::new("/t/root/n0"))],
        Shape::Dir(children) => children
            .iter()
            .enumerate()
            .map(|(i, c)| materialize(c, &Path::new("/t/root").join(format!("n{}", i))))
            .collect(),
    };
    TreeNode::directory("/t/root", children)
}

fn materialize(shape: &Shape, path: &Path) -> TreeNode {
    match shape {
        Shape::File => TreeNode::file(path),
        Shape::Dir(children) => TreeNode::directory(
            path,
            children
                .iter()
                .enumerate()
                .map(|(i, c)| materialize(c, &path.join(format!("n{}", i))))
                .collect(),
        ),
    }
}

/// Full paths of every directory in the tree (root included)
pub fn directories(tree: &TreeNode) -> Vec<PathBuf> {
    let mut out = Vec::new();
    let mut stack = vec![tree];
    while let Some(node) = stack.pop() {
        if node.kind == foldertree::NodeKind::Directory {
            out.push(node.full_path.clone());
        }
        stack.extend(node.children.iter());
    }
    out
}
