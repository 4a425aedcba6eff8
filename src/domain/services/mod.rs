//! Domain Services
//!
//! The three pipeline stages: Builder → Pruner (optional) → Renderer.
//! Pruning and rendering are pure functions over `TreeNode` values.

mod builder;
mod pruner;
mod renderer;

pub use builder::{build_tree, TreeBuilder};
pub use pruner::{lowest_common_ancestor, prune, prune_at};
pub use renderer::{render, render_with};
