//! Tree Use Case
//!
//! Wires selection validation, building, pruning and rendering together.

use log::{debug, info};

use crate::domain::ports::FileSystem;
use crate::domain::services::{prune, render_with, TreeBuilder};
use crate::domain::value_objects::path::normalize;
use crate::domain::value_objects::ExcludePatterns;
use crate::error::TreeResult;

use super::options::TreeOptions;
use super::result::RenderedTree;
use super::selection::validate_selections;

/// Tree use case - one build → prune → render pass
pub struct TreeUseCase<FS>
where
    FS: FileSystem,
{
    fs: FS,
}

impl<FS> TreeUseCase<FS>
where
    FS: FileSystem,
{
    /// Create a new tree use case
    pub fn new(fs: FS) -> Self {
        Self { fs }
    }

    /// Execute the pass.
    ///
    /// Any error is terminal: nothing partial is returned.
    pub fn execute(&self, options: &TreeOptions) -> TreeResult<RenderedTree> {
        let cwd = match &options.cwd {
            Some(cwd) => cwd.clone(),
            None => std::env::current_dir()?,
        };

        let root = normalize(&options.root, &cwd);
        // Missing root is NotFound; any other stat failure is Filesystem.
        self.fs.entry_kind(&root)?;

        let patterns = ExcludePatterns::new(&options.exclude)?;
        let selected = validate_selections(&self.fs, &root, &options.selected, &cwd)?;

        debug!(
            "Building tree at {} ({} exclude patterns, {} selections)",
            root.display(),
            patterns.len(),
            selected.len()
        );
        let full_tree = TreeBuilder::new(&self.fs, &patterns).build(&root)?;
        info!(
            "Built tree at {}: {} nodes",
            root.display(),
            full_tree.stats().total()
        );

        let tree = if selected.is_empty() {
            full_tree
        } else {
            let pruned = prune(&full_tree, &selected)?;
            info!(
                "Pruned to {} ({} nodes)",
                pruned.full_path.display(),
                pruned.stats().total()
            );
            pruned
        };

        let rendered = render_with(&tree, options.charset);

        Ok(RenderedTree {
            root,
            selected,
            stats: tree.stats(),
            tree,
            rendered,
        })
    }
}
