//! Tree Renderer
//!
//! Serializes a tree into a connector-and-indentation diagram, one line per node:
//!
//! ```text
//! └── root
//!     ├── a
//!     └── b
//! ```

use crate::domain::entities::TreeNode;
use crate::domain::value_objects::Charset;

/// Render with the default Unicode box-drawing connectors
pub fn render(tree: &TreeNode) -> String {
    render_with(tree, Charset::Unicode)
}

/// Render with the given connector style
///
/// The root is drawn as a last child. Walks with an explicit stack, so deep
/// trees cannot overflow the call stack.
pub fn render_with(tree: &TreeNode, charset: Charset) -> String {
    let glyphs = charset.glyphs();
    let mut out = String::new();
    let mut stack: Vec<(&TreeNode, String, bool)> = vec![(tree, String::new(), true)];

    while let Some((node, prefix, is_last)) = stack.pop() {
        out.push_str(&prefix);
        out.push_str(if is_last { glyphs.last } else { glyphs.branch });
        out.push_str(&node.name);
        out.push('\n');

        if node.children.is_empty() {
            continue;
        }

        let child_prefix = format!(
            "{}{}",
            prefix,
            if is_last { glyphs.blank } else { glyphs.vertical }
        );
        let count = node.children.len();
        for (i, child) in node.children.iter().enumerate().rev() {
            stack.push((child, child_prefix.clone(), i + 1 == count));
        }
    }

    out
}
