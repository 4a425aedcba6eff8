//! Tree options

use std::path::PathBuf;

use crate::domain::value_objects::Charset;

/// Options for one tree invocation
#[derive(Debug, Clone)]
pub struct TreeOptions {
    /// Folder (or file) to draw; relative paths resolve against `cwd`
    pub root: PathBuf,
    /// Folders to highlight; empty means draw the full tree
    pub selected: Vec<PathBuf>,
    /// Exclude patterns, in order
    pub exclude: Vec<String>,
    /// Connector style
    pub charset: Charset,
    /// Base for relative paths (None = process working directory)
    pub cwd: Option<PathBuf>,
}

impl Default for TreeOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            selected: Vec::new(),
            exclude: Vec::new(),
            charset: Charset::default(),
            cwd: None,
        }
    }
}

impl TreeOptions {
    /// Create options for the given root
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    /// Set selected folders
    pub fn with_selected(mut self, selected: Vec<PathBuf>) -> Self {
        self.selected = selected;
        self
    }

    /// Set exclude patterns
    pub fn with_exclude(mut self, exclude: Vec<String>) -> Self {
        self.exclude = exclude;
        self
    }

    /// Set charset
    pub fn with_charset(mut self, charset: Charset) -> Self {
        self.charset = charset;
        self
    }

    /// Set the base directory for relative paths
    pub fn with_cwd(mut self, cwd: impl Into<PathBuf>) -> Self {
        self.cwd = Some(cwd.into());
        self
    }
}
