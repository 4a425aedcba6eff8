//! Error types for foldertree
//!
//! Library errors use `thiserror`; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::file_system::FsError;

/// Result type alias for foldertree operations
pub type TreeResult<T> = Result<T, TreeError>;

/// Main error type for tree operations
#[derive(Error, Debug)]
pub enum TreeError {
    /// Root or selection path does not exist
    #[error("path not found: {path}")]
    NotFound { path: PathBuf },

    /// Read/stat failure during traversal
    #[error("failed to read {path}: {source}")]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Empty selection set, non-directory selection, or selection outside the root
    #[error("invalid selection '{path}': {reason}")]
    InvalidSelection { path: PathBuf, reason: String },

    /// Pruning could not establish a shared ancestor
    #[error("no common ancestor for selection: {}", display_paths(.paths))]
    NoCommonAncestor { paths: Vec<PathBuf> },

    /// Exclude pattern does not compile
    #[error("invalid exclude pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    /// Configuration file could not be read or parsed
    #[error("invalid configuration in {file}: {message}")]
    Config { file: PathBuf, message: String },

    /// IO error outside traversal (writing output)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl TreeError {
    /// Short machine-readable kind, used for JSON error events
    pub fn kind(&self) -> &'static str {
        match self {
            TreeError::NotFound { .. } => "not_found",
            TreeError::Filesystem { .. } => "filesystem",
            TreeError::InvalidSelection { .. } => "invalid_selection",
            TreeError::NoCommonAncestor { .. } => "no_common_ancestor",
            TreeError::InvalidPattern { .. } => "invalid_pattern",
            TreeError::Config { .. } => "config",
            TreeError::Io(_) => "io",
        }
    }

    pub(crate) fn invalid_selection(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        TreeError::InvalidSelection {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

impl From<FsError> for TreeError {
    fn from(err: FsError) -> Self {
        match err {
            FsError::NotFound(path) => TreeError::NotFound { path },
            FsError::PermissionDenied(path) => TreeError::Filesystem {
                path,
                source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
            },
            FsError::Io { path, source } => TreeError::Filesystem { path, source },
        }
    }
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
