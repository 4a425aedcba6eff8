//! FileSystem port - abstraction over the read-only I/O the builder needs
//!
//! This trait allows the domain layer to walk directories
//! without depending on concrete implementations (local disk, in-memory double).

use std::path::{Path, PathBuf};

/// Result type for file system operations
pub type FsResult<T> = Result<T, FsError>;

/// File system operation errors
#[derive(Debug)]
pub enum FsError {
    /// Entry not found
    NotFound(PathBuf),
    /// Permission denied
    PermissionDenied(PathBuf),
    /// Any other I/O error
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl FsError {
    /// Attach a path to a raw I/O error
    pub fn from_io(path: &Path, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => FsError::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => FsError::PermissionDenied(path.to_path_buf()),
            _ => FsError::Io {
                path: path.to_path_buf(),
                source: err,
            },
        }
    }
}

impl std::fmt::Display for FsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FsError::NotFound(path) => write!(f, "Not found: {}", path.display()),
            FsError::PermissionDenied(path) => {
                write!(f, "Permission denied: {}", path.display())
            }
            FsError::Io { path, source } => write!(f, "I/O error at {}: {}", path.display(), source),
        }
    }
}

impl std::error::Error for FsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FsError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// What a path points at, after following symlinks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    File,
}

/// Abstract file system interface
///
/// Implementations:
/// - `LocalFs` - standard file I/O
/// - in-memory doubles in tests
pub trait FileSystem {
    /// Stat a path (following symlinks)
    fn entry_kind(&self, path: &Path) -> FsResult<EntryKind>;

    /// List the immediate entries of a directory as full paths, sorted by file name
    fn read_dir(&self, path: &Path) -> FsResult<Vec<PathBuf>>;

    /// Resolve symlinks to a canonical absolute path
    fn canonicalize(&self, path: &Path) -> FsResult<PathBuf>;

    /// Check if a path exists
    fn exists(&self, path: &Path) -> bool {
        self.entry_kind(path).is_ok()
    }
}

impl<T: FileSystem + ?Sized> FileSystem for &T {
    fn entry_kind(&self, path: &Path) -> FsResult<EntryKind> {
        (**self).entry_kind(path)
    }

    fn read_dir(&self, path: &Path) -> FsResult<Vec<PathBuf>> {
        (**self).read_dir(path)
    }

    fn canonicalize(&self, path: &Path) -> FsResult<PathBuf> {
        (**self).canonicalize(path)
    }

    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }
}
