//! Scanner module for directory traversal.
//!
//! This module provides functionality for:
//! - Recursive directory walking using walkdir
//! - Classification of traversal failures into [`ScanError`]
//!
//! # Architecture
//!
//! - [`walker`]: Directory traversal yielding [`DirEntry`] values
//!
//! # Example
//!
//! ```no_run
//! use dupsweep::scanner::{Walker, WalkerConfig};
//! use std::path::Path;
//!
//! let walker = Walker::new(Path::new("."), WalkerConfig::default());
//! for entry in walker.walk() {
//!     match entry {
//!         Ok(entry) => println!("{}", entry.path().display()),
//!         Err(e) => eprintln!("Warning: {}", e),
//!     }
//! }
//! ```

pub mod walker;

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

pub use walker::Walker;

/// A non-directory entry found during traversal.
///
/// Holds the containing directory and the file name separately, since
/// duplicate detection works on the name and looks for siblings in the
/// directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    /// Directory that contains the entry
    pub dir: PathBuf,
    /// File name of the entry
    pub name: OsString,
}

impl DirEntry {
    /// Create a new DirEntry.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>, name: impl Into<OsString>) -> Self {
        Self {
            dir: dir.into(),
            name: name.into(),
        }
    }

    /// Full path of the entry.
    #[must_use]
    pub fn path(&self) -> PathBuf {
        self.dir.join(&self.name)
    }

    /// Path of a sibling named `name` in the same directory.
    #[must_use]
    pub fn sibling(&self, name: &OsStr) -> PathBuf {
        self.dir.join(name)
    }
}

/// Configuration for directory walking.
#[derive(Debug, Clone, Default)]
pub struct WalkerConfig {
    /// Follow symbolic links during traversal.
    /// Symlink loops are detected and reported as errors.
    pub follow_symlinks: bool,
}

impl WalkerConfig {
    /// Create a new configuration from CLI arguments.
    #[must_use]
    pub fn new(follow_symlinks: bool) -> Self {
        Self { follow_symlinks }
    }
}

/// Errors that can occur during directory scanning.
#[derive(thiserror::Error, Debug)]
pub enum ScanError {
    /// Permission was denied when accessing a file or directory.
    #[error("Permission denied: {0}")]
    PermissionDenied(PathBuf),

    /// The specified path was not found.
    #[error("Path not found: {0}")]
    NotFound(PathBuf),

    /// The specified path is not a directory.
    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),

    /// A symbolic link points back at one of its ancestors.
    #[error("Symlink loop: {path} points to ancestor {ancestor}")]
    SymlinkLoop {
        /// Link that closes the loop
        path: PathBuf,
        /// Ancestor directory it resolves to
        ancestor: PathBuf,
    },

    /// An I/O error occurred while accessing a file.
    #[error("I/O error for {path}: {source}")]
    Io {
        /// Path where the error occurred
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

impl ScanError {
    /// Get the path associated with this error.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::PermissionDenied(p)
            | Self::NotFound(p)
            | Self::NotADirectory(p)
            | Self::SymlinkLoop { path: p, .. }
            | Self::Io { path: p, .. } => p,
        }
    }
}
