//! Permanent removal of verified duplicates.
//!
//! # Overview
//!
//! [`remove_duplicate`] deletes a single duplicate file once its original
//! has been seen in the same directory. Deletion is permanent: there is no
//! trash and no undo.
//!
//! # Example
//!
//! ```no_run
//! use dupsweep::actions::delete::remove_duplicate;
//! use std::path::Path;
//!
//! match remove_duplicate(Path::new("/data/a 2.wav"), Path::new("/data/a.wav")) {
//!     Ok(record) => println!("Removed duplicate file: {}", record.duplicate.display()),
//!     Err(e) => eprintln!("Failed: {}", e),
//! }
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Error type for deletion operations.
#[derive(Debug, Error)]
pub enum DeleteError {
    /// File was not found (may have been deleted or moved).
    #[error("file not found: {0}")]
    NotFound(PathBuf),

    /// Permission denied when attempting to delete.
    #[error("permission denied: {0}")]
    PermissionDenied(PathBuf),

    /// General I/O error.
    #[error("I/O error for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl DeleteError {
    /// Classify an I/O error raised while deleting `path`.
    #[must_use]
    pub fn from_io(path: &Path, error: io::Error) -> Self {
        match error.kind() {
            io::ErrorKind::NotFound => Self::NotFound(path.to_path_buf()),
            io::ErrorKind::PermissionDenied => Self::PermissionDenied(path.to_path_buf()),
            _ => Self::Io {
                path: path.to_path_buf(),
                source: error,
            },
        }
    }

    /// Get the path associated with this error.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::NotFound(p) | Self::PermissionDenied(p) | Self::Io { path: p, .. } => p,
        }
    }
}

/// Record of one removed duplicate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletionRecord {
    /// Path of the duplicate that was deleted.
    pub duplicate: PathBuf,
    /// Path of the original whose presence justified the deletion.
    pub original: PathBuf,
}

impl DeletionRecord {
    /// Create a new deletion record.
    #[must_use]
    pub fn new(duplicate: PathBuf, original: PathBuf) -> Self {
        Self {
            duplicate,
            original,
        }
    }
}

/// Permanently delete `duplicate`.
///
/// The caller is responsible for having checked that `original` exists;
/// it is only carried into the returned record.
///
/// # Errors
///
/// - `NotFound` if the duplicate vanished before it could be removed
/// - `PermissionDenied` if the containing directory is not writable
/// - `Io` for anything else
pub fn remove_duplicate(duplicate: &Path, original: &Path) -> Result<DeletionRecord, DeleteError> {
    fs::remove_file(duplicate).map_err(|e| {
        log::error!("Delete failed for {}: {}", duplicate.display(), e);
        DeleteError::from_io(duplicate, e)
    })?;

    log::debug!(
        "Deleted {} (original {})",
        duplicate.display(),
        original.display()
    );

    Ok(DeletionRecord::new(
        duplicate.to_path_buf(),
        original.to_path_buf(),
    ))
}
