//! Directory walker implementation using walkdir.
//!
//! # Overview
//!
//! [`Walker`] enumerates every non-directory entry below a root, at all
//! nesting levels, as [`DirEntry`] values. Children are visited sorted by
//! file name so output is stable between runs.
//!
//! Traversal errors (an unreadable subdirectory, a symlink loop) are
//! yielded as [`ScanError`] values rather than stopping iteration; the
//! caller decides whether they are fatal.
//!
//! # Example
//!
//! ```no_run
//! use dupsweep::scanner::{Walker, WalkerConfig};
//! use std::path::Path;
//!
//! let walker = Walker::new(Path::new("/data/train"), WalkerConfig::default());
//! let entries: Vec<_> = walker.walk().filter_map(Result::ok).collect();
//! println!("Found {} files", entries.len());
//! ```

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::{DirEntry, ScanError, WalkerConfig};

/// Directory walker for file discovery.
#[derive(Debug)]
pub struct Walker {
    /// Root path to walk
    root: PathBuf,
    /// Walker configuration
    config: WalkerConfig,
}

impl Walker {
    /// Create a new walker for the given path.
    #[must_use]
    pub fn new(path: &Path, config: WalkerConfig) -> Self {
        Self {
            root: path.to_path_buf(),
            config,
        }
    }

    /// Walk the directory tree, yielding entries that are not directories.
    ///
    /// Symlinks are yielded as entries unless they resolve to a directory.
    /// With `follow_symlinks` set, directory symlinks are descended into
    /// instead.
    pub fn walk(&self) -> impl Iterator<Item = Result<DirEntry, ScanError>> + '_ {
        let walk_dir = WalkDir::new(&self.root)
            .min_depth(1)
            .follow_links(self.config.follow_symlinks)
            .sort_by_file_name();

        walk_dir
            .into_iter()
            .filter_map(move |entry_result| match entry_result {
                Ok(entry) => {
                    let file_type = entry.file_type();
                    if file_type.is_dir() {
                        return None;
                    }

                    let path = entry.path();
                    if file_type.is_symlink() && path.is_dir() {
                        log::trace!("Skipping directory symlink: {}", path.display());
                        return None;
                    }

                    let dir = path.parent()?;
                    Some(Ok(DirEntry::new(dir, entry.file_name())))
                }
                Err(e) => Some(Err(self.handle_walk_error(e))),
            })
    }

    /// Convert a walkdir error into a [`ScanError`].
    fn handle_walk_error(&self, error: walkdir::Error) -> ScanError {
        let path = error
            .path()
            .map_or_else(|| self.root.clone(), Path::to_path_buf);

        if let Some(ancestor) = error.loop_ancestor() {
            log::debug!(
                "Symlink loop at {} (ancestor {})",
                path.display(),
                ancestor.display()
            );
            return ScanError::SymlinkLoop {
                ancestor: ancestor.to_path_buf(),
                path,
            };
        }

        match error.io_error().map(std::io::Error::kind) {
            Some(ErrorKind::PermissionDenied) => {
                log::debug!("Permission denied: {}", path.display());
                ScanError::PermissionDenied(path)
            }
            Some(ErrorKind::NotFound) => {
                log::debug!("Path vanished during walk: {}", path.display());
                ScanError::NotFound(path)
            }
            _ => ScanError::Io {
                path,
                source: error.into(),
            },
        }
    }
}
