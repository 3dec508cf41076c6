//! Duplicate sweeping.
//!
//! One pass over a directory tree that removes every marker-named duplicate
//! whose original sits in the same directory:
//!
//! 1. Walk all non-directory entries below the root
//! 2. Match names ending in the duplicate marker (see [`crate::marker`])
//! 3. Look for the derived original next to the duplicate
//! 4. Delete the duplicate when the original exists, report it
//!
//! Each file's fate depends only on whether its sibling exists, so the
//! visiting order does not affect the result.
//!
//! # Example
//!
//! ```no_run
//! use dupsweep::duplicates::{StdoutReporter, SweepConfig, Sweeper};
//!
//! let sweeper = Sweeper::new(SweepConfig::new("/data/train"));
//! let summary = sweeper.run(&mut StdoutReporter::stdout())?;
//! println!("{}", summary.summary());
//! # Ok::<(), dupsweep::duplicates::SweepError>(())
//! ```

pub mod report;
pub mod sweeper;

use std::path::PathBuf;

use thiserror::Error;

use crate::actions::DeleteError;
use crate::scanner::{ScanError, WalkerConfig};

pub use report::{LineReporter, StdoutReporter, SweepReporter};
pub use sweeper::Sweeper;

/// Configuration for one sweep.
#[derive(Debug, Clone)]
pub struct SweepConfig {
    /// Root directory the sweep is confined to.
    pub root: PathBuf,
    /// Traversal options.
    pub walker: WalkerConfig,
    /// Abort on the first traversal error instead of skipping the subtree.
    pub strict: bool,
}

impl SweepConfig {
    /// Create a config for `root` with default traversal options.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            walker: WalkerConfig::default(),
            strict: false,
        }
    }

    /// Enable/disable following symbolic links.
    #[must_use]
    pub fn with_follow_symlinks(mut self, follow: bool) -> Self {
        self.walker.follow_symlinks = follow;
        self
    }

    /// Enable/disable strict mode.
    #[must_use]
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}

/// Outcome of a completed sweep.
#[derive(Debug, Default)]
pub struct SweepSummary {
    /// Non-directory entries visited.
    pub visited: usize,
    /// Entries whose name carried the duplicate marker.
    pub matched: usize,
    /// Duplicates that were deleted, in deletion order.
    pub removed: Vec<PathBuf>,
    /// Duplicates left in place because no original was found.
    pub kept: usize,
    /// Traversal errors that were skipped (non-strict mode only).
    pub scan_errors: Vec<ScanError>,
}

impl SweepSummary {
    /// Number of duplicates deleted.
    #[must_use]
    pub fn removed_count(&self) -> usize {
        self.removed.len()
    }

    /// Whether the whole tree could be read.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.scan_errors.is_empty()
    }

    /// Human-readable summary of the sweep.
    #[must_use]
    pub fn summary(&self) -> String {
        let mut text = format!(
            "Removed {} duplicate(s), kept {} without original, visited {} file(s)",
            self.removed_count(),
            self.kept,
            self.visited
        );
        if !self.is_complete() {
            text.push_str(&format!(", skipped {} unreadable path(s)", self.scan_errors.len()));
        }
        text
    }
}

/// Errors that abort a sweep.
#[derive(Debug, Error)]
pub enum SweepError {
    /// The root directory does not exist.
    #[error("Root directory not found: {0}")]
    RootNotFound(PathBuf),

    /// The root directory exists but cannot be listed.
    #[error("Root directory not readable: {path}: {source}")]
    RootUnreadable {
        /// Configured root
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The root path is not a directory.
    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),

    /// A verified duplicate could not be deleted.
    #[error("Failed to remove duplicate {path} ({removed} removed before failure): {source}")]
    Deletion {
        /// Duplicate that could not be removed
        path: PathBuf,
        /// Duplicates already removed when the failure happened
        removed: usize,
        /// The underlying deletion error
        #[source]
        source: DeleteError,
    },

    /// A duplicate was deleted but its record could not be written.
    #[error("Failed to report removal of {path} ({removed} removed in total): {source}")]
    Report {
        /// Duplicate that was removed
        path: PathBuf,
        /// Duplicates removed so far, including this one
        removed: usize,
        /// The underlying write error
        #[source]
        source: std::io::Error,
    },

    /// A traversal error occurred in strict mode.
    #[error(transparent)]
    Scan(#[from] ScanError),
}
