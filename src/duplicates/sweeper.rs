//! The duplicate sweep itself.
//!
//! [`Sweeper`] walks the configured root once, deleting each duplicate whose
//! original exists next to it. The first deletion failure aborts the run;
//! deletions that already happened stay in effect.

use std::fs;
use std::io::ErrorKind;

use super::{SweepConfig, SweepError, SweepReporter, SweepSummary};
use crate::actions::remove_duplicate;
use crate::marker::DuplicateMarker;
use crate::scanner::{DirEntry, Walker};

/// Removes marker-named duplicates below a root directory.
#[derive(Debug, Clone)]
pub struct Sweeper {
    config: SweepConfig,
    marker: DuplicateMarker,
}

impl Sweeper {
    /// Create a sweeper for the given configuration.
    #[must_use]
    pub fn new(config: SweepConfig) -> Self {
        Self {
            config,
            marker: DuplicateMarker::default(),
        }
    }

    /// Run one sweep, reporting each deletion to `reporter`.
    ///
    /// # Errors
    ///
    /// - `RootNotFound` / `RootUnreadable` / `NotADirectory` before any
    ///   traversal if the root is unusable
    /// - `Deletion` on the first duplicate that cannot be removed
    /// - `Report` when a removal cannot be reported
    /// - `Scan` on the first traversal error in strict mode
    pub fn run(&self, reporter: &mut dyn SweepReporter) -> Result<SweepSummary, SweepError> {
        self.check_root()?;

        let root = &self.config.root;
        log::info!("Sweeping {} for *{} duplicates", root.display(), self.marker.suffix());

        let walker = Walker::new(root, self.config.walker.clone());
        let mut summary = SweepSummary::default();

        for result in walker.walk() {
            let entry = match result {
                Ok(entry) => entry,
                Err(e) if self.config.strict => return Err(e.into()),
                Err(e) => {
                    // Unreadable subtree: note it and keep going
                    log::warn!("Skipping unreadable path: {e}");
                    summary.scan_errors.push(e);
                    continue;
                }
            };

            summary.visited += 1;
            self.process_entry(&entry, &mut summary, reporter)?;
        }

        log::info!("{}", summary.summary());
        Ok(summary)
    }

    /// Decide the fate of a single entry.
    fn process_entry(
        &self,
        entry: &DirEntry,
        summary: &mut SweepSummary,
        reporter: &mut dyn SweepReporter,
    ) -> Result<(), SweepError> {
        // Only marker-named entries are candidates
        let Some(original_name) = self.marker.original_name(&entry.name) else {
            return Ok(());
        };
        summary.matched += 1;

        let duplicate = entry.path();
        let original = entry.sibling(&original_name);

        // The original must sit in the same directory
        if !original.exists() {
            log::debug!(
                "Keeping {}: no original at {}",
                duplicate.display(),
                original.display()
            );
            summary.kept += 1;
            reporter.on_kept(&duplicate, &original);
            return Ok(());
        }

        let record =
            remove_duplicate(&duplicate, &original).map_err(|source| SweepError::Deletion {
                path: duplicate.clone(),
                removed: summary.removed_count(),
                source,
            })?;

        summary.removed.push(record.duplicate.clone());
        reporter
            .on_removed(&record)
            .map_err(|source| SweepError::Report {
                path: record.duplicate,
                removed: summary.removed_count(),
                source,
            })
    }

    /// Verify the root exists, is a directory and can be listed.
    fn check_root(&self) -> Result<(), SweepError> {
        let root = &self.config.root;

        let metadata = fs::metadata(root).map_err(|e| match e.kind() {
            ErrorKind::NotFound => SweepError::RootNotFound(root.clone()),
            _ => SweepError::RootUnreadable {
                path: root.clone(),
                source: e,
            },
        })?;

        if !metadata.is_dir() {
            return Err(SweepError::NotADirectory(root.clone()));
        }

        // Listing it once catches an unreadable root before any deletion
        fs::read_dir(root).map_err(|e| SweepError::RootUnreadable {
            path: root.clone(),
            source: e,
        })?;

        Ok(())
    }
}
