//! Reporting of sweep decisions.
//!
//! The sweeper announces every deletion through [`SweepReporter`]. The
//! command-line binary uses [`StdoutReporter`], which prints one
//! `Removed duplicate file: <path>` line per deletion. A reporter that
//! cannot deliver its record aborts the sweep.

use std::io::{self, Write};
use std::path::Path;

use crate::actions::DeletionRecord;

/// Callback trait for sweep progress reporting.
pub trait SweepReporter {
    /// Called after a duplicate has been deleted.
    ///
    /// # Errors
    ///
    /// Returns the I/O error that kept the record from being written.
    fn on_removed(&mut self, record: &DeletionRecord) -> io::Result<()>;

    /// Called when a duplicate is kept because its original is missing.
    fn on_kept(&mut self, _duplicate: &Path, _original: &Path) {}
}

/// Collects deletion records in memory.
impl SweepReporter for Vec<DeletionRecord> {
    fn on_removed(&mut self, record: &DeletionRecord) -> io::Result<()> {
        self.push(record.clone());
        Ok(())
    }
}

/// Writes one confirmation line per deletion to a writer.
#[derive(Debug)]
pub struct LineReporter<W: Write> {
    writer: W,
}

/// Reporter used by the binary.
pub type StdoutReporter = LineReporter<io::Stdout>;

impl StdoutReporter {
    /// Reporter writing to standard output.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> LineReporter<W> {
    /// Create a reporter writing to `writer`.
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Consume the reporter, returning the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> SweepReporter for LineReporter<W> {
    fn on_removed(&mut self, record: &DeletionRecord) -> io::Result<()> {
        writeln!(
            self.writer,
            "Removed duplicate file: {}",
            record.duplicate.display()
        )?;
        self.writer.flush()
    }
}
