//! dupsweep - Marker-Named Duplicate Remover
//!
//! Removes the `X 2.wav` copies an upload/sync process leaves behind, but
//! only where the original `X.wav` sits in the same directory.

pub mod actions;
pub mod cli;
pub mod duplicates;
pub mod error;
pub mod logging;
pub mod marker;
pub mod scanner;

use anyhow::Result;

use crate::cli::Cli;
use crate::duplicates::{StdoutReporter, Sweeper};
use crate::error::ExitCode;

/// Run one sweep as configured by the command line.
///
/// Deletions are announced on stdout. Logging must already be initialized
/// for diagnostics to appear.
///
/// # Errors
///
/// Returns the [`duplicates::SweepError`] that aborted the sweep.
pub fn run_app(cli: Cli) -> Result<ExitCode> {
    let sweeper = Sweeper::new(cli.sweep_config());
    let summary = sweeper.run(&mut StdoutReporter::stdout())?;

    if summary.is_complete() {
        Ok(ExitCode::Success)
    } else {
        log::warn!(
            "{} path(s) could not be read and were skipped",
            summary.scan_errors.len()
        );
        Ok(ExitCode::PartialSuccess)
    }
}
