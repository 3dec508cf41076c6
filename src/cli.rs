//! Command-line interface definitions for dupsweep.
//!
//! # Example
//!
//! ```bash
//! # Sweep a directory
//! dupsweep ~/Music/Train
//!
//! # Root from the environment, debug logging
//! DUPSWEEP_ROOT=~/Music/Train dupsweep -v
//!
//! # Abort on unreadable subdirectories instead of skipping them
//! dupsweep --strict ~/Music/Train
//! ```

use clap::Parser;
use std::path::PathBuf;

use crate::duplicates::SweepConfig;

/// Remove " 2.wav" duplicates whose original sits next to them.
///
/// Walks ROOT recursively. Every file named `X 2.wav` is permanently
/// deleted when `X.wav` exists in the same directory.
#[derive(Debug, Parser)]
#[command(name = "dupsweep")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Root directory to sweep
    #[arg(value_name = "ROOT", env = "DUPSWEEP_ROOT")]
    pub root: PathBuf,

    /// Increase verbosity level (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output except errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Fail on the first unreadable path instead of skipping it
    #[arg(long)]
    pub strict: bool,

    /// Follow symbolic links to directories during the walk
    #[arg(long)]
    pub follow_symlinks: bool,

    /// Report fatal errors as JSON on stderr
    #[arg(long)]
    pub json_errors: bool,
}

impl Cli {
    /// Build the sweep configuration from the parsed arguments.
    #[must_use]
    pub fn sweep_config(&self) -> SweepConfig {
        SweepConfig::new(&self.root)
            .with_follow_symlinks(self.follow_symlinks)
            .with_strict(self.strict)
    }
}
