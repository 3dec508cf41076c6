//! Structured error handling and exit codes.

use serde::Serialize;

use crate::duplicates::SweepError;

/// Exit codes for the dupsweep application.
///
/// - 0: Success (the whole tree was swept)
/// - 1: General error (root unusable, a deletion or its report failed,
///   strict-mode walk error)
/// - 3: Partial success (swept, but some subtrees could not be read)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ExitCode {
    /// Success: Sweep completed over the whole tree.
    Success = 0,
    /// General error: The sweep was aborted.
    GeneralError = 1,
    /// Partial success: Sweep completed but skipped unreadable paths.
    PartialSuccess = 3,
}

impl ExitCode {
    /// Get the numeric exit code.
    #[must_use]
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Get the machine-readable code prefix.
    #[must_use]
    pub fn code_prefix(self) -> &'static str {
        match self {
            Self::Success => "DS000",
            Self::GeneralError => "DS001",
            Self::PartialSuccess => "DS003",
        }
    }
}

/// Structured error information for JSON output.
#[derive(Debug, Serialize)]
pub struct StructuredError {
    /// The error code (e.g., "DS001")
    pub code: String,
    /// The exit code number
    pub exit_code: i32,
    /// Human-readable error message
    pub message: String,
    /// Path the failure is about, when known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Duplicates removed before the failure, for deletion failures
    #[serde(skip_serializing_if = "Option::is_none")]
    pub removed_before_failure: Option<usize>,
}

impl StructuredError {
    /// Create a new structured error from an anyhow error and an exit code.
    #[must_use]
    pub fn new(err: &anyhow::Error, exit_code: ExitCode) -> Self {
        let sweep_error = err.downcast_ref::<SweepError>();

        let path = sweep_error.map(|e| match e {
            SweepError::RootNotFound(p)
            | SweepError::NotADirectory(p)
            | SweepError::RootUnreadable { path: p, .. }
            | SweepError::Deletion { path: p, .. }
            | SweepError::Report { path: p, .. } => p.display().to_string(),
            SweepError::Scan(scan) => scan.path().display().to_string(),
        });

        let removed_before_failure = sweep_error.and_then(|e| match e {
            SweepError::Deletion { removed, .. } => Some(*removed),
            _ => None,
        });

        Self {
            code: exit_code.code_prefix().to_string(),
            exit_code: exit_code.as_i32(),
            message: err.to_string(),
            path,
            removed_before_failure,
        }
    }
}
