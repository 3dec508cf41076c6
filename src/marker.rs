//! Duplicate marker matching.
//!
//! The sync process that produces the duplicates inserts `" 2"` right before
//! the `.wav` extension, so `take.wav` gets a sibling copy named `take 2.wav`.
//! [`DuplicateMarker`] recognises such names and derives the name of the
//! original they were copied from.
//!
//! Only this single literal pattern is recognised. Copies of copies
//! (`take 2 2.wav`) are matched once, against `take 2.wav`.
//!
//! # Example
//!
//! ```
//! use dupsweep::marker::DuplicateMarker;
//! use std::ffi::OsStr;
//!
//! let marker = DuplicateMarker::default();
//! let original = marker.original_name(OsStr::new("take 2.wav"));
//! assert_eq!(original.as_deref(), Some(OsStr::new("take.wav")));
//! assert!(marker.original_name(OsStr::new("take.wav")).is_none());
//! ```

use std::ffi::{OsStr, OsString};

/// Copy marker inserted by the sync process.
pub const COPY_MARKER: &str = " 2";

/// Extension the marker is recognised in front of.
pub const EXTENSION: &str = ".wav";

/// Recognises duplicate file names and maps them back to their original.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateMarker {
    /// Full suffix a duplicate name ends with (`" 2.wav"`).
    suffix: String,
}

impl Default for DuplicateMarker {
    fn default() -> Self {
        Self {
            suffix: format!("{COPY_MARKER}{EXTENSION}"),
        }
    }
}

impl DuplicateMarker {
    /// The suffix a duplicate name must end with.
    #[must_use]
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// Derive the original file name for a duplicate.
    ///
    /// Returns `None` when `name` does not end with the marker suffix. Only
    /// the trailing occurrence is replaced. On unix the name is compared as
    /// raw bytes, so names that are not valid UTF-8 match as well.
    #[cfg(unix)]
    #[must_use]
    pub fn original_name(&self, name: &OsStr) -> Option<OsString> {
        use std::os::unix::ffi::OsStrExt;

        let stem = name.as_bytes().strip_suffix(self.suffix.as_bytes())?;
        Some(OsStr::from_bytes(&[stem, EXTENSION.as_bytes()].concat()).to_os_string())
    }

    /// Derive the original file name for a duplicate.
    ///
    /// Returns `None` when `name` does not end with the marker suffix or is
    /// not valid Unicode. Only the trailing occurrence is replaced.
    #[cfg(not(unix))]
    #[must_use]
    pub fn original_name(&self, name: &OsStr) -> Option<OsString> {
        let Some(name) = name.to_str() else {
            log::trace!("Skipping non-Unicode file name: {:?}", name);
            return None;
        };

        let stem = name.strip_suffix(self.suffix.as_str())?;
        Some(OsString::from(format!("{stem}{EXTENSION}")))
    }
}
