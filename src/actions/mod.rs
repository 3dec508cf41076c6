//! File actions module.
//!
//! Deletion of duplicates that have been matched against an existing
//! original. Removal is permanent.
//!
//! ```no_run
//! use dupsweep::actions::remove_duplicate;
//! use std::path::Path;
//!
//! let record = remove_duplicate(Path::new("a 2.wav"), Path::new("a.wav"));
//! ```

pub mod delete;

pub use delete::{remove_duplicate, DeleteError, DeletionRecord};
