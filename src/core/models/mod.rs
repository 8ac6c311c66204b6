//! Domain models for imagehook
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`StagedEntry`] - A staged path and how it changed
//! - [`StatusKind`] - The change classification reported by git
//! - [`StagedFile`] - A newly added path handed to hook callers

mod staged;

pub use staged::{StagedEntry, StagedFile, StatusKind};
