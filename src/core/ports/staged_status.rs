//! Staged status port
//!
//! Defines the interface for reading the staged changes of a repository.

use std::path::Path;

use crate::core::error::StagedError;
use crate::core::models::StagedEntry;

/// Source of staged status information
///
/// Implementations compare the index of a repository against `HEAD` and
/// report every differing path with its classification. They must not
/// mutate the index or the working tree.
pub trait StagedStatusSource: Send + Sync {
    /// All staged changes, in whatever order the backend produces them
    fn staged_entries(&self) -> Result<Vec<StagedEntry>, StagedError>;

    /// Directory the source was opened for
    fn root(&self) -> &Path;
}

impl<T: StagedStatusSource + ?Sized> StagedStatusSource for Box<T> {
    fn staged_entries(&self) -> Result<Vec<StagedEntry>, StagedError> {
        (**self).staged_entries()
    }

    fn root(&self) -> &Path {
        (**self).root()
    }
}

impl<T: StagedStatusSource + ?Sized> StagedStatusSource for &T {
    fn staged_entries(&self) -> Result<Vec<StagedEntry>, StagedError> {
        (**self).staged_entries()
    }

    fn root(&self) -> &Path {
        (**self).root()
    }
}
