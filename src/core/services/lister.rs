//! Staged file lister
//!
//! Turns the raw staged status report of a repository into the sorted list
//! of newly added paths a pre-commit hook should process.

use log::debug;

use crate::core::error::StagedError;
use crate::core::models::{StagedEntry, StagedFile};
use crate::core::ports::StagedStatusSource;

/// Lists files staged as newly added
#[derive(Debug, Clone)]
pub struct StagedFileLister<S> {
    source: S,
}

impl<S: StagedStatusSource> StagedFileLister<S> {
    /// Create a lister reading from `source`
    #[must_use]
    pub const fn new(source: S) -> Self {
        Self { source }
    }

    /// The underlying status source
    #[must_use]
    pub const fn source(&self) -> &S {
        &self.source
    }

    /// Fetch every file staged as newly added
    ///
    /// Paths are repository-relative with forward slashes, unique, and
    /// sorted by plain string comparison. No added files yields an empty
    /// list.
    ///
    /// # Errors
    ///
    /// Propagates any failure of the status source unchanged.
    pub fn fetch_new_staged_files(&self) -> Result<Vec<StagedFile>, StagedError> {
        let entries = self.source.staged_entries()?;
        let total = entries.len();
        let files = select_new_files(entries);
        debug!(
            "{} of {} staged entries are new in {}",
            files.len(),
            total,
            self.source.root().display()
        );
        Ok(files)
    }
}

/// Keep added entries, sort by path, drop duplicates
///
/// Classification is taken as reported; renames and copies are never
/// treated as additions.
#[must_use]
pub fn select_new_files<I>(entries: I) -> Vec<StagedFile>
where
    I: IntoIterator<Item = StagedEntry>,
{
    let mut files: Vec<StagedFile> = entries
        .into_iter()
        .filter(StagedEntry::is_new)
        .map(|entry| StagedFile::new(entry.path))
        .collect();
    files.sort_unstable();
    files.dedup();
    files
}
