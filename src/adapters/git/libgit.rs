//! Staged status via libgit2
//!
//! In-process alternative to the command line source. Compares the index
//! against `HEAD` with rename detection, which matches what
//! `git diff --cached --find-renames` reports.
//!
//! Two things git does implicitly have to be done by hand here:
//!
//! - `GIT_INDEX_FILE` is honored. `git commit -a` and `git commit <paths>`
//!   run the pre-commit hook against a temporary index named by it.
//! - Intent-to-add entries (`git add -N`) are skipped. They sit in the index
//!   without content and `git diff --cached` does not report them.

use std::path::{Path, PathBuf};

use git2::{
    ErrorClass, ErrorCode, Index, Repository, Status, StatusEntry, StatusOptions, StatusShow,
};
use log::debug;

use crate::core::error::StagedError;
use crate::core::models::{StagedEntry, StatusKind};
use crate::core::ports::StagedStatusSource;

/// Environment variable git uses to point at an alternate index
pub const INDEX_FILE_ENV: &str = "GIT_INDEX_FILE";

/// `GIT_INDEX_ENTRY_INTENT_TO_ADD` from libgit2's `index.h`
const INTENT_TO_ADD: u16 = 1 << 13;

/// libgit2 implementation of [`StagedStatusSource`]
///
/// The repository is discovered afresh on every query so index changes
/// made between calls are always observed.
#[derive(Debug, Clone)]
pub struct LibGitSource {
    /// Directory discovery starts from
    workdir: PathBuf,
    /// Index to read instead of the repository's own
    index_file: Option<PathBuf>,
}

impl LibGitSource {
    /// Create a source for `workdir`
    ///
    /// Reads the index named by `GIT_INDEX_FILE` when that is set at query
    /// time, like git itself.
    #[must_use]
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: workdir.into(),
            index_file: None,
        }
    }

    /// Read a specific index file, ignoring `GIT_INDEX_FILE`
    #[must_use]
    pub fn with_index_file(mut self, index_file: impl Into<PathBuf>) -> Self {
        self.index_file = Some(index_file.into());
        self
    }

    fn index_file(&self) -> Option<PathBuf> {
        self.index_file.clone().or_else(|| {
            std::env::var_os(INDEX_FILE_ENV)
                .filter(|p| !p.is_empty())
                .map(PathBuf::from)
        })
    }

    fn open(&self) -> Result<Repository, StagedError> {
        if !self.workdir.is_dir() {
            return Err(StagedError::NotARepository {
                path: self.workdir.clone(),
            });
        }

        let repo = Repository::discover(&self.workdir).map_err(|e| {
            if e.code() == ErrorCode::NotFound {
                StagedError::NotARepository {
                    path: self.workdir.clone(),
                }
            } else {
                StagedError::Git(e)
            }
        })?;

        if repo.is_bare() {
            return Err(StagedError::NotARepository {
                path: self.workdir.clone(),
            });
        }

        if let Some(index_file) = self.index_file() {
            debug!("reading index {}", index_file.display());
            let mut index = Index::open(&index_file).map_err(index_error)?;
            repo.set_index(&mut index).map_err(index_error)?;
        }

        Ok(repo)
    }
}

impl StagedStatusSource for LibGitSource {
    fn staged_entries(&self) -> Result<Vec<StagedEntry>, StagedError> {
        let repo = self.open()?;
        let index = repo.index().map_err(index_error)?;

        let mut opts = StatusOptions::new();
        opts.show(StatusShow::Index)
            .include_untracked(false)
            .include_ignored(false)
            .renames_head_to_index(true);

        let statuses = repo.statuses(Some(&mut opts)).map_err(index_error)?;

        let mut entries = Vec::with_capacity(statuses.len());
        for entry in statuses.iter() {
            let Some(kind) = classify(entry.status()) else {
                continue;
            };
            let path = index_path(&entry)?;
            if kind == StatusKind::Added && is_intent_to_add(&index, &path) {
                debug!("skipping intent-to-add entry {path}");
                continue;
            }
            entries.push(StagedEntry::new(path, kind));
        }

        debug!("libgit2 reported {} staged entries", entries.len());
        Ok(entries)
    }

    fn root(&self) -> &Path {
        &self.workdir
    }
}

fn index_error(e: git2::Error) -> StagedError {
    if e.class() == ErrorClass::Index {
        StagedError::IndexUnavailable(e.message().to_string())
    } else {
        StagedError::Git(e)
    }
}

/// True if the stage-0 entry for `path` was added with `git add -N`
fn is_intent_to_add(index: &Index, path: &str) -> bool {
    index
        .get_path(Path::new(path), 0)
        .is_some_and(|entry| entry.flags_extended & INTENT_TO_ADD != 0)
}

/// Map index-side status flags to a kind
///
/// Returns `None` for entries that only differ in the working tree.
#[must_use]
pub fn classify(status: Status) -> Option<StatusKind> {
    if status.is_conflicted() {
        Some(StatusKind::Unmerged)
    } else if status.is_index_renamed() {
        Some(StatusKind::Renamed)
    } else if status.is_index_new() {
        Some(StatusKind::Added)
    } else if status.is_index_deleted() {
        Some(StatusKind::Deleted)
    } else if status.is_index_typechange() {
        Some(StatusKind::TypeChanged)
    } else if status.is_index_modified() {
        Some(StatusKind::Modified)
    } else {
        None
    }
}

/// Path of the entry as it exists in the index
fn index_path(entry: &StatusEntry<'_>) -> Result<String, StagedError> {
    let bytes = entry
        .head_to_index()
        .and_then(|delta| delta.new_file().path_bytes().or_else(|| delta.old_file().path_bytes()))
        .unwrap_or_else(|| entry.path_bytes());

    std::str::from_utf8(bytes).map(str::to_string).map_err(|e| {
        StagedError::UnparseableOutput(format!(
            "non UTF-8 path {:?}: {e}",
            String::from_utf8_lossy(bytes)
        ))
    })
}
