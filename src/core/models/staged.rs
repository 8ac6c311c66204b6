//! Staged entries as reported by version control
//!
//! A [`StagedEntry`] pairs a repository-relative path with the
//! [`StatusKind`] git assigned to it when comparing the index to `HEAD`.
//! A [`StagedFile`] is the narrower result handed to hook callers: just the
//! path of a file that is newly added.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Classification of a staged change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusKind {
    /// Path has no version in `HEAD` (git status letter `A`)
    Added,
    /// Content changed relative to `HEAD` (`M`)
    Modified,
    /// Path removed from the index (`D`)
    Deleted,
    /// Path moved from another tracked path (`R`)
    Renamed,
    /// Path copied from another tracked path (`C`)
    Copied,
    /// File type changed, e.g. regular file to symlink (`T`)
    TypeChanged,
    /// Merge conflict still present in the index (`U`)
    Unmerged,
    /// Anything git reports that is not listed above (`X`, `B`)
    Unknown,
}

impl StatusKind {
    /// Map a `--name-status` letter to a kind
    ///
    /// Only the first character matters; `R100` and `C075` carry a
    /// similarity score after the letter.
    #[must_use]
    pub fn from_status_letter(letter: char) -> Self {
        match letter {
            'A' => Self::Added,
            'M' => Self::Modified,
            'D' => Self::Deleted,
            'R' => Self::Renamed,
            'C' => Self::Copied,
            'T' => Self::TypeChanged,
            'U' => Self::Unmerged,
            _ => Self::Unknown,
        }
    }

    /// Whether git reports two paths (source, destination) for this kind
    #[must_use]
    pub const fn has_source_path(self) -> bool {
        matches!(self, Self::Renamed | Self::Copied)
    }
}

impl fmt::Display for StatusKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Added => write!(f, "added"),
            Self::Modified => write!(f, "modified"),
            Self::Deleted => write!(f, "deleted"),
            Self::Renamed => write!(f, "renamed"),
            Self::Copied => write!(f, "copied"),
            Self::TypeChanged => write!(f, "typechanged"),
            Self::Unmerged => write!(f, "unmerged"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

/// One staged change: where it lives and what happened to it
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StagedEntry {
    /// Repository-relative path, forward slashes. Destination path for
    /// renames and copies.
    pub path: String,
    /// What git says happened to the path
    pub kind: StatusKind,
}

impl StagedEntry {
    /// Create a new entry
    #[must_use]
    pub fn new(path: impl Into<String>, kind: StatusKind) -> Self {
        Self {
            path: path.into(),
            kind,
        }
    }

    /// Shorthand for an added entry
    #[must_use]
    pub fn added(path: impl Into<String>) -> Self {
        Self::new(path, StatusKind::Added)
    }

    /// True if the path is newly added to version control
    #[must_use]
    pub fn is_new(&self) -> bool {
        self.kind == StatusKind::Added
    }
}

/// Path of a newly added staged file, relative to the repository root
///
/// Ordering is plain byte-wise string order, so `subdir/test-2.jpg` sorts
/// before `test-1.jpg`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StagedFile(String);

impl StagedFile {
    /// Wrap a repository-relative path
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// The path as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume into the owned path string
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for StagedFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for StagedFile {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<StagedFile> for String {
    fn from(file: StagedFile) -> Self {
        file.0
    }
}

impl PartialEq<str> for StagedFile {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for StagedFile {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl FromStr for StatusKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "added" => Ok(Self::Added),
            "modified" => Ok(Self::Modified),
            "deleted" => Ok(Self::Deleted),
            "renamed" => Ok(Self::Renamed),
            "copied" => Ok(Self::Copied),
            "typechanged" => Ok(Self::TypeChanged),
            "unmerged" => Ok(Self::Unmerged),
            "unknown" => Ok(Self::Unknown),
            _ => Err(format!("Invalid status kind: {s}")),
        }
    }
}
