//! Git integration adapter
//!
//! Implements `StagedStatusSource` two ways:
//!
//! - [`cli`] - Shells out to the `git` executable
//! - [`libgit`] - Reads the index in-process through libgit2

pub mod cli;
pub mod libgit;

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::ports::StagedStatusSource;

pub use cli::{DEFAULT_GIT_PROGRAM, GitCliSource, parse_name_status};
pub use libgit::{INDEX_FILE_ENV, LibGitSource};

/// Which implementation reads the staged status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GitBackend {
    /// The `git` command line (default)
    #[default]
    Cli,
    /// libgit2, no subprocess
    LibGit2,
}

impl GitBackend {
    /// Build a status source rooted at `workdir`
    ///
    /// `program` is the git executable and only matters for [`GitBackend::Cli`].
    #[must_use]
    pub fn open(self, workdir: impl Into<PathBuf>, program: &str) -> Box<dyn StagedStatusSource> {
        match self {
            Self::Cli => Box::new(GitCliSource::with_program(workdir, program)),
            Self::LibGit2 => Box::new(LibGitSource::new(workdir)),
        }
    }
}

impl fmt::Display for GitBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cli => write!(f, "cli"),
            Self::LibGit2 => write!(f, "libgit2"),
        }
    }
}

impl FromStr for GitBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cli" | "git" => Ok(Self::Cli),
            "libgit2" | "git2" => Ok(Self::LibGit2),
            _ => Err(format!("Invalid backend: {s}. Use: cli, libgit2")),
        }
    }
}
