//! Errors raised while querying staged changes
//!
//! Every failure of the underlying version-control query is surfaced to the
//! caller unchanged. An empty result means "nothing newly staged", never
//! "could not tell".

use std::path::PathBuf;

use thiserror::Error;

/// Broad class of a [`StagedError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Not inside a git work tree, or the index cannot be read
    Environment,
    /// The version-control query itself failed or returned garbage
    ToolInvocation,
}

/// Errors that can occur when listing staged files
#[derive(Debug, Error)]
pub enum StagedError {
    /// The directory is not inside a git work tree
    #[error("not a git repository: {}", .path.display())]
    NotARepository {
        /// Directory the lookup started from
        path: PathBuf,
    },

    /// The repository index exists but could not be read
    #[error("git index unavailable: {0}")]
    IndexUnavailable(String),

    /// The git executable could not be started
    #[error("failed to run {program}: {source}")]
    Spawn {
        /// Program that was invoked
        program: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The git command exited unsuccessfully
    #[error("`{command}` failed ({}): {stderr}", describe_exit(*.code))]
    CommandFailed {
        /// Command line that was run
        command: String,
        /// Exit code, if the process exited normally
        code: Option<i32>,
        /// Trimmed standard error output
        stderr: String,
    },

    /// The git output did not have the expected shape
    #[error("unparseable git output: {0}")]
    UnparseableOutput(String),

    /// libgit2 reported an error
    #[error("git error: {0}")]
    Git(#[from] git2::Error),
}

fn describe_exit(code: Option<i32>) -> String {
    code.map_or_else(|| "killed by signal".to_string(), |c| format!("exit code {c}"))
}

impl StagedError {
    /// Classify the error
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::NotARepository { .. } | Self::IndexUnavailable(_) => ErrorKind::Environment,
            Self::Spawn { .. }
            | Self::CommandFailed { .. }
            | Self::UnparseableOutput(_)
            | Self::Git(_) => ErrorKind::ToolInvocation,
        }
    }

    /// True for errors caused by the surrounding environment
    #[must_use]
    pub const fn is_environment(&self) -> bool {
        matches!(self.kind(), ErrorKind::Environment)
    }
}
