//! Staged status via the git command line
//!
//! Runs `git diff --cached --name-status -z --find-renames` and parses the
//! NUL-separated records. `-z` keeps paths verbatim (no quoting of unusual
//! characters). `git diff` is porcelain, so options that user config could
//! flip (`diff.relative`, `color.diff`, `diff.external`) are pinned on the
//! command line and paths stay relative to the top of the work tree.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use log::{debug, trace};

use crate::core::error::StagedError;
use crate::core::models::{StagedEntry, StatusKind};
use crate::core::ports::StagedStatusSource;

/// Default git executable
pub const DEFAULT_GIT_PROGRAM: &str = "git";

const DIFF_ARGS: [&str; 8] = [
    "diff",
    "--cached",
    "--name-status",
    "-z",
    "--find-renames",
    "--no-relative",
    "--no-color",
    "--no-ext-diff",
];

/// Git command line implementation of [`StagedStatusSource`]
#[derive(Debug, Clone)]
pub struct GitCliSource {
    /// Directory git is run from
    workdir: PathBuf,
    /// Executable to invoke
    program: String,
}

impl GitCliSource {
    /// Create a source for `workdir` using the `git` on `PATH`
    #[must_use]
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self::with_program(workdir, DEFAULT_GIT_PROGRAM)
    }

    /// Create a source for `workdir` using a specific git executable
    #[must_use]
    pub fn with_program(workdir: impl Into<PathBuf>, program: impl Into<String>) -> Self {
        Self {
            workdir: workdir.into(),
            program: program.into(),
        }
    }

    /// Executable this source invokes
    #[must_use]
    pub fn program(&self) -> &str {
        &self.program
    }

    fn run(&self, args: &[&str]) -> Result<Output, StagedError> {
        trace!("running {} {} in {}", self.program, args.join(" "), self.workdir.display());
        Command::new(&self.program)
            .current_dir(&self.workdir)
            .args(args)
            .output()
            .map_err(|source| StagedError::Spawn {
                program: self.program.clone(),
                source,
            })
    }

    fn ensure_work_tree(&self) -> Result<(), StagedError> {
        let not_a_repo = || StagedError::NotARepository {
            path: self.workdir.clone(),
        };

        if !self.workdir.is_dir() {
            return Err(not_a_repo());
        }

        let output = self.run(&["rev-parse", "--is-inside-work-tree"])?;
        if output.status.success() && String::from_utf8_lossy(&output.stdout).trim() == "true" {
            Ok(())
        } else {
            Err(not_a_repo())
        }
    }
}

impl StagedStatusSource for GitCliSource {
    fn staged_entries(&self) -> Result<Vec<StagedEntry>, StagedError> {
        self.ensure_work_tree()?;

        let output = self.run(&DIFF_ARGS)?;
        if !output.status.success() {
            return Err(StagedError::CommandFailed {
                command: format!("{} {}", self.program, DIFF_ARGS.join(" ")),
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let entries = parse_name_status(&output.stdout)?;
        debug!("git reported {} staged entries", entries.len());
        Ok(entries)
    }

    fn root(&self) -> &Path {
        &self.workdir
    }
}

/// Parse `git diff --name-status -z` output
///
/// Records are `STATUS\0PATH\0`, or `STATUS\0SRC\0DST\0` for renames and
/// copies, where `STATUS` is a letter optionally followed by a score
/// (`R100`). The destination path is kept for two-path records.
///
/// # Errors
///
/// Returns [`StagedError::UnparseableOutput`] for truncated records, empty
/// status tokens, or paths that are not valid UTF-8.
pub fn parse_name_status(raw: &[u8]) -> Result<Vec<StagedEntry>, StagedError> {
    let mut fields = raw.split(|&b| b == 0);
    let mut entries = Vec::new();

    while let Some(status) = fields.next() {
        if status.is_empty() {
            // Trailing terminator after the last record
            continue;
        }

        let status = utf8_field(status)?;
        let letter = status
            .chars()
            .next()
            .ok_or_else(|| StagedError::UnparseableOutput("empty status".to_string()))?;
        let kind = StatusKind::from_status_letter(letter);

        let mut path = next_path(&mut fields, status)?;
        if kind.has_source_path() {
            path = next_path(&mut fields, status)?;
        }

        entries.push(StagedEntry::new(path, kind));
    }

    Ok(entries)
}

fn next_path<'a, I>(fields: &mut I, status: &str) -> Result<String, StagedError>
where
    I: Iterator<Item = &'a [u8]>,
{
    match fields.next() {
        Some(field) if !field.is_empty() => utf8_field(field).map(str::to_string),
        _ => Err(StagedError::UnparseableOutput(format!("missing path after status {status}"))),
    }
}

fn utf8_field(field: &[u8]) -> Result<&str, StagedError> {
    std::str::from_utf8(field).map_err(|e| {
        StagedError::UnparseableOutput(format!(
            "non UTF-8 field {:?}: {e}",
            String::from_utf8_lossy(field)
        ))
    })
}
