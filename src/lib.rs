//! imagehook - list newly staged files from a git pre-commit hook
//!
//! A pre-commit hook that compresses or lints images needs to know which
//! files are being added by the commit. This library asks git for the
//! staged changes, keeps the entries classified as newly added, and returns
//! their repository-relative paths in sorted order.
//!
//! ```no_run
//! let files = imagehook::fetch_new_staged_files()?;
//! for file in &files {
//!     println!("{file}");
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

use std::path::Path;

use anyhow::Context;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod adapters;
pub mod config;
pub mod core;
pub mod output;
pub mod paths;

pub use crate::adapters::git::{GitBackend, GitCliSource, LibGitSource};
pub use crate::config::{GitConfig, GlobalConfig};
pub use crate::core::error::{ErrorKind, StagedError};
pub use crate::core::models::{StagedEntry, StagedFile, StatusKind};
pub use crate::core::ports::StagedStatusSource;
pub use crate::core::services::{StagedFileLister, select_new_files};

/// List newly staged files of the repository containing `root`
///
/// `root` may be the top of the work tree or any directory below it; the
/// returned paths are relative to the top either way.
pub fn fetch_new_staged_files_in(
    root: &Path,
    git: &GitConfig,
) -> Result<Vec<StagedFile>, StagedError> {
    let source = git.backend.open(root, &git.program);
    StagedFileLister::new(source).fetch_new_staged_files()
}

/// List newly staged files of the repository containing the current directory
///
/// Uses the global configuration for backend selection. Lister failures can
/// be recovered with `err.downcast_ref::<StagedError>()`.
pub fn fetch_new_staged_files() -> anyhow::Result<Vec<StagedFile>> {
    let config = GlobalConfig::load()?;
    let cwd = std::env::current_dir().context("Failed to determine current directory")?;
    Ok(fetch_new_staged_files_in(&cwd, &config.git)?)
}
