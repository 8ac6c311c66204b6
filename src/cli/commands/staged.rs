//! List newly staged files
//!
//! Called from a pre-commit hook; stdout is the path list and nothing else.

use std::path::PathBuf;

use anyhow::Context;

use imagehook::output::{OutputMode, StagedListResult};
use imagehook::{GitBackend, GlobalConfig, fetch_new_staged_files_in};

/// Print files staged as newly added
///
/// `backend` overrides the configured backend for this run.
pub fn staged(
    root: Option<PathBuf>,
    backend: Option<GitBackend>,
    output_mode: OutputMode,
) -> anyhow::Result<()> {
    let mut config = GlobalConfig::load()?;
    if let Some(backend) = backend {
        config.git.backend = backend;
    }

    let root = match root {
        Some(root) => root,
        None => std::env::current_dir().context("Failed to determine current directory")?,
    };

    log::debug!("listing new staged files in {} via {}", root.display(), config.git.backend);
    let files = fetch_new_staged_files_in(&root, &config.git)
        .with_context(|| format!("Failed to list staged files in {}", root.display()))?;

    StagedListResult::new(root.to_string_lossy(), config.git.backend, files)
        .render(output_mode)
        .context("Failed to render staged file list")
}
