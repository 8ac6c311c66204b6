//! imagehook - list newly staged files from a git pre-commit hook
//!
//! Prints the repository-relative paths of files staged as newly added, one
//! per line, so a hook script can hand them to an image tool. Any failure
//! exits non-zero, which aborts the commit.

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

mod cli;

/// Main entry point for the imagehook CLI
fn main() -> anyhow::Result<()> {
    cli::run()
}
