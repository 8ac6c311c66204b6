//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `git/` - Staged status from git (command line or libgit2)

pub mod git;
