//! Centralized path definitions for imagehook
//!
//! ## Storage Layout
//!
//! ```text
//! ~/.imagehook/
//! └── config.toml               # Backend selection, git program
//! ```
//!
//! `IMAGEHOOK_CONFIG` points at a different config file when set.

use std::path::PathBuf;

/// Global config directory name
const GLOBAL_DIR: &str = ".imagehook";

/// Global config filename
const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Environment variable overriding the config file location
pub const CONFIG_ENV: &str = "IMAGEHOOK_CONFIG";

/// Get the global imagehook directory.
///
/// Returns `~/.imagehook/`.
#[must_use]
pub fn global_config_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("~")).join(GLOBAL_DIR)
}

/// Get the global config file path.
///
/// Returns `$IMAGEHOOK_CONFIG` if set and non-empty, otherwise
/// `~/.imagehook/config.toml`.
#[must_use]
pub fn global_config() -> PathBuf {
    std::env::var_os(CONFIG_ENV)
        .filter(|p| !p.is_empty())
        .map_or_else(|| global_config_dir().join(GLOBAL_CONFIG_FILE), PathBuf::from)
}
