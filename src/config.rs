//! Global configuration management
//!
//! Config is stored at `~/.imagehook/config.toml`:
//!
//! ```toml
//! [git]
//! backend = "cli"   # or "libgit2"
//! program = "git"
//! ```
//!
//! Precedence, lowest first: defaults, config file, `IMAGEHOOK_BACKEND`,
//! command line flags.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::adapters::git::{DEFAULT_GIT_PROGRAM, GitBackend};
use crate::paths;

/// Environment variable overriding the configured backend
pub const BACKEND_ENV: &str = "IMAGEHOOK_BACKEND";

/// Global imagehook configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Git access settings
    #[serde(default)]
    pub git: GitConfig,
}

/// How staged status is read
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitConfig {
    /// Backend used to query the index
    #[serde(default)]
    pub backend: GitBackend,
    /// Git executable for the command line backend
    #[serde(default = "default_program")]
    pub program: String,
}

fn default_program() -> String {
    DEFAULT_GIT_PROGRAM.to_string()
}

impl Default for GitConfig {
    fn default() -> Self {
        Self {
            backend: GitBackend::default(),
            program: default_program(),
        }
    }
}

impl GlobalConfig {
    /// Get the config file path
    #[must_use]
    pub fn config_path() -> PathBuf {
        paths::global_config()
    }

    /// Load config from the default location with environment overrides
    ///
    /// A missing file yields defaults. A file that exists but cannot be
    /// read or parsed is an error, since silently falling back would change
    /// which backend runs.
    pub fn load() -> anyhow::Result<Self> {
        let mut config = Self::load_from(&Self::config_path())?;
        config.apply_env()?;
        Ok(config)
    }

    /// Load config from a specific file, without environment overrides
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Invalid config {}", path.display()))?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Apply `IMAGEHOOK_BACKEND` if set
    pub fn apply_env(&mut self) -> anyhow::Result<()> {
        if let Ok(value) = std::env::var(BACKEND_ENV) {
            if value.trim().is_empty() {
                return Ok(());
            }
            self.git.backend = value
                .parse()
                .map_err(|e: String| anyhow::anyhow!("Invalid {BACKEND_ENV}: {e}"))?;
            log::debug!("backend set to {} by {BACKEND_ENV}", self.git.backend);
        }
        Ok(())
    }
}
