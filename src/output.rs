//! Output formatting for human and JSON modes
//!
//! Human mode prints one path per line so a shell hook can pipe it straight
//! into an image tool. JSON mode is for callers that want structure.

use serde::Serialize;

use crate::adapters::git::GitBackend;
use crate::core::models::StagedFile;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of listing newly staged files
#[derive(Debug, Serialize)]
pub struct StagedListResult {
    /// Repository directory the query ran in
    pub root: String,
    /// Backend that produced the list
    pub backend: GitBackend,
    /// Newly added files, sorted
    pub files: Vec<StagedFile>,
    /// Number of files
    pub count: usize,
}

impl StagedListResult {
    /// Build a result from a lister outcome
    #[must_use]
    pub fn new(root: impl Into<String>, backend: GitBackend, files: Vec<StagedFile>) -> Self {
        let count = files.len();
        Self {
            root: root.into(),
            backend,
            files,
            count,
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) -> serde_json::Result<()> {
        print!("{}", self.to_text(mode)?);
        Ok(())
    }

    /// The text [`render`](Self::render) prints
    pub fn to_text(&self, mode: OutputMode) -> serde_json::Result<String> {
        match mode {
            OutputMode::Human => Ok(self.human_text()),
            OutputMode::Json => {
                let mut json = serde_json::to_string_pretty(self)?;
                json.push('\n');
                Ok(json)
            },
        }
    }

    fn human_text(&self) -> String {
        if self.files.is_empty() {
            log::info!("No newly staged files.");
            return String::new();
        }

        self.files.iter().fold(String::new(), |mut out, file| {
            out.push_str(file.as_str());
            out.push('\n');
            out
        })
    }
}
