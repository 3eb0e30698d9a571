//! Presentation-level configuration
//!
//! Configuration for the interactive browse REPL.

use std::path::PathBuf;

/// REPL configuration for the presentation layer
#[derive(Debug, Clone, Default)]
pub struct ReplConfig {
    /// Explicit history file; `None` uses the platform data directory
    pub history_file: Option<PathBuf>,
}

impl ReplConfig {
    pub fn with_history_file(mut self, path: Option<impl Into<PathBuf>>) -> Self {
        self.history_file = path.map(Into::into);
        self
    }

    /// Resolved history file location, if any can be determined
    pub fn history_path(&self) -> Option<PathBuf> {
        self.history_file.clone().or_else(|| {
            dirs::data_dir().map(|p| p.join("question-finder").join("history.txt"))
        })
    }
}
