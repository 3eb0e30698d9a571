//! `[output]` section: how results are printed

use qfinder_domain::OutputFormat;
use serde::{Deserialize, Serialize};

/// Output settings; command-line flags take precedence over both fields
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Result format when `-o/--output` is not given (cards by default)
    pub format: Option<OutputFormat>,
    /// Style cards with terminal colors
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
        }
    }
}

impl FileOutputConfig {
    /// Format to print with: the flag, else the configured one, else cards
    pub fn resolve_format(&self, flag: Option<OutputFormat>) -> OutputFormat {
        flag.or(self.format).unwrap_or_default()
    }

    /// Colors stay on only if configured and not turned off by `--no-color`
    pub fn color_enabled(&self, no_color_flag: bool) -> bool {
        self.color && !no_color_flag
    }
}
