//! Source configuration from TOML (`[source]` section)

use super::ConfigValidationError;
use serde::{Deserialize, Serialize};

/// Default location of the question document, relative to the working directory
pub const DEFAULT_LOCATION: &str = "data/questions.json";

/// Default upper bound on the document size (10 MB)
pub const DEFAULT_MAX_BYTES: u64 = 10 * 1024 * 1024;

/// Raw source configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSourceConfig {
    /// Local path or `http(s)://` URL of the question document
    pub location: String,
    /// Refuse documents larger than this many bytes
    pub max_bytes: u64,
}

impl Default for FileSourceConfig {
    fn default() -> Self {
        Self {
            location: DEFAULT_LOCATION.to_string(),
            max_bytes: DEFAULT_MAX_BYTES,
        }
    }
}

impl FileSourceConfig {
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.location.trim().is_empty() {
            return Err(ConfigValidationError::EmptySourceLocation);
        }
        if self.max_bytes == 0 {
            return Err(ConfigValidationError::ZeroMaxBytes);
        }
        Ok(())
    }
}
