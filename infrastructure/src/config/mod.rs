//! Configuration file loading for question-finder
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. `QFINDER_*` environment variables
//! 3. Project root: `./question-finder.toml` or `./.question-finder.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/question-finder/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileFiltersConfig, FileOutputConfig, FileReplConfig,
    FileSourceConfig,
};
pub use loader::ConfigLoader;
