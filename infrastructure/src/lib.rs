//! Infrastructure layer for question-finder
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer: question sources (local file, HTTP) and
//! configuration file loading.

pub mod config;
pub mod source;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileFiltersConfig, FileOutputConfig,
    FileReplConfig, FileSourceConfig,
};
#[cfg(feature = "http")]
pub use source::http::HttpQuestionSource;
pub use source::{file::FileQuestionSource, location::LocationSource};
