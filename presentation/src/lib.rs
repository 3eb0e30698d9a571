//! Presentation layer for question-finder
//!
//! This crate contains the CLI definition, card formatters, the load
//! progress reporter, and the interactive browse REPL.

pub mod browse;
pub mod cli;
pub mod config;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use browse::{BrowseCommand, BrowseRepl};
pub use cli::commands::{Cli, OutputFormat};
pub use config::ReplConfig;
pub use output::{
    console::{ConsoleFormatter, set_color_enabled},
    formatter::OutputFormatter,
};
pub use progress::reporter::{LoadProgressReporter, SimpleProgress};
