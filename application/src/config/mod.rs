//! Application-level configuration.
//!
//! - [`FilterConfig`] - which facets are indexed and offered for filtering

pub mod filter_config;

pub use filter_config::FilterConfig;
