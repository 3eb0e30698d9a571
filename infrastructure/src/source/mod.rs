//! Question source adapters
//!
//! - [`file::FileQuestionSource`] - reads a local JSON document
//! - [`http::HttpQuestionSource`] - one GET against an `http(s)://` URL (feature `http`)
//! - [`location::LocationSource`] - picks one of the above from a location string

pub mod file;
#[cfg(feature = "http")]
pub mod http;
pub mod location;
