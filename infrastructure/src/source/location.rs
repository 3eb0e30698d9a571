//! Location-based source selection

use super::file::FileQuestionSource;
#[cfg(feature = "http")]
use super::http::HttpQuestionSource;
use async_trait::async_trait;
use qfinder_application::{LoadFailure, QuestionSource};
use qfinder_domain::QuestionRecord;

/// A question source chosen from a location string.
///
/// `http://` and `https://` locations are fetched over HTTP; anything else
/// is a path on the local file system.
#[derive(Debug, Clone)]
pub enum LocationSource {
    File(FileQuestionSource),
    #[cfg(feature = "http")]
    Http(HttpQuestionSource),
}

impl LocationSource {
    pub fn open(location: &str, max_bytes: u64) -> Result<Self, LoadFailure> {
        let location = location.trim();
        if !is_url(location) {
            return Ok(LocationSource::File(FileQuestionSource::new(
                location, max_bytes,
            )));
        }

        open_remote(location, max_bytes)
    }
}

#[cfg(feature = "http")]
fn open_remote(url: &str, max_bytes: u64) -> Result<LocationSource, LoadFailure> {
    Ok(LocationSource::Http(HttpQuestionSource::new(url, max_bytes)))
}

#[cfg(not(feature = "http"))]
fn open_remote(url: &str, _max_bytes: u64) -> Result<LocationSource, LoadFailure> {
    Err(LoadFailure::Transport {
        location: url.to_string(),
        message: "built without HTTP support (enable the `http` feature)".to_string(),
    })
}

fn is_url(location: &str) -> bool {
    let lower = location.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

#[async_trait]
impl QuestionSource for LocationSource {
    fn location(&self) -> &str {
        match self {
            LocationSource::File(source) => source.location(),
            #[cfg(feature = "http")]
            LocationSource::Http(source) => source.location(),
        }
    }

    async fn fetch(&self) -> Result<Vec<QuestionRecord>, LoadFailure> {
        match self {
            LocationSource::File(source) => source.fetch().await,
            #[cfg(feature = "http")]
            LocationSource::Http(source) => source.fetch().await,
        }
    }
}
