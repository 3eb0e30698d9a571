//! HTTP question source: one GET request for the whole document

use async_trait::async_trait;
use qfinder_application::{LoadFailure, QuestionSource, parse_questions};
use qfinder_domain::QuestionRecord;
use tracing::debug;

const USER_AGENT: &str = concat!("question-finder/", env!("CARGO_PKG_VERSION"));

/// Fetches the question document from an `http(s)://` URL
#[derive(Debug, Clone)]
pub struct HttpQuestionSource {
    client: reqwest::Client,
    url: String,
    max_bytes: u64,
}

impl HttpQuestionSource {
    pub fn new(url: impl Into<String>, max_bytes: u64) -> Self {
        Self::with_client(reqwest::Client::new(), url, max_bytes)
    }

    pub fn with_client(client: reqwest::Client, url: impl Into<String>, max_bytes: u64) -> Self {
        Self {
            client,
            url: url.into(),
            max_bytes,
        }
    }

    fn transport_failure(&self, e: reqwest::Error) -> LoadFailure {
        LoadFailure::Transport {
            location: self.url.clone(),
            message: e.to_string(),
        }
    }

    fn too_large(&self, size: u64) -> LoadFailure {
        LoadFailure::TooLarge {
            location: self.url.clone(),
            size,
            limit: self.max_bytes,
        }
    }
}

#[async_trait]
impl QuestionSource for HttpQuestionSource {
    fn location(&self) -> &str {
        &self.url
    }

    async fn fetch(&self) -> Result<Vec<QuestionRecord>, LoadFailure> {
        let mut response = self
            .client
            .get(&self.url)
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| self.transport_failure(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadFailure::Status {
                location: self.url.clone(),
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        if let Some(length) = response.content_length()
            && length > self.max_bytes
        {
            return Err(self.too_large(length));
        }

        // Chunked bodies carry no length up front; stop reading at the limit
        let mut body = Vec::new();
        while let Some(chunk) = response
            .chunk()
            .await
            .map_err(|e| self.transport_failure(e))?
        {
            body.extend_from_slice(&chunk);
            if body.len() as u64 > self.max_bytes {
                return Err(self.too_large(body.len() as u64));
            }
        }
        debug!("Received {} bytes from {}", body.len(), self.url);

        parse_questions(&body)
    }
}
