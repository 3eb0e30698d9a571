//! Question source port
//!
//! Defines where the question document comes from. Adapters for local
//! files and HTTP live in the infrastructure layer.

use async_trait::async_trait;
use qfinder_domain::QuestionRecord;
use thiserror::Error;

/// Why the question document could not be loaded.
///
/// This is the only failure of the load pipeline. It is reported to the
/// user as is; there is no retry and no partial result.
#[derive(Error, Debug)]
pub enum LoadFailure {
    #[error("{location} returned HTTP {status} {reason}")]
    Status {
        location: String,
        status: u16,
        reason: String,
    },

    #[error("could not fetch {location}: {message}")]
    Transport { location: String, message: String },

    #[error("could not read {location}: {message}")]
    Read { location: String, message: String },

    #[error("{location} is too large: {size} bytes (max: {limit} bytes)")]
    TooLarge {
        location: String,
        size: u64,
        limit: u64,
    },

    #[error("invalid question document: {0}")]
    Parse(String),
}

/// Source of the question document
#[async_trait]
pub trait QuestionSource: Send + Sync {
    /// Human-readable location (path or URL), used in logs and messages
    fn location(&self) -> &str;

    /// Fetch and parse the whole document
    async fn fetch(&self) -> Result<Vec<QuestionRecord>, LoadFailure>;
}

/// Parse a question document: a JSON array of question objects
pub fn parse_questions(bytes: &[u8]) -> Result<Vec<QuestionRecord>, LoadFailure> {
    serde_json::from_slice(bytes).map_err(|e| LoadFailure::Parse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_array() {
        let json = br#"[
            {"exam": "70th BPSC", "paper": "GS 1", "question": "Q1", "topic": "History", "subtopic": "Ancient", "tags": ["maurya"]},
            {"exam": "70th BPSC", "paper": "GS 2", "question": "Q2", "topic": "Polity", "subtopic": "Federalism", "tags": []}
        ]"#;
        let records = parse_questions(json).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].question, "Q2");
    }

    #[test]
    fn test_parse_empty_array() {
        assert!(parse_questions(b"[]").unwrap().is_empty());
    }

    #[test]
    fn test_object_instead_of_array_is_rejected() {
        let err = parse_questions(br#"{"questions": []}"#).unwrap_err();
        assert!(matches!(err, LoadFailure::Parse(_)));
        assert!(err.to_string().starts_with("invalid question document"));
    }

    #[test]
    fn test_malformed_json_is_rejected() {
        assert!(matches!(
            parse_questions(b"[{\"question\": "),
            Err(LoadFailure::Parse(_))
        ));
    }

    #[test]
    fn test_status_display() {
        let err = LoadFailure::Status {
            location: "https://example.org/questions.json".to_string(),
            status: 404,
            reason: "Not Found".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "https://example.org/questions.json returned HTTP 404 Not Found"
        );
    }
}
