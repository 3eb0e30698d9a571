//! Local file question source

use async_trait::async_trait;
use qfinder_application::{LoadFailure, QuestionSource, parse_questions};
use qfinder_domain::QuestionRecord;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Reads the question document from the local file system
#[derive(Debug, Clone)]
pub struct FileQuestionSource {
    path: PathBuf,
    location: String,
    max_bytes: u64,
}

impl FileQuestionSource {
    pub fn new(path: impl AsRef<Path>, max_bytes: u64) -> Self {
        let path = path.as_ref().to_path_buf();
        let location = path.display().to_string();
        Self {
            path,
            location,
            max_bytes,
        }
    }

    fn read_failure(&self, e: std::io::Error) -> LoadFailure {
        LoadFailure::Read {
            location: self.location.clone(),
            message: e.to_string(),
        }
    }
}

#[async_trait]
impl QuestionSource for FileQuestionSource {
    fn location(&self) -> &str {
        &self.location
    }

    async fn fetch(&self) -> Result<Vec<QuestionRecord>, LoadFailure> {
        let metadata = tokio::fs::metadata(&self.path)
            .await
            .map_err(|e| self.read_failure(e))?;

        if metadata.len() > self.max_bytes {
            return Err(LoadFailure::TooLarge {
                location: self.location.clone(),
                size: metadata.len(),
                limit: self.max_bytes,
            });
        }

        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|e| self.read_failure(e))?;
        debug!("Read {} bytes from {}", bytes.len(), self.location);

        parse_questions(&bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const LIMIT: u64 = 1024 * 1024;

    #[tokio::test]
    async fn test_reads_question_document() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"exam": "70th BPSC", "paper": "GS Paper 1", "question": "Q", "topic": "History", "subtopic": "Medieval", "tags": ["sher shah"]}}]"#
        )
        .unwrap();

        let source = FileQuestionSource::new(file.path(), LIMIT);
        let records = source.fetch().await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].tags, vec!["sher shah"]);
    }

    #[tokio::test]
    async fn test_missing_file_is_read_failure() {
        let dir = tempfile::tempdir().unwrap();
        let source = FileQuestionSource::new(dir.path().join("questions.json"), LIMIT);
        let err = source.fetch().await.unwrap_err();
        assert!(matches!(err, LoadFailure::Read { .. }));
        assert!(err.to_string().contains("questions.json"));
    }

    #[tokio::test]
    async fn test_wrong_shape_is_parse_failure() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"question": "not in an array"}}"#).unwrap();

        let source = FileQuestionSource::new(file.path(), LIMIT);
        assert!(matches!(
            source.fetch().await,
            Err(LoadFailure::Parse(_))
        ));
    }

    #[tokio::test]
    async fn test_oversized_file_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[]      ").unwrap();

        let source = FileQuestionSource::new(file.path(), 4);
        assert!(matches!(
            source.fetch().await,
            Err(LoadFailure::TooLarge { size: 8, limit: 4, .. })
        ));
    }
}
