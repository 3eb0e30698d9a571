//! Load Questions use case
//!
//! Fetches the question document once and turns it into a read-only
//! [`QuestionBank`].

use crate::ports::progress::{LoadProgressNotifier, NoProgress};
use crate::ports::question_source::{LoadFailure, QuestionSource};
use qfinder_domain::QuestionBank;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Use case for loading the question bank
pub struct LoadQuestionsUseCase<S: QuestionSource + 'static> {
    source: Arc<S>,
}

impl<S: QuestionSource + 'static> LoadQuestionsUseCase<S> {
    pub fn new(source: Arc<S>) -> Self {
        Self { source }
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(&self) -> Result<QuestionBank, LoadFailure> {
        self.execute_with_progress(&NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        progress: &dyn LoadProgressNotifier,
    ) -> Result<QuestionBank, LoadFailure> {
        let location = self.source.location();
        info!("Loading questions from {}", location);
        progress.on_load_start(location);

        let records = match self.source.fetch().await {
            Ok(records) => records,
            Err(e) => {
                warn!("Failed to load questions from {}: {}", location, e);
                progress.on_load_failed(&e);
                return Err(e);
            }
        };

        let untagged = records.iter().filter(|r| r.tags.is_empty()).count();
        if untagged > 0 {
            debug!("{} of {} questions have no tags", untagged, records.len());
        }

        info!("Loaded {} questions", records.len());
        progress.on_load_complete(records.len());

        Ok(QuestionBank::new(records))
    }
}
