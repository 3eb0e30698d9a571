//! Search Questions use case
//!
//! Answers filter queries against a loaded [`QuestionBank`].

use crate::config::FilterConfig;
use qfinder_domain::{FacetIndex, FilterCriteria, QuestionBank, QuestionRecord};
use std::sync::Arc;
use tracing::debug;

/// Result of one filter run
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutput<'a> {
    /// Criteria that were applied
    pub criteria: FilterCriteria,
    /// Matching records, in document order
    pub matches: Vec<&'a QuestionRecord>,
    /// Size of the whole bank
    pub total: usize,
}

impl SearchOutput<'_> {
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}

/// Use case for filtering the question bank
///
/// The facet index is built once, when the use case is created; the bank
/// never changes afterwards so it stays valid.
pub struct SearchQuestionsUseCase {
    bank: Arc<QuestionBank>,
    config: FilterConfig,
    index: FacetIndex,
}

impl SearchQuestionsUseCase {
    pub fn new(bank: Arc<QuestionBank>, config: FilterConfig) -> Self {
        let index = bank.facet_index(&config.facets);
        Self {
            bank,
            config,
            index,
        }
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    /// Option lists for the enabled facets
    pub fn facet_index(&self) -> &FacetIndex {
        &self.index
    }

    /// Run the predicate filter
    ///
    /// Every active selection is applied, including selections on facets
    /// that are not indexed for option lists.
    pub fn execute(&self, criteria: &FilterCriteria) -> SearchOutput<'_> {
        let criteria = criteria.clone();

        for (field, value) in criteria.selections.active() {
            if !self.config.is_enabled(field) {
                debug!("{} is not indexed, matching {:?} directly", field, value);
            } else if !self.index.contains(field, value) {
                debug!("No question has {} = {:?}", field, value);
            }
        }

        let matches = self.bank.search(&criteria);
        debug!(
            "Filter [{}] matched {} of {} questions",
            criteria,
            matches.len(),
            self.bank.len()
        );

        SearchOutput {
            criteria,
            matches,
            total: self.bank.len(),
        }
    }
}
