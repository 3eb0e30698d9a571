//! Loaded question collection

use super::record::QuestionRecord;
use crate::facet::{field::FacetField, index::FacetIndex};
use crate::filter::criteria::FilterCriteria;

/// The question collection loaded once at startup (Aggregate)
///
/// There is no mutation API: the bank is built from the loaded records
/// and only read afterwards. Share it behind an `Arc` when several
/// consumers need it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuestionBank {
    records: Vec<QuestionRecord>,
}

impl QuestionBank {
    pub fn new(records: Vec<QuestionRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[QuestionRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct values for each of `fields`
    pub fn facet_index(&self, fields: &[FacetField]) -> FacetIndex {
        FacetIndex::build(&self.records, fields)
    }

    /// Records matching `criteria`, in load order
    pub fn search(&self, criteria: &FilterCriteria) -> Vec<&QuestionRecord> {
        criteria.apply(&self.records)
    }
}
