//! Predicate filter over question records.
//!
//! [`filter`] is a pure function: it keeps the records satisfying every
//! active facet constraint and the free-text query, preserving input
//! order. There is no ranking.

pub mod criteria;
pub mod haystack;

use crate::facet::selection::FacetSelections;
use crate::question::record::QuestionRecord;
use criteria::SearchQuery;

/// Records matching all `selections` and `query`, in their original order
pub fn filter<'a>(
    records: &'a [QuestionRecord],
    selections: &FacetSelections,
    query: &SearchQuery,
) -> Vec<&'a QuestionRecord> {
    records
        .iter()
        .filter(|record| selections.matches(record) && query.matches(record))
        .collect()
}
