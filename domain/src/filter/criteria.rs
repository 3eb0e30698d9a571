//! Filter criteria: facet selections plus a free-text query

use super::haystack::haystack;
use crate::facet::{
    field::FacetField,
    selection::{FacetSelection, FacetSelections},
};
use crate::question::record::QuestionRecord;
use serde::{Deserialize, Serialize};

/// Free-text query, matched as a case-insensitive substring of the haystack
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct SearchQuery {
    raw: String,
    folded: String,
}

impl SearchQuery {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let folded = raw.to_lowercase();
        Self { raw, folded }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// The query as typed
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// An empty query lets every record through
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    pub fn matches(&self, record: &QuestionRecord) -> bool {
        self.is_empty() || haystack(record).contains(&self.folded)
    }
}

impl From<String> for SearchQuery {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

impl From<&str> for SearchQuery {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<SearchQuery> for String {
    fn from(query: SearchQuery) -> Self {
        query.raw
    }
}

/// Everything that narrows the result list (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub selections: FacetSelections,
    pub query: SearchQuery,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_selection(mut self, field: FacetField, selection: impl Into<FacetSelection>) -> Self {
        self.selections.set(field, selection);
        self
    }

    pub fn with_query(mut self, query: impl Into<SearchQuery>) -> Self {
        self.query = query.into();
        self
    }

    /// Tag shortcut: equivalent to typing `tag` into the query
    pub fn with_tag(mut self, tag: &str) -> Self {
        self.apply_tag(tag);
        self
    }

    pub fn set_selection(&mut self, field: FacetField, selection: impl Into<FacetSelection>) {
        self.selections.set(field, selection);
    }

    pub fn set_query(&mut self, query: impl Into<SearchQuery>) {
        self.query = query.into();
    }

    /// Replace the query with the tag's literal value; facet selections stay
    pub fn apply_tag(&mut self, tag: &str) {
        self.query = SearchQuery::new(tag);
    }

    /// Every facet back to `All` and an empty query
    pub fn reset(&mut self) {
        self.selections.clear();
        self.query = SearchQuery::empty();
    }

    pub fn is_unconstrained(&self) -> bool {
        self.selections.is_unconstrained() && self.query.is_empty()
    }

    pub fn matches(&self, record: &QuestionRecord) -> bool {
        self.selections.matches(record) && self.query.matches(record)
    }

    /// Matching records, in their original order
    pub fn apply<'a>(&self, records: &'a [QuestionRecord]) -> Vec<&'a QuestionRecord> {
        super::filter(records, &self.selections, &self.query)
    }
}

impl std::fmt::Display for FilterCriteria {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut parts: Vec<String> = self
            .selections
            .active()
            .map(|(field, value)| format!("{}={}", field, value))
            .collect();
        if !self.query.is_empty() {
            parts.push(format!("query=\"{}\"", self.query.as_str()));
        }
        if parts.is_empty() {
            f.write_str("no filters")
        } else {
            f.write_str(&parts.join(", "))
        }
    }
}
