//! Facet field value object

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A categorical record field that can be filtered by exact match
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FacetField {
    /// Exam sitting or year; the primary, time-like facet
    #[serde(alias = "year")]
    Exam,
    Paper,
    Topic,
    Subtopic,
}

impl FacetField {
    pub const ALL: [FacetField; 4] = [
        FacetField::Exam,
        FacetField::Paper,
        FacetField::Topic,
        FacetField::Subtopic,
    ];

    /// Facets offered when nothing is configured
    pub fn default_fields() -> Vec<FacetField> {
        vec![FacetField::Exam, FacetField::Paper, FacetField::Topic]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FacetField::Exam => "exam",
            FacetField::Paper => "paper",
            FacetField::Topic => "topic",
            FacetField::Subtopic => "subtopic",
        }
    }

    /// Label shown next to the sentinel option, e.g. "All Exams"
    pub fn all_label(&self) -> &'static str {
        match self {
            FacetField::Exam => "All Exams",
            FacetField::Paper => "All Papers",
            FacetField::Topic => "All Topics",
            FacetField::Subtopic => "All Subtopics",
        }
    }

    /// The time-like facet lists its newest values first
    pub fn sorts_descending(&self) -> bool {
        matches!(self, FacetField::Exam)
    }
}

impl FromStr for FacetField {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "exam" | "year" => Ok(FacetField::Exam),
            "paper" => Ok(FacetField::Paper),
            "topic" => Ok(FacetField::Topic),
            "subtopic" => Ok(FacetField::Subtopic),
            other => Err(DomainError::UnknownFacet(other.to_string())),
        }
    }
}

impl std::fmt::Display for FacetField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
