//! Facet selections

use super::field::FacetField;
use crate::question::record::QuestionRecord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The literal value that stands for "no constraint"
pub const ALL_SENTINEL: &str = "All";

static UNCONSTRAINED: FacetSelection = FacetSelection::All;

/// The chosen value for one facet
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FacetSelection {
    /// Sentinel: apply no constraint on this facet
    #[default]
    All,
    /// Keep only records whose normalized facet value equals this
    Exact(String),
}

impl FacetSelection {
    /// Parse a user-supplied value; `All` and blank input mean no constraint
    ///
    /// Any other value is kept verbatim, whitespace included, since facet
    /// values match by exact string equality.
    pub fn parse(value: &str) -> Self {
        let trimmed = value.trim();
        if trimmed.is_empty() || trimmed == ALL_SENTINEL {
            FacetSelection::All
        } else {
            FacetSelection::Exact(value.to_string())
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, FacetSelection::All)
    }

    /// Whether a record's facet value satisfies this selection
    pub fn matches(&self, value: Option<&str>) -> bool {
        match self {
            FacetSelection::All => true,
            FacetSelection::Exact(expected) => value == Some(expected.as_str()),
        }
    }
}

impl From<&str> for FacetSelection {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl From<String> for FacetSelection {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<FacetSelection> for String {
    fn from(selection: FacetSelection) -> Self {
        match selection {
            FacetSelection::All => ALL_SENTINEL.to_string(),
            FacetSelection::Exact(value) => value,
        }
    }
}

impl std::fmt::Display for FacetSelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FacetSelection::All => f.write_str(ALL_SENTINEL),
            FacetSelection::Exact(value) => f.write_str(value),
        }
    }
}

/// Current selection for every facet. Facets never set are `All`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FacetSelections {
    selections: BTreeMap<FacetField, FacetSelection>,
}

impl FacetSelections {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, field: FacetField, selection: impl Into<FacetSelection>) -> Self {
        self.set(field, selection);
        self
    }

    pub fn set(&mut self, field: FacetField, selection: impl Into<FacetSelection>) {
        match selection.into() {
            FacetSelection::All => {
                self.selections.remove(&field);
            }
            exact => {
                self.selections.insert(field, exact);
            }
        }
    }

    pub fn get(&self, field: FacetField) -> &FacetSelection {
        self.selections.get(&field).unwrap_or(&UNCONSTRAINED)
    }

    /// Facets that currently constrain the result
    pub fn active(&self) -> impl Iterator<Item = (FacetField, &str)> {
        self.selections.iter().filter_map(|(field, selection)| match selection {
            FacetSelection::Exact(value) => Some((*field, value.as_str())),
            FacetSelection::All => None,
        })
    }

    pub fn is_unconstrained(&self) -> bool {
        self.active().next().is_none()
    }

    /// Set every facet back to `All`
    pub fn clear(&mut self) {
        self.selections.clear();
    }

    /// AND of all active constraints
    pub fn matches(&self, record: &QuestionRecord) -> bool {
        self.active()
            .all(|(field, expected)| record.facet(field).as_deref() == Some(expected))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sentinel() {
        assert_eq!(FacetSelection::parse("All"), FacetSelection::All);
        assert_eq!(FacetSelection::parse("  "), FacetSelection::All);
        assert_eq!(
            FacetSelection::parse("GS Paper 2"),
            FacetSelection::Exact("GS Paper 2".to_string())
        );
    }

    #[test]
    fn test_exact_value_is_not_trimmed() {
        assert_eq!(
            FacetSelection::parse("Polity "),
            FacetSelection::Exact("Polity ".to_string())
        );
        assert_eq!(FacetSelection::parse(" All "), FacetSelection::All);
        let parsed: FacetSelection = serde_json::from_str("\" Geography\"").unwrap();
        assert_eq!(parsed, FacetSelection::Exact(" Geography".to_string()));
    }

    #[test]
    fn test_sentinel_is_case_sensitive() {
        // a facet value literally spelled "all" stays selectable
        assert_eq!(
            FacetSelection::parse("all"),
            FacetSelection::Exact("all".to_string())
        );
    }

    #[test]
    fn test_exact_does_not_match_missing_value() {
        let selection = FacetSelection::parse("Polity");
        assert!(selection.matches(Some("Polity")));
        assert!(!selection.matches(Some("polity")));
        assert!(!selection.matches(None));
        assert!(FacetSelection::All.matches(None));
    }

    #[test]
    fn test_setting_all_removes_constraint() {
        let mut selections = FacetSelections::new().with(FacetField::Topic, "Economy");
        assert!(!selections.is_unconstrained());
        selections.set(FacetField::Topic, "All");
        assert!(selections.is_unconstrained());
        assert!(selections.get(FacetField::Topic).is_all());
    }

    #[test]
    fn test_constraints_are_anded() {
        let record = QuestionRecord::new("q")
            .with_exam(2023)
            .with_paper("GS Paper 1")
            .with_topic("History");

        let both = FacetSelections::new()
            .with(FacetField::Exam, "2023")
            .with(FacetField::Topic, "History");
        assert!(both.matches(&record));

        let conflicting = both.with(FacetField::Paper, "GS Paper 2");
        assert!(!conflicting.matches(&record));
    }

    #[test]
    fn test_serde_uses_sentinel_string() {
        let json = serde_json::to_string(&FacetSelection::All).unwrap();
        assert_eq!(json, "\"All\"");
        let parsed: FacetSelection = serde_json::from_str("\"Geography\"").unwrap();
        assert_eq!(parsed, FacetSelection::Exact("Geography".to_string()));
    }
}
