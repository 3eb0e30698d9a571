//! Facet index: distinct values per facet field

use super::field::FacetField;
use super::selection::FacetSelection;
use crate::question::record::QuestionRecord;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// One selectable entry in a facet's option list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FacetOption {
    pub selection: FacetSelection,
    pub label: String,
}

/// Distinct values of the configured facet fields
///
/// Values are ordered by plain string comparison, ascending, except for
/// facets where [`FacetField::sorts_descending`] holds (the exam/year
/// facet), which list the most recent value first. Records missing a
/// facet, or carrying an empty value, contribute nothing to it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FacetIndex {
    fields: Vec<FacetField>,
    values: BTreeMap<FacetField, Vec<String>>,
}

impl FacetIndex {
    pub fn build(records: &[QuestionRecord], fields: &[FacetField]) -> Self {
        let mut fields_in_order = Vec::with_capacity(fields.len());
        let mut values = BTreeMap::new();

        for &field in fields {
            if values.contains_key(&field) {
                continue;
            }

            let distinct: BTreeSet<String> = records
                .iter()
                .filter_map(|record| record.facet(field))
                .filter(|value| !value.is_empty())
                .map(|value| value.into_owned())
                .collect();

            let mut sorted: Vec<String> = distinct.into_iter().collect();
            if field.sorts_descending() {
                sorted.reverse();
            }

            fields_in_order.push(field);
            values.insert(field, sorted);
        }

        Self {
            fields: fields_in_order,
            values,
        }
    }

    /// Indexed fields, in configured order
    pub fn fields(&self) -> &[FacetField] {
        &self.fields
    }

    /// Sorted distinct values of `field`; empty when the field is not indexed
    pub fn values(&self, field: FacetField) -> &[String] {
        self.values.get(&field).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The sentinel option followed by one option per distinct value
    pub fn options(&self, field: FacetField) -> Vec<FacetOption> {
        std::iter::once(FacetOption {
            selection: FacetSelection::All,
            label: field.all_label().to_string(),
        })
        .chain(self.values(field).iter().map(|value| FacetOption {
            selection: FacetSelection::Exact(value.clone()),
            label: value.clone(),
        }))
        .collect()
    }

    /// Whether `value` is one of the indexed values of `field`
    pub fn contains(&self, field: FacetField, value: &str) -> bool {
        self.values(field).iter().any(|v| v == value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facet::selection::FacetSelections;

    fn records() -> Vec<QuestionRecord> {
        vec![
            QuestionRecord::new("a")
                .with_exam("68th BPSC")
                .with_paper("GS Paper 2")
                .with_topic("Polity"),
            QuestionRecord::new("b")
                .with_exam("70th BPSC")
                .with_paper("GS Paper 1")
                .with_topic("Economy"),
            QuestionRecord::new("c")
                .with_exam("69th BPSC")
                .with_paper("GS Paper 1")
                .with_topic("Polity"),
            QuestionRecord::new("d").with_topic(""),
        ]
    }

    #[test]
    fn test_exam_sorted_newest_first() {
        let index = FacetIndex::build(&records(), &FacetField::default_fields());
        assert_eq!(
            index.values(FacetField::Exam),
            ["70th BPSC", "69th BPSC", "68th BPSC"]
        );
    }

    #[test]
    fn test_other_facets_sorted_ascending_and_distinct() {
        let index = FacetIndex::build(&records(), &FacetField::default_fields());
        assert_eq!(index.values(FacetField::Paper), ["GS Paper 1", "GS Paper 2"]);
        assert_eq!(index.values(FacetField::Topic), ["Economy", "Polity"]);
    }

    #[test]
    fn test_numeric_years_are_normalized() {
        let records = vec![
            QuestionRecord::new("a").with_exam(2021),
            QuestionRecord::new("b").with_exam("2023"),
            QuestionRecord::new("c").with_exam(2023),
        ];
        let index = FacetIndex::build(&records, &[FacetField::Exam]);
        assert_eq!(index.values(FacetField::Exam), ["2023", "2021"]);
    }

    #[test]
    fn test_unindexed_field_is_empty() {
        let index = FacetIndex::build(&records(), &[FacetField::Topic, FacetField::Topic]);
        assert_eq!(index.fields(), [FacetField::Topic]);
        assert!(index.values(FacetField::Subtopic).is_empty());
    }

    #[test]
    fn test_options_start_with_sentinel() {
        let index = FacetIndex::build(&records(), &[FacetField::Paper]);
        let options = index.options(FacetField::Paper);
        assert_eq!(options.len(), 3);
        assert_eq!(options[0].selection, FacetSelection::All);
        assert_eq!(options[0].label, "All Papers");
        assert_eq!(
            options[1].selection,
            FacetSelection::Exact("GS Paper 1".to_string())
        );
        assert!(index.contains(FacetField::Paper, "GS Paper 2"));
    }

    #[test]
    fn test_listed_value_with_whitespace_is_selectable() {
        let records = vec![
            QuestionRecord::new("a").with_topic("Polity "),
            QuestionRecord::new("b").with_topic("Polity"),
        ];
        let index = FacetIndex::build(&records, &[FacetField::Topic]);
        assert_eq!(index.values(FacetField::Topic), ["Polity", "Polity "]);

        for value in index.values(FacetField::Topic) {
            let selections = FacetSelections::new().with(FacetField::Topic, value.as_str());
            let matched: Vec<_> = records.iter().filter(|r| selections.matches(r)).collect();
            assert_eq!(matched.len(), 1);
            assert_eq!(matched[0].topic.as_deref(), Some(value.as_str()));
        }
    }
}
