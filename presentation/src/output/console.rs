//! Console output formatter for search results

use crate::output::formatter::OutputFormatter;
use colored::Colorize;
use qfinder_application::{LoadFailure, SearchOutput};
use qfinder_domain::{FacetIndex, FilterCriteria, QuestionRecord, truncate};

/// Shown instead of an empty list
pub const NO_MATCHES: &str = "No matching questions found.";

/// Question preview width in compact mode
const COMPACT_WIDTH: usize = 100;

/// Turn terminal colors on or off for everything this crate prints
pub fn set_color_enabled(enabled: bool) {
    if enabled {
        colored::control::unset_override();
    } else {
        colored::control::set_override(false);
    }
}

/// Formats search results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format every match as a card, preceded by a summary line
    pub fn format_cards(output: &SearchOutput<'_>) -> String {
        if output.is_empty() {
            return Self::no_matches();
        }

        let mut out = String::new();
        out.push_str(&Self::summary(output));
        out.push('\n');

        for record in &output.matches {
            out.push('\n');
            out.push_str(&Self::format_card(record));
        }

        out
    }

    /// Format a single question card
    ///
    /// ```text
    /// 70th BPSC • GS Paper 1
    /// Discuss the significance of the Champaran Satyagraha.
    /// Modern History → Freedom Struggle
    /// #gandhi #bihar
    /// ```
    pub fn format_card(record: &QuestionRecord) -> String {
        let mut card = String::new();

        let exam = record.exam.as_ref().map(|e| e.to_string());
        if let Some(meta) = Self::join_present([exam.as_deref(), record.paper.as_deref()], " • ") {
            card.push_str(&format!("{}\n", meta.cyan()));
        }

        card.push_str(&format!("{}\n", record.question.bold()));

        if let Some(meta) = Self::join_present(
            [record.topic.as_deref(), record.subtopic.as_deref()],
            " → ",
        ) {
            card.push_str(&format!("{}\n", meta.dimmed()));
        }

        let marks = record.marks.map(|m| {
            if m == 1 {
                "1 mark".to_string()
            } else {
                format!("{} marks", m)
            }
        });
        if let Some(detail) =
            Self::join_present([record.question_type.as_deref(), marks.as_deref()], " · ")
        {
            card.push_str(&format!("[{}]\n", detail));
        }

        if !record.tags.is_empty() {
            let tags = record
                .tags
                .iter()
                .map(|tag| format!("#{}", tag))
                .collect::<Vec<_>>()
                .join(" ");
            card.push_str(&format!("{}\n", tags.yellow()));
        }

        card
    }

    /// One line per match: `[exam | paper | topic] question…`
    pub fn format_compact(output: &SearchOutput<'_>) -> String {
        if output.is_empty() {
            return Self::no_matches();
        }

        let mut out = String::new();
        for record in &output.matches {
            let exam = record.exam.as_ref().map(|e| e.to_string());
            let meta = Self::join_present(
                [exam.as_deref(), record.paper.as_deref(), record.topic.as_deref()],
                " | ",
            )
            .unwrap_or_default();
            out.push_str(&format!(
                "{} {}\n",
                format!("[{}]", meta).cyan(),
                truncate(&record.question, COMPACT_WIDTH)
            ));
        }
        out.push_str(&format!("{}\n", Self::summary(output).dimmed()));
        out
    }

    /// Format matches as a JSON array
    pub fn format_json(output: &SearchOutput<'_>) -> String {
        serde_json::to_string_pretty(&output.matches).unwrap_or_else(|_| "[]".to_string())
    }

    /// Facet option lists, each starting with its `All` sentinel
    pub fn format_facets(index: &FacetIndex) -> String {
        let mut out = String::new();
        for &field in index.fields() {
            out.push_str(&Self::section_header(field.as_str()));
            for option in index.options(field) {
                if option.selection.is_all() {
                    out.push_str(&format!("  {} {}\n", "All".bold(), option.label.dimmed()));
                } else {
                    out.push_str(&format!("  {}\n", option.label));
                }
            }
        }
        out
    }

    /// Current criteria, for the browse REPL
    pub fn format_criteria(criteria: &FilterCriteria) -> String {
        format!("{} {}", "Filters:".cyan().bold(), criteria)
    }

    /// User-visible load error
    pub fn format_load_error(error: &LoadFailure) -> String {
        format!("{} {}", "Error loading questions:".red().bold(), error)
    }

    fn summary(output: &SearchOutput<'_>) -> String {
        let noun = if output.total == 1 { "question" } else { "questions" };
        if output.criteria.is_unconstrained() {
            format!("Showing all {} {}", output.total, noun)
        } else {
            format!(
                "Showing {} of {} {} ({})",
                output.matches.len(),
                output.total,
                noun,
                output.criteria
            )
        }
    }

    fn no_matches() -> String {
        format!("{}\n", NO_MATCHES.dimmed())
    }

    fn section_header(title: &str) -> String {
        format!("{}\n", title.cyan().bold())
    }

    /// Join the non-empty parts with `sep`; `None` when nothing is left
    fn join_present<const N: usize>(parts: [Option<&str>; N], sep: &str) -> Option<String> {
        let present: Vec<&str> = parts
            .into_iter()
            .flatten()
            .filter(|p| !p.trim().is_empty())
            .collect();
        if present.is_empty() {
            None
        } else {
            Some(present.join(sep))
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_cards(&self, output: &SearchOutput<'_>) -> String {
        Self::format_cards(output)
    }

    fn format_compact(&self, output: &SearchOutput<'_>) -> String {
        Self::format_compact(output)
    }

    fn format_json(&self, output: &SearchOutput<'_>) -> String {
        Self::format_json(output)
    }

    fn format_facets(&self, index: &FacetIndex) -> String {
        Self::format_facets(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qfinder_domain::{FacetField, OutputFormat, QuestionBank};

    fn plain() {
        colored::control::set_override(false);
    }

    fn sample() -> Vec<QuestionRecord> {
        vec![
            QuestionRecord::new("Discuss the significance of the Champaran Satyagraha.")
                .with_exam("70th BPSC")
                .with_paper("GS Paper 1")
                .with_topic("Modern History")
                .with_subtopic("Freedom Struggle")
                .with_tags(["gandhi", "bihar"]),
            QuestionRecord::new("Solve x^2 - 5x + 6 = 0")
                .with_exam(2023)
                .with_topic("Algebra")
                .with_type("short")
                .with_marks(4),
        ]
    }

    fn output<'a>(records: &'a [QuestionRecord], criteria: FilterCriteria) -> SearchOutput<'a> {
        SearchOutput {
            matches: criteria.apply(records),
            total: records.len(),
            criteria,
        }
    }

    #[test]
    fn test_card_layout() {
        plain();
        let card = ConsoleFormatter::format_card(&sample()[0]);
        assert_eq!(
            card,
            "70th BPSC • GS Paper 1\n\
             Discuss the significance of the Champaran Satyagraha.\n\
             Modern History → Freedom Struggle\n\
             #gandhi #bihar\n"
        );
    }

    #[test]
    fn test_card_skips_missing_fields() {
        plain();
        let card = ConsoleFormatter::format_card(&sample()[1]);
        assert_eq!(card, "2023\nSolve x^2 - 5x + 6 = 0\nAlgebra\n[short · 4 marks]\n");
    }

    #[test]
    fn test_empty_result_renders_placeholder() {
        plain();
        let records = sample();
        let out = output(&records, FilterCriteria::new().with_query("photosynthesis"));
        for format in [OutputFormat::Full, OutputFormat::Compact] {
            let rendered = ConsoleFormatter.render(&out, format);
            assert_eq!(rendered, format!("{}\n", NO_MATCHES));
        }
        assert_eq!(ConsoleFormatter::format_json(&out), "[]");
    }

    #[test]
    fn test_summary_mentions_criteria() {
        plain();
        let records = sample();
        let out = output(&records, FilterCriteria::new().with_tag("gandhi"));
        let rendered = ConsoleFormatter::format_cards(&out);
        assert!(rendered.starts_with("Showing 1 of 2 questions (query=\"gandhi\")\n"));
        assert!(rendered.contains("#gandhi #bihar"));
    }

    #[test]
    fn test_compact_lines() {
        plain();
        let records = sample();
        let out = output(&records, FilterCriteria::new());
        let rendered = ConsoleFormatter::format_compact(&out);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            "[70th BPSC | GS Paper 1 | Modern History] Discuss the significance of the Champaran Satyagraha."
        );
        assert_eq!(lines[1], "[2023 | Algebra] Solve x^2 - 5x + 6 = 0");
        assert_eq!(lines[2], "Showing all 2 questions");
    }

    #[test]
    fn test_json_keeps_original_keys() {
        let records = sample();
        let out = output(&records, FilterCriteria::new().with_query("algebra"));
        let value: serde_json::Value =
            serde_json::from_str(&ConsoleFormatter::format_json(&out)).unwrap();
        assert_eq!(value[0]["exam"], 2023);
        assert_eq!(value[0]["type"], "short");
        assert_eq!(value[0]["marks"], 4);
    }

    #[test]
    fn test_facet_listing() {
        plain();
        let bank = QuestionBank::new(sample());
        let index = bank.facet_index(&[FacetField::Exam, FacetField::Topic]);
        let rendered = ConsoleFormatter::format_facets(&index);
        assert_eq!(
            rendered,
            "exam\n  All All Exams\n  70th BPSC\n  2023\n\
             topic\n  All All Topics\n  Algebra\n  Modern History\n"
        );
    }

    #[test]
    fn test_load_error_message() {
        plain();
        let error = LoadFailure::Parse("expected value at line 1 column 1".to_string());
        assert_eq!(
            ConsoleFormatter::format_load_error(&error),
            "Error loading questions: invalid question document: expected value at line 1 column 1"
        );
    }
}
