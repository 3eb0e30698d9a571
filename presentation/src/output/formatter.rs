//! Output formatter trait

use qfinder_application::SearchOutput;
use qfinder_domain::{FacetIndex, OutputFormat};

/// Trait for formatting search results
pub trait OutputFormatter {
    /// One card per matching question
    fn format_cards(&self, output: &SearchOutput<'_>) -> String;

    /// One line per matching question
    fn format_compact(&self, output: &SearchOutput<'_>) -> String;

    /// JSON array of matching questions
    fn format_json(&self, output: &SearchOutput<'_>) -> String;

    /// Facet option lists
    fn format_facets(&self, index: &FacetIndex) -> String;

    /// Dispatch on `format`
    fn render(&self, output: &SearchOutput<'_>, format: OutputFormat) -> String {
        match format {
            OutputFormat::Full => self.format_cards(output),
            OutputFormat::Compact => self.format_compact(output),
            OutputFormat::Json => self.format_json(output),
        }
    }
}
