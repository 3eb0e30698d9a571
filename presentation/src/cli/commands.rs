//! CLI command definitions

use clap::{Parser, ValueEnum};
use qfinder_domain::{FacetField, FilterCriteria};
use std::path::PathBuf;

/// Output format for search results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One card per question with meta lines and tags
    Full,
    /// One line per question
    Compact,
    /// JSON array of matching questions
    Json,
}

impl From<OutputFormat> for qfinder_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Full => qfinder_domain::OutputFormat::Full,
            OutputFormat::Compact => qfinder_domain::OutputFormat::Compact,
            OutputFormat::Json => qfinder_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for question-finder
#[derive(Parser, Debug)]
#[command(name = "question-finder")]
#[command(author, version, about = "Search and filter a bank of exam questions")]
#[command(long_about = r#"
question-finder loads a JSON document of exam questions and lists the ones
matching your filters.

Filters combine with AND:
  --exam/--year, --paper, --topic, --subtopic   exact match ("All" = no filter)
  QUERY                                         case-insensitive text search over
                                                question, topic, subtopic and tags
  --tag                                         same as searching for the tag

Configuration files are loaded from (in priority order):
1. --config <path>                              Explicit config file
2. QFINDER_* environment variables              e.g. QFINDER_SOURCE__LOCATION
3. ./question-finder.toml                       Project-level config
4. ~/.config/question-finder/config.toml        Global config

Example:
  question-finder --topic "Modern History" champaran
  question-finder --year 2023 --tag quadratic -o compact
  question-finder --source https://example.org/data/questions.json --facets
  question-finder -i
"#)]
pub struct Cli {
    /// Free-text query (case-insensitive substring)
    pub query: Option<String>,

    /// Question document location (path or http(s) URL)
    #[arg(short, long, value_name = "PATH|URL")]
    pub source: Option<String>,

    /// Only questions from this exam (or year)
    #[arg(long, visible_alias = "year", value_name = "EXAM")]
    pub exam: Option<String>,

    /// Only questions from this paper
    #[arg(long, value_name = "PAPER")]
    pub paper: Option<String>,

    /// Only questions on this topic
    #[arg(long, value_name = "TOPIC")]
    pub topic: Option<String>,

    /// Only questions on this subtopic
    #[arg(long, value_name = "SUBTOPIC")]
    pub subtopic: Option<String>,

    /// Search for a tag (replaces QUERY)
    #[arg(short, long, value_name = "TAG")]
    pub tag: Option<String>,

    /// List the available facet values and exit
    #[arg(long)]
    pub facets: bool,

    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Browse interactively
    #[arg(short, long)]
    pub interactive: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Write logs to this file instead of stderr
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

impl Cli {
    /// Filter criteria described by the command-line flags
    pub fn criteria(&self) -> FilterCriteria {
        let mut criteria = FilterCriteria::new();

        let facets = [
            (FacetField::Exam, &self.exam),
            (FacetField::Paper, &self.paper),
            (FacetField::Topic, &self.topic),
            (FacetField::Subtopic, &self.subtopic),
        ];
        for (field, value) in facets {
            if let Some(value) = value {
                criteria.set_selection(field, value.as_str());
            }
        }

        if let Some(query) = &self.query {
            criteria.set_query(query.as_str());
        }
        if let Some(tag) = &self.tag {
            criteria.apply_tag(tag);
        }

        criteria
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qfinder_domain::FacetSelection;

    #[test]
    fn test_parse_filters() {
        let cli = Cli::parse_from([
            "question-finder",
            "--year",
            "2023",
            "--topic",
            "Algebra",
            "-o",
            "compact",
            "roots",
        ]);
        assert_eq!(cli.output, Some(OutputFormat::Compact));

        let criteria = cli.criteria();
        assert_eq!(
            criteria.selections.get(FacetField::Exam),
            &FacetSelection::Exact("2023".to_string())
        );
        assert_eq!(criteria.query.as_str(), "roots");
    }

    #[test]
    fn test_tag_replaces_query() {
        let cli = Cli::parse_from(["question-finder", "--tag", "quadratic", "roots"]);
        assert_eq!(cli.criteria().query.as_str(), "quadratic");
    }

    #[test]
    fn test_all_sentinel_from_flags() {
        let cli = Cli::parse_from(["question-finder", "--paper", "All"]);
        assert!(cli.criteria().is_unconstrained());
    }

    #[test]
    fn test_verbosity_count() {
        let cli = Cli::parse_from(["question-finder", "-vv", "-q"]);
        assert_eq!(cli.verbose, 2);
        assert!(cli.quiet);
    }

    #[test]
    fn test_output_format_conversion() {
        assert_eq!(
            qfinder_domain::OutputFormat::from(OutputFormat::Json),
            qfinder_domain::OutputFormat::Json
        );
    }
}
