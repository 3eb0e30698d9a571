//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod filters;
mod output;
mod repl;
mod source;

pub use filters::FileFiltersConfig;
pub use output::FileOutputConfig;
pub use repl::FileReplConfig;
pub use source::FileSourceConfig;

use qfinder_application::FilterConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("source.location cannot be empty")]
    EmptySourceLocation,

    #[error("source.max_bytes cannot be 0")]
    ZeroMaxBytes,

    #[error("filters.facets cannot be empty")]
    NoFacets,

    #[error("filters.facets: unknown facet {0:?}")]
    UnknownFacet(String),
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Where the question document lives
    pub source: FileSourceConfig,
    /// Facets offered for filtering
    pub filters: FileFiltersConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Interactive browse settings
    pub repl: FileReplConfig,
}

impl FileConfig {
    /// Validate the configuration, stopping at the first problem
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        self.source.validate()?;
        self.filters.parse_facets()?;
        Ok(())
    }

    /// Replace `source.location` with a location given on the command line
    ///
    /// Call before [`FileConfig::validate`] so an override can stand in for
    /// an empty configured location.
    pub fn override_source(&mut self, location: Option<&str>) {
        if let Some(location) = location {
            self.source.location = location.to_string();
        }
    }

    /// Application-level filter configuration
    pub fn filter_config(&self) -> Result<FilterConfig, ConfigValidationError> {
        Ok(FilterConfig::new(self.filters.parse_facets()?))
    }

    /// Render the effective configuration as TOML (for `--show-config`)
    pub fn to_toml(&self) -> String {
        toml::to_string_pretty(self).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qfinder_domain::{FacetField, OutputFormat};

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[source]
location = "https://example.org/bpsc/questions.json"
max_bytes = 1048576

[filters]
facets = ["year", "topic", "subtopic"]

[output]
format = "compact"
color = false

[repl]
history_file = "/tmp/qfinder-history.txt"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.source.location, "https://example.org/bpsc/questions.json");
        assert_eq!(config.source.max_bytes, 1_048_576);
        assert_eq!(config.output.format, Some(OutputFormat::Compact));
        assert!(!config.output.color);
        assert_eq!(
            config.repl.history_file.as_deref(),
            Some("/tmp/qfinder-history.txt")
        );
        assert_eq!(
            config.filter_config().unwrap().facets,
            vec![FacetField::Exam, FacetField::Topic, FacetField::Subtopic]
        );
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[source]
location = "bank/upsc.json"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.source.location, "bank/upsc.json");
        // Defaults should apply
        assert_eq!(config.source.max_bytes, FileSourceConfig::default().max_bytes);
        assert_eq!(config.filters.facets, vec!["exam", "paper", "topic"]);
        assert!(config.output.color);
    }

    #[test]
    fn test_default_config() {
        let config = FileConfig::default();
        assert_eq!(config.source.location, "data/questions.json");
        assert!(config.output.format.is_none());
        assert!(config.validate().is_ok());
        assert_eq!(
            config.filter_config().unwrap(),
            FilterConfig::default()
        );
    }

    #[test]
    fn test_validate_empty_location() {
        let toml_str = r#"
[source]
location = "  "
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(
            config.validate(),
            Err(ConfigValidationError::EmptySourceLocation)
        );
    }

    #[test]
    fn test_validate_unknown_facet() {
        let toml_str = r#"
[filters]
facets = ["exam", "chapter"]
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(
            config.validate(),
            Err(ConfigValidationError::UnknownFacet("chapter".to_string()))
        );
    }

    #[test]
    fn test_to_toml_round_trips_sections() {
        let rendered = FileConfig::default().to_toml();
        assert!(rendered.contains("[source]"));
        assert!(rendered.contains("location = \"data/questions.json\""));
    }

    #[test]
    fn test_source_override_fills_empty_location() {
        let mut config: FileConfig = toml::from_str("[source]\nlocation = \"\"\n").unwrap();
        assert_eq!(config.validate(), Err(ConfigValidationError::EmptySourceLocation));

        config.override_source(Some("https://example.org/questions.json"));
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.source.location, "https://example.org/questions.json");

        config.override_source(None);
        assert_eq!(config.source.location, "https://example.org/questions.json");
    }
}
