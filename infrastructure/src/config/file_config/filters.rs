//! Filter configuration from TOML (`[filters]` section)

use super::ConfigValidationError;
use qfinder_domain::FacetField;
use serde::{Deserialize, Serialize};

/// Raw filter configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileFiltersConfig {
    /// Facet names: exam (or year), paper, topic, subtopic
    pub facets: Vec<String>,
}

impl Default for FileFiltersConfig {
    fn default() -> Self {
        Self {
            facets: FacetField::default_fields()
                .iter()
                .map(|f| f.as_str().to_string())
                .collect(),
        }
    }
}

impl FileFiltersConfig {
    /// Parse facet names, keeping the configured order and dropping repeats
    pub fn parse_facets(&self) -> Result<Vec<FacetField>, ConfigValidationError> {
        if self.facets.is_empty() {
            return Err(ConfigValidationError::NoFacets);
        }

        let mut fields = Vec::with_capacity(self.facets.len());
        for name in &self.facets {
            let field: FacetField = name
                .parse()
                .map_err(|_| ConfigValidationError::UnknownFacet(name.clone()))?;
            if !fields.contains(&field) {
                fields.push(field);
            }
        }
        Ok(fields)
    }
}
