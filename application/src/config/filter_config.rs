//! Filter configuration

use qfinder_domain::FacetField;

/// Controls which facets the search use case indexes and lists.
///
/// Question banks differ in which categorical fields they carry; the
/// default covers exam, paper and topic. Subtopic is opt-in. Selections
/// on facets left out here are still applied when filtering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterConfig {
    pub facets: Vec<FacetField>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            facets: FacetField::default_fields(),
        }
    }
}

impl FilterConfig {
    pub fn new(facets: Vec<FacetField>) -> Self {
        Self { facets }
    }

    /// Whether `field` gets an option list
    pub fn is_enabled(&self, field: FacetField) -> bool {
        self.facets.contains(&field)
    }
}
