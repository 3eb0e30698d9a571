//! Facets: categorical fields filtered by exact match.
//!
//! - [`field::FacetField`] - which record field a facet reads
//! - [`selection::FacetSelection`] - `All` or an exact value
//! - [`index::FacetIndex`] - distinct values per facet, for option lists

pub mod field;
pub mod index;
pub mod selection;
