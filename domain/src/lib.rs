//! Domain layer for question-finder
//!
//! This crate contains the question records, facet model and the pure
//! filtering logic. It has no dependencies on infrastructure or presentation
//! concerns.
//!
//! # Core Concepts
//!
//! ## Question Bank
//!
//! A [`QuestionBank`] is the collection loaded once from a JSON document.
//! It is never mutated after construction.
//!
//! ## Facets
//!
//! - **Facet**: a categorical field (exam/year, paper, topic, subtopic)
//!   filtered by exact match
//! - **Sentinel `All`**: a facet selection that applies no constraint
//!
//! ## Criteria
//!
//! [`FilterCriteria`] combines facet selections with a free-text query.
//! Matching records keep their original relative order.

pub mod config;
pub mod core;
pub mod facet;
pub mod filter;
pub mod question;

// Re-export commonly used types
pub use config::OutputFormat;
pub use core::{error::DomainError, string::truncate};
pub use facet::{
    field::FacetField,
    index::{FacetIndex, FacetOption},
    selection::{FacetSelection, FacetSelections},
};
pub use filter::{
    criteria::{FilterCriteria, SearchQuery},
    filter,
    haystack::haystack,
};
pub use question::{bank::QuestionBank, facet_value::FacetValue, record::QuestionRecord};
