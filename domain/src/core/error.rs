//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Unknown facet: {0} (expected exam, year, paper, topic or subtopic)")]
    UnknownFacet(String),

    #[error("Unknown output format: {0}")]
    UnknownOutputFormat(String),
}
