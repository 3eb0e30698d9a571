//! Question records and the loaded question bank.
//!
//! - [`record::QuestionRecord`] - one question as stored in the JSON document
//! - [`facet_value::FacetValue`] - a facet value that may be text or a number
//! - [`bank::QuestionBank`] - the read-only collection loaded at startup

pub mod bank;
pub mod facet_value;
pub mod record;
