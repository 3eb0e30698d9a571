//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod load_questions;
pub mod search_questions;
