//! Application layer for question-finder
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::FilterConfig;
pub use ports::{
    progress::{LoadProgressNotifier, NoProgress},
    question_source::{LoadFailure, QuestionSource, parse_questions},
};
pub use use_cases::load_questions::LoadQuestionsUseCase;
pub use use_cases::search_questions::{SearchOutput, SearchQuestionsUseCase};
