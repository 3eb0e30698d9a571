//! Progress notification port
//!
//! Defines the interface for reporting progress while the question
//! document is loading.

use super::question_source::LoadFailure;

/// Callback for load progress
///
/// Implementations live in the presentation layer (spinner, plain text).
pub trait LoadProgressNotifier: Send + Sync {
    /// Called before the source is fetched
    fn on_load_start(&self, location: &str);

    /// Called once the document is parsed
    fn on_load_complete(&self, count: usize);

    /// Called when loading fails
    fn on_load_failed(&self, _error: &LoadFailure) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl LoadProgressNotifier for NoProgress {
    fn on_load_start(&self, _location: &str) {}
    fn on_load_complete(&self, _count: usize) {}
}
