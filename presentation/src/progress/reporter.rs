//! Load progress reporters

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use qfinder_application::{LoadFailure, LoadProgressNotifier};
use std::sync::Mutex;
use std::time::Duration;

/// Shows a spinner on stderr while the question document loads
pub struct LoadProgressReporter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl LoadProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn take_spinner(&self) -> Option<ProgressBar> {
        self.spinner.lock().ok().and_then(|mut guard| guard.take())
    }
}

impl Default for LoadProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl LoadProgressNotifier for LoadProgressReporter {
    fn on_load_start(&self, location: &str) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_message(format!("Loading questions from {}", location));
        pb.enable_steady_tick(Duration::from_millis(80));

        if let Ok(mut guard) = self.spinner.lock() {
            *guard = Some(pb);
        }
    }

    fn on_load_complete(&self, count: usize) {
        if let Some(pb) = self.take_spinner() {
            pb.finish_with_message(format!("{} Loaded {} questions", "v".green(), count));
        }
    }

    fn on_load_failed(&self, _error: &LoadFailure) {
        // the error itself is printed by the caller
        if let Some(pb) = self.take_spinner() {
            pb.finish_and_clear();
        }
    }
}

/// Plain progress lines on stderr, for when stderr is not a terminal
pub struct SimpleProgress;

impl SimpleProgress {
    fn start_line(location: &str) -> String {
        format!("{} Loading questions from {}", "->".cyan(), location)
    }

    fn complete_line(count: usize) -> String {
        format!("  {} {} questions", "v".green(), count)
    }
}

impl LoadProgressNotifier for SimpleProgress {
    fn on_load_start(&self, location: &str) {
        eprintln!("{}", Self::start_line(location));
    }

    fn on_load_complete(&self, count: usize) {
        eprintln!("{}", Self::complete_line(count));
    }

    fn on_load_failed(&self, _error: &LoadFailure) {
        eprintln!("  {} load failed", "x".red());
    }
}
