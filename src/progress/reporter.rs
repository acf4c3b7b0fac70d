//! Progress reporter implementation
//!
//! Uses an indicatif spinner that is visible only while a dispatch or
//! probe blocks the calling thread, and is cleared before results print.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::{Duration, Instant};

/// Spinner for blocking benchmark phases
#[derive(Debug, Clone)]
pub struct ProgressReporter {
    /// Is progress enabled
    enabled: bool,
}

impl ProgressReporter {
    /// Create a new progress reporter drawing to stderr
    pub fn new() -> Self {
        Self { enabled: true }
    }

    /// Create a disabled progress reporter (for quiet mode)
    pub fn disabled() -> Self {
        Self { enabled: false }
    }

    /// Check if progress is enabled
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn spinner(&self, msg: String) -> ProgressBar {
        if !self.enabled {
            return ProgressBar::hidden();
        }

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg} [{elapsed_precise}]")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        spinner.set_message(msg);
        spinner.enable_steady_tick(Duration::from_millis(120));
        spinner
    }

    /// Run `f` with the spinner showing `msg`; returns the value and the time `f` took
    pub fn track<T>(&self, msg: impl Into<String>, f: impl FnOnce() -> T) -> (T, Duration) {
        let spinner = self.spinner(msg.into());

        let started = Instant::now();
        let value = f();
        let elapsed = started.elapsed();

        spinner.finish_and_clear();
        (value, elapsed)
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}
