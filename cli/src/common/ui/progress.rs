//! # Console Reporter (`common::ui::progress`)
//!
//! File: cli/src/common/ui/progress.rs
//!
//! Terminal implementation of `Reporter`. While a pipeline step runs an
//! `indicatif` spinner shows the step name; confirmation and error lines go to
//! stdout. When stdout is not a terminal indicatif draws nothing, so piped
//! output only contains the result lines.
//!
use crate::common::ui::Reporter;
use crate::core::mode::Outcome;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::time::Duration;

const SPINNER_TEMPLATE: &str = "⏳ {msg}... {spinner}";
const SPINNER_TICKS: &str = "|/-\\ ";

/// Spinner plus stdout messages for the `packrs` binary.
pub struct ConsoleReporter {
    spinner: Option<ProgressBar>,
}

impl ConsoleReporter {
    /// Creates a reporter. With `show_progress` false no spinner is drawn.
    pub fn new(show_progress: bool, tick_interval: Duration) -> Self {
        let spinner = show_progress.then(|| {
            let spinner = ProgressBar::with_draw_target(None, ProgressDrawTarget::stdout());
            let style = ProgressStyle::with_template(SPINNER_TEMPLATE)
                .unwrap_or_else(|_| ProgressStyle::default_spinner())
                .tick_chars(SPINNER_TICKS);
            spinner.set_style(style);
            spinner.enable_steady_tick(tick_interval);
            spinner
        });
        Self { spinner }
    }

    /// Clears the spinner line. Safe to call more than once.
    pub fn finish(&self) {
        if let Some(spinner) = &self.spinner {
            spinner.finish_and_clear();
        }
    }

    /// Prints `line` to stdout without tearing the spinner.
    fn print_line(&self, line: &str) {
        match &self.spinner {
            Some(spinner) => spinner.suspend(|| println!("{}", line)),
            None => println!("{}", line),
        }
    }
}

impl Reporter for ConsoleReporter {
    fn on_progress(&self, task: &str) {
        if let Some(spinner) = &self.spinner {
            spinner.set_message(task.to_string());
        }
    }

    fn on_success(&self, outcome: &Outcome) {
        self.print_line(&format!("✅ {}", outcome));
    }

    fn on_error(&self, error: &anyhow::Error) {
        self.print_line(&format!("❌ Error: {:#}", error));
    }
}

impl Drop for ConsoleReporter {
    fn drop(&mut self) {
        self.finish();
    }
}
