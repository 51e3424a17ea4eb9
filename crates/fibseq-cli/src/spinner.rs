//! Spinner shown while a generation is "in progress".

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Message displayed next to the spinner.
pub const SPINNER_MESSAGE: &str = "Calculating the magic of mathematics...";

/// Thin wrapper around an indicatif spinner on stderr.
pub struct Spinner {
    bar: ProgressBar,
}

impl Spinner {
    /// Start a spinner; a hidden one draws nothing.
    #[must_use]
    pub fn start(message: &str, hidden: bool) -> Self {
        let bar = if hidden {
            ProgressBar::hidden()
        } else {
            ProgressBar::new_spinner()
        };
        let style = ProgressStyle::with_template("{spinner:.magenta} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());
        bar.set_style(style);
        bar.set_message(message.to_string());
        if !hidden {
            bar.enable_steady_tick(Duration::from_millis(80));
        }
        Self { bar }
    }

    /// Keep spinning for `delay`, then clear the line.
    pub fn hold_and_clear(self, delay: Duration) {
        if !delay.is_zero() {
            std::thread::sleep(delay);
        }
        self.bar.finish_and_clear();
    }

    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.bar.is_hidden()
    }
}
