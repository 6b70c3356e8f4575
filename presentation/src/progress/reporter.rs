//! Progress reporting while a request is in flight

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;
use studio_application::SubmissionProgress;
use studio_domain::{GenerationOutcome, ImageModel, TurnId};

/// Shows a spinner for the outstanding request
pub struct ProgressReporter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold.cyan} {msg} {elapsed:.dim}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl SubmissionProgress for ProgressReporter {
    fn on_dispatch_start(&self, turn: TurnId, model: ImageModel) {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(Self::spinner_style());
        spinner.set_prefix(turn.to_string());
        spinner.set_message(format!("{}...", model.display_name()));
        spinner.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut slot) = self.spinner.lock()
            && let Some(previous) = slot.replace(spinner)
        {
            previous.finish_and_clear();
        }
    }

    fn on_settled(&self, _turn: TurnId, outcome: &GenerationOutcome) {
        let Some(spinner) = self.spinner.lock().ok().and_then(|mut slot| slot.take()) else {
            return;
        };
        if outcome.is_success() {
            spinner.finish_and_clear();
        } else {
            spinner.finish_with_message(format!("{}", "failed".red()));
        }
    }
}

/// Plain one-line progress for non-interactive output
pub struct SimpleProgress;

impl SubmissionProgress for SimpleProgress {
    fn on_dispatch_start(&self, turn: TurnId, model: ImageModel) {
        eprintln!("{} {} with {}...", "Sending".cyan(), turn, model.display_name());
    }
}
