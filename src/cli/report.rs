//! CLI report callback
//!
//! Drives the spinner while a request is in flight and renders the
//! outcome panel once the catalog answers. The spinner is cleared on
//! every path, success or failure, so the terminal always returns to its
//! idle state.

use crate::cli::style::{Stylize, check, cross, spinner_style};
use anstream::{eprintln, println};
use async_trait::async_trait;
use csw_publish::error::Error;
use csw_publish::publish::ReportCallback;
use csw_publish::types::{PublishMode, PublishOutcome};
use indicatif::ProgressBar;
use std::time::Duration;

/// CLI report callback that prints to the terminal
///
/// Two modes:
/// - verbose: additionally prints the request body before sending
/// - compact: outcome panel only
pub struct CliReport {
    verbose: bool,
    spinner: ProgressBar,
}

impl CliReport {
    /// Create a verbose report (prints the request body)
    #[must_use]
    pub fn verbose() -> Self {
        Self::new(true)
    }

    /// Create a compact report
    #[must_use]
    pub fn compact() -> Self {
        Self::new(false)
    }

    fn new(verbose: bool) -> Self {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(spinner_style());
        Self { verbose, spinner }
    }
}

#[async_trait]
impl ReportCallback for CliReport {
    async fn on_request_built(&self, mode: PublishMode, body: &str) {
        if self.verbose {
            println!("{}", "Request body:".muted());
            println!("{body}");
            println!();
        }

        let message = match mode {
            PublishMode::Insert => "Inserting metadata record...",
            PublishMode::Harvest => "Requesting harvest...",
        };
        self.spinner.set_message(message);
        self.spinner.enable_steady_tick(Duration::from_millis(80));
    }

    async fn on_outcome(&self, outcome: &PublishOutcome) {
        self.spinner.finish_and_clear();
        match outcome {
            PublishOutcome::Success(totals) => {
                println!("{} {}", check(), totals.to_string().success());
            }
            PublishOutcome::ServiceException(text) => {
                eprintln!("{} {}", cross(), format!("CSW-T Error: {text}").error());
            }
        }
    }

    async fn on_error(&self, _error: &Error) {
        // Restore the idle state; the error itself propagates to main
        self.spinner.finish_and_clear();
    }
}
