//! `TerminalReporter` — Presentation-layer implementation of the progress
//! observer ports.
//!
//! Wraps `&OutputContext` and implements `application::ports::ProgressReporter`
//! so application services can emit step events without depending on any
//! presentation type directly. On a TTY each step drives an indicatif
//! spinner; otherwise steps degrade to plain lines.

use indicatif::ProgressBar;
use owo_colors::OwoColorize as _;

use crate::application::ports::{ProgressReporter, ProgressStep};
use crate::output::{OutputContext, progress};

/// Terminal progress reporter that wraps an `OutputContext`.
pub struct TerminalReporter<'a> {
    ctx: &'a OutputContext,
}

impl<'a> TerminalReporter<'a> {
    /// Create a new `TerminalReporter` wrapping the given output context.
    #[must_use]
    pub fn new(ctx: &'a OutputContext) -> Self {
        Self { ctx }
    }
}

impl ProgressReporter for TerminalReporter<'_> {
    type Step = TerminalStep;

    fn start(&self, message: &str) -> TerminalStep {
        if self.ctx.show_progress() {
            return TerminalStep {
                spinner: Some(progress::spinner(message)),
                quiet: self.ctx.quiet,
            };
        }
        if !self.ctx.quiet {
            println!("  {} {message}", "→".cyan());
        }
        TerminalStep {
            spinner: None,
            quiet: self.ctx.quiet,
        }
    }
}

/// One in-flight step. Dropping it without `success` leaves the spinner
/// unfinished — the visible signal that the step failed.
pub struct TerminalStep {
    spinner: Option<ProgressBar>,
    quiet: bool,
}

impl ProgressStep for TerminalStep {
    fn note(&self, message: &str) {
        if let Some(spinner) = &self.spinner {
            spinner.set_message(message.to_string());
        }
    }

    fn success(&self, message: &str) {
        match &self.spinner {
            Some(spinner) => progress::finish_ok(spinner, message),
            None if !self.quiet => println!("  {} {message}", "✓".green()),
            None => {}
        }
    }
}
