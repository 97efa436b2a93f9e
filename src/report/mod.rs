//! Check result reporting.
//!
//! This module provides:
//! - [`Reporter`] trait for delivering output and the pass/fail signal
//! - [`ActionsReporter`] for GitHub Actions (workflow commands)
//! - [`ConsoleReporter`] for local runs and other CI systems
//! - [`MockReporter`] for capturing output in tests
//!
//! # Example
//!
//! ```
//! use required_tasks::report::{MockReporter, Reporter};
//!
//! let mut reporter = MockReporter::new();
//! reporter.message("- [ ] docs updated");
//! reporter.set_failed("Some required tasks are incomplete.");
//!
//! assert_eq!(reporter.failures(), ["Some required tasks are incomplete."]);
//! ```

pub mod actions;
pub mod console;
pub mod mock;

pub use actions::{escape_data, ActionsReporter};
pub use console::ConsoleReporter;
pub use mock::MockReporter;

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Show details and status lines.
    #[default]
    Normal,
    /// Show failures and warnings only.
    Quiet,
}

impl OutputMode {
    /// Check if this mode shows messages and success lines.
    pub fn shows_status(&self) -> bool {
        matches!(self, Self::Normal)
    }
}

/// Trait for reporting a check back to the CI platform.
///
/// This trait allows mocking the platform in tests.
pub trait Reporter {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display a plain line of output.
    fn message(&mut self, msg: &str);

    /// Write machine-readable output to stdout.
    ///
    /// Unlike [`Reporter::message`], this is printed in every output mode.
    fn output(&mut self, data: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning.
    fn warning(&mut self, msg: &str);

    /// Mark the check as failed with the given message.
    ///
    /// Failures are shown in every output mode.
    fn set_failed(&mut self, msg: &str);
}

/// Create the reporter for the current environment.
pub fn create_reporter(github_actions: bool, mode: OutputMode) -> Box<dyn Reporter> {
    if github_actions {
        Box::new(ActionsReporter::new(mode))
    } else {
        Box::new(ConsoleReporter::new(mode))
    }
}
