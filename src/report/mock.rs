//! Mock reporter for testing.
//!
//! `MockReporter` implements the `Reporter` trait and captures every call
//! for later assertion.

use super::{OutputMode, Reporter};

/// Mock reporter implementation for testing.
#[derive(Debug, Default)]
pub struct MockReporter {
    mode: OutputMode,
    messages: Vec<String>,
    outputs: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    failures: Vec<String>,
}

impl MockReporter {
    /// Create a new MockReporter with Normal output mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new MockReporter with a specific output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Get all captured messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured machine-readable output.
    pub fn outputs(&self) -> &[String] {
        &self.outputs
    }

    /// Get all captured success messages.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Get all captured warnings.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Get all captured failure messages.
    pub fn failures(&self) -> &[String] {
        &self.failures
    }

    /// Check if a specific message was shown.
    pub fn has_message(&self, msg: &str) -> bool {
        self.messages.iter().any(|m| m.contains(msg))
    }

    /// Check if the check was marked as failed.
    pub fn failed(&self) -> bool {
        !self.failures.is_empty()
    }
}

impl Reporter for MockReporter {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn output(&mut self, data: &str) {
        self.outputs.push(data.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn set_failed(&mut self, msg: &str) {
        self.failures.push(msg.to_string());
    }
}
