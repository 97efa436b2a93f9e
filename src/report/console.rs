//! Console reporter for local runs and non-GitHub CI.

use super::{OutputMode, Reporter};

/// Reporter writing plain lines to stdout and stderr.
pub struct ConsoleReporter {
    mode: OutputMode,
}

impl ConsoleReporter {
    /// Create a new console reporter.
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }
}

impl Reporter for ConsoleReporter {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    fn output(&mut self, data: &str) {
        println!("{}", data);
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("✓ {}", msg);
        }
    }

    fn warning(&mut self, msg: &str) {
        eprintln!("⚠ {}", msg);
    }

    fn set_failed(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }
}
