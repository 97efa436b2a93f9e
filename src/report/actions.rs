//! GitHub Actions reporter.
//!
//! Failures and warnings are written as workflow commands
//! (`::error::message`) so the runner turns them into annotations on the
//! check run. The process exit code is what actually fails the job.

use super::{OutputMode, Reporter};

/// Escape a message for use as workflow command data.
///
/// The runner reads one command per line, so line breaks and the escape
/// character itself must be percent-encoded.
///
/// # Example
///
/// ```
/// use required_tasks::report::escape_data;
///
/// assert_eq!(escape_data("100% done\nnext"), "100%25 done%0Anext");
/// ```
pub fn escape_data(msg: &str) -> String {
    msg.replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// Format a workflow command line.
fn workflow_command(command: &str, msg: &str) -> String {
    format!("::{}::{}", command, escape_data(msg))
}

/// Reporter that speaks the GitHub Actions workflow command protocol.
pub struct ActionsReporter {
    mode: OutputMode,
}

impl ActionsReporter {
    /// Create a new Actions reporter.
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }
}

impl Reporter for ActionsReporter {
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
            println!("{}", msg);
        }
    }

    fn warning(&mut self, msg: &str) {
        println!("{}", workflow_command("warning", msg));
    }

    fn set_failed(&mut self, msg: &str) {
        println!("{}", workflow_command("error", msg));
    }
}
