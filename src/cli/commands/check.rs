//! Check command implementation.
//!
//! `required-tasks check` reads the pull request body, evaluates every
//! required checklist in it, and fails when something is still open.

use serde::Serialize;

use crate::checklist::{Evaluation, FAILURE_MESSAGE};
use crate::cli::args::{CheckArgs, OutputFormat};
use crate::error::Result;
use crate::github::BodySource;
use crate::report::Reporter;

use super::dispatcher::{Command, CommandResult};

/// JSON shape of a check result.
#[derive(Serialize)]
struct CheckReport<'a> {
    passed: bool,
    #[serde(flatten)]
    evaluation: &'a Evaluation,
}

/// The check command implementation.
pub struct CheckCommand {
    args: CheckArgs,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(args: CheckArgs) -> Self {
        Self { args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &CheckArgs {
        &self.args
    }

    fn report_human(&self, evaluation: &Evaluation, reporter: &mut dyn Reporter) {
        if !evaluation.incomplete_tasks.is_empty() {
            reporter.message("Incomplete required tasks:");
            for task in &evaluation.incomplete_tasks {
                reporter.message(&format!("  - [ ] {}", task));
            }
        }

        for (index, group) in evaluation.incomplete_groups.iter().enumerate() {
            reporter.message(&format!(
                "Required group {} needs at least one checked item:",
                index + 1
            ));
            for task in group {
                reporter.message(&format!("  - [ ] {}", task));
            }
        }
    }

    fn report_json(&self, evaluation: &Evaluation, reporter: &mut dyn Reporter) -> Result<()> {
        let report = CheckReport {
            passed: evaluation.passed(),
            evaluation,
        };
        let output = serde_json::to_string_pretty(&report).map_err(anyhow::Error::from)?;
        reporter.output(&output);
        Ok(())
    }
}

impl Command for CheckCommand {
    fn execute(&self, reporter: &mut dyn Reporter) -> Result<CommandResult> {
        let source = BodySource::resolve(
            self.args.input.body_file.as_deref(),
            self.args.input.event_path.as_deref(),
        )?;
        tracing::debug!("Reading pull request body from {:?}", source);

        let body = source.read()?;
        if body.is_none() {
            reporter.warning("No pull request body found; nothing to check.");
        }
        let evaluation = Evaluation::of(body.as_deref());
        tracing::debug!(
            incomplete_tasks = evaluation.incomplete_tasks.len(),
            incomplete_groups = evaluation.incomplete_groups.len(),
            "Evaluated required tasks"
        );

        match self.args.format {
            OutputFormat::Human => self.report_human(&evaluation, reporter),
            OutputFormat::Json => self.report_json(&evaluation, reporter)?,
        }

        if evaluation.passed() {
            if self.args.format == OutputFormat::Human {
                reporter.success("All required tasks are complete.");
            }
            Ok(CommandResult::success())
        } else {
            reporter.set_failed(FAILURE_MESSAGE);
            Ok(CommandResult::failure(1))
        }
    }
}
