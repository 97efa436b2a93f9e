//! List command implementation.
//!
//! `required-tasks list` shows every required checklist found in the body,
//! which helps when a tag is not picking up the list it was meant for.

use serde::Serialize;

use crate::checklist::{find_all_regions, Region};
use crate::cli::args::{ListArgs, OutputFormat};
use crate::error::Result;
use crate::github::BodySource;
use crate::report::Reporter;

use super::dispatcher::{Command, CommandResult};

#[derive(Serialize)]
struct JsonRegion<'a> {
    satisfied: bool,
    #[serde(flatten)]
    region: &'a Region,
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    regions: Vec<JsonRegion<'a>>,
}

/// The list command implementation.
pub struct ListCommand {
    args: ListArgs,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(args: ListArgs) -> Self {
        Self { args }
    }

    fn format_region(region: &Region) -> Vec<String> {
        let state = if region.is_satisfied() {
            "complete"
        } else {
            "incomplete"
        };
        let mut lines = vec![format!("Line {}: {} ({})", region.line, region.tag, state)];
        for item in &region.items {
            lines.push(format!(
                "  {}- {} {}",
                " ".repeat(item.indent),
                item.checkbox(),
                item.text
            ));
        }
        lines
    }
}

impl Command for ListCommand {
    fn execute(&self, reporter: &mut dyn Reporter) -> Result<CommandResult> {
        let source = BodySource::resolve(
            self.args.input.body_file.as_deref(),
            self.args.input.event_path.as_deref(),
        )?;
        let body = source.read()?.unwrap_or_default();
        let regions = find_all_regions(&body);
        tracing::debug!("Found {} required checklist(s)", regions.len());

        match self.args.format {
            OutputFormat::Json => {
                let output = JsonOutput {
                    regions: regions
                        .iter()
                        .map(|region| JsonRegion {
                            satisfied: region.is_satisfied(),
                            region,
                        })
                        .collect(),
                };
                let json = serde_json::to_string_pretty(&output).map_err(anyhow::Error::from)?;
                reporter.output(&json);
            }
            OutputFormat::Human if regions.is_empty() => {
                reporter.message("No required checklists found.");
            }
            OutputFormat::Human => {
                for region in &regions {
                    for line in Self::format_region(region) {
                        reporter.message(&line);
                    }
                }
            }
        }

        Ok(CommandResult::success())
    }
}
