//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// required-tasks - Fail CI when required pull request checklist items are unchecked.
#[derive(Debug, Parser)]
#[command(name = "required-tasks")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Only print failures and warnings
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    // Options for `check` when no subcommand is given
    #[command(flatten)]
    pub check: CheckArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check that required tasks are complete (default if no command specified)
    Check(CheckArgs),

    /// List every required checklist in the body
    List(ListArgs),
}

/// Where to read the pull request body from.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct InputArgs {
    /// Webhook event payload containing the pull request
    #[arg(long, env = "GITHUB_EVENT_PATH", value_name = "PATH")]
    pub event_path: Option<PathBuf>,

    /// Markdown file with the pull request body (`-` for stdin)
    #[arg(long, env = "REQUIRED_TASKS_BODY_FILE", value_name = "PATH")]
    pub body_file: Option<PathBuf>,
}

impl InputArgs {
    /// Fill in options not given here from `fallback`.
    pub fn or(&self, fallback: &InputArgs) -> InputArgs {
        InputArgs {
            event_path: self
                .event_path
                .clone()
                .or_else(|| fallback.event_path.clone()),
            body_file: self.body_file.clone().or_else(|| fallback.body_file.clone()),
        }
    }
}

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable lines
    #[default]
    Human,
    /// Machine-readable JSON on stdout
    Json,
}

impl OutputFormat {
    /// Use `fallback` when this is the default format.
    pub fn or(self, fallback: OutputFormat) -> OutputFormat {
        if self == OutputFormat::Human {
            fallback
        } else {
            self
        }
    }
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CheckArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ListArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}
