//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use crate::cli::args::{CheckArgs, Cli, Commands, ListArgs};
use crate::error::Result;
use crate::report::Reporter;

use super::check::CheckCommand;
use super::list::ListCommand;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `reporter` - Where output and the failure signal go
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, reporter: &mut dyn Reporter) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
#[derive(Debug, Default)]
pub struct CommandDispatcher;

impl CommandDispatcher {
    /// Create a new dispatcher.
    pub fn new() -> Self {
        Self
    }

    /// Dispatch and execute a command.
    ///
    /// Without a subcommand the top-level options run `check`. With one,
    /// top-level options fill in whatever the subcommand left unset.
    pub fn dispatch(&self, cli: &Cli, reporter: &mut dyn Reporter) -> Result<CommandResult> {
        let top = &cli.check;
        match &cli.command {
            Some(Commands::Check(args)) => CheckCommand::new(CheckArgs {
                input: args.input.or(&top.input),
                format: args.format.or(top.format),
            })
            .execute(reporter),
            Some(Commands::List(args)) => ListCommand::new(ListArgs {
                input: args.input.or(&top.input),
                format: args.format.or(top.format),
            })
            .execute(reporter),
            None => CheckCommand::new(top.clone()).execute(reporter),
        }
    }
}
