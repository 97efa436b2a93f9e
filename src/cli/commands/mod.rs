//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! Commands are dispatched via [`CommandDispatcher`]. Running the binary
//! without a subcommand is the same as `check`, which is how the GitHub
//! Action invokes it.

pub mod check;
pub mod dispatcher;
pub mod list;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
