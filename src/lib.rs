//! required-tasks - Fail CI when required pull request checklist items are unchecked.
//!
//! Pull request templates tag checklists with HTML comments. Lists tagged
//! `<!-- required_task -->` must have every item checked; lists tagged
//! `<!-- required_task_group -->` need at least one. This crate finds those
//! lists in a pull request body and fails the check when any are open.
//!
//! # Modules
//!
//! - [`checklist`] - Tag detection and checklist evaluation
//! - [`cli`] - Command-line interface and argument parsing
//! - [`error`] - Error types and result aliases
//! - [`github`] - Reading the pull request body from an event payload or file
//! - [`platform`] - CI environment detection
//! - [`report`] - Reporting results and failures to the CI platform
//!
//! # Example
//!
//! ```
//! use required_tasks::checklist::{find_incomplete_required_tasks, Evaluation};
//!
//! let body = "<!-- required_task -->\n- [x] tests pass\n- [ ] changelog updated";
//! assert_eq!(find_incomplete_required_tasks(body), vec!["changelog updated"]);
//! assert!(!Evaluation::of(Some(body)).passed());
//! ```

pub mod checklist;
pub mod cli;
pub mod error;
pub mod github;
pub mod platform;
pub mod report;

pub use error::{CheckError, Result};
