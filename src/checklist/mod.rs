//! Required checklist detection.
//!
//! Pull request templates mark checklists that must be completed with an
//! HTML comment on the line before the list:
//!
//! - `<!-- required_task -->` - every item in the following list must be checked
//! - `<!-- required_task_group -->` - at least one item must be checked
//!
//! This module finds those tagged lists in a markdown body and reports what is
//! still open. Everything here is a pure function of the input text.
//!
//! - [`SentinelTag`] - The two tag kinds and their literal markers
//! - [`TaskItem`] - A parsed checkbox line
//! - [`Region`] - A tagged task list
//! - [`Evaluation`] - Incomplete tasks and groups for a whole body
//!
//! # Example
//!
//! ```
//! use required_tasks::checklist::Evaluation;
//!
//! let body = "\
//! ## Checklist
//! <!-- required_task -->
//! - [x] tests added
//! - [ ] docs updated
//!
//! <!-- required_task_group -->
//! - [ ] tested on Linux
//! - [ ] tested on macOS
//! ";
//!
//! let evaluation = Evaluation::of(Some(body));
//! assert_eq!(evaluation.incomplete_tasks, vec!["docs updated"]);
//! assert_eq!(
//!     evaluation.incomplete_groups,
//!     vec![vec!["tested on Linux", "tested on macOS"]]
//! );
//! assert!(!evaluation.passed());
//! ```

pub mod evaluator;
pub mod region;
pub mod tag;
pub mod task;

pub use evaluator::{
    find_incomplete_required_groups, find_incomplete_required_tasks, Evaluation, FAILURE_MESSAGE,
};
pub use region::{find_all_regions, find_regions, Region};
pub use tag::SentinelTag;
pub use task::TaskItem;
