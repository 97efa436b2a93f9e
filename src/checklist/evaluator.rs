//! Required checklist evaluation.

use serde::Serialize;

use super::region::find_regions;
use super::tag::SentinelTag;

/// Failure message reported when any required task or group is incomplete.
pub const FAILURE_MESSAGE: &str = "Some required tasks are incomplete.";

/// Text of every unchecked item in a required-task region, in document order.
///
/// # Example
///
/// ```
/// use required_tasks::checklist::find_incomplete_required_tasks;
///
/// let body = "<!-- required_task -->\n- [X] task A\n- [ ] task B";
/// assert_eq!(find_incomplete_required_tasks(body), vec!["task B"]);
/// ```
pub fn find_incomplete_required_tasks(body: &str) -> Vec<String> {
    find_regions(body, SentinelTag::RequiredTask)
        .iter()
        .flat_map(|region| region.incomplete_texts())
        .collect()
}

/// Required groups with no checked item, each as its list of item texts.
///
/// A group with at least one checked item is satisfied and left out.
///
/// # Example
///
/// ```
/// use required_tasks::checklist::find_incomplete_required_groups;
///
/// let body = "<!-- required_task_group -->\n- [ ] a\n- [ ] b";
/// assert_eq!(find_incomplete_required_groups(body), vec![vec!["a", "b"]]);
///
/// let body = "<!-- required_task_group -->\n- [X] a\n- [ ] b";
/// assert!(find_incomplete_required_groups(body).is_empty());
/// ```
pub fn find_incomplete_required_groups(body: &str) -> Vec<Vec<String>> {
    find_regions(body, SentinelTag::RequiredGroup)
        .iter()
        .filter(|region| !region.is_satisfied())
        .map(|region| region.incomplete_texts())
        .collect()
}

/// Outcome of evaluating one pull request body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Evaluation {
    /// Unchecked items from required-task regions.
    pub incomplete_tasks: Vec<String>,
    /// Required groups with nothing checked.
    pub incomplete_groups: Vec<Vec<String>>,
}

impl Evaluation {
    /// Evaluate a body. A missing body counts as an empty document.
    pub fn of(body: Option<&str>) -> Self {
        let body = body.unwrap_or_default();
        Self {
            incomplete_tasks: find_incomplete_required_tasks(body),
            incomplete_groups: find_incomplete_required_groups(body),
        }
    }

    /// Number of incomplete tasks plus incomplete groups.
    pub fn incomplete_count(&self) -> usize {
        self.incomplete_tasks.len() + self.incomplete_groups.len()
    }

    /// Whether every required task and group is satisfied.
    pub fn passed(&self) -> bool {
        self.incomplete_count() == 0
    }
}
