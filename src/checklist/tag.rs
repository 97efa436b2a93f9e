//! Sentinel tags that mark required checklists.
//!
//! A tag is an HTML comment placed on its own line right before a task list.
//! It is invisible once the pull request description is rendered, so authors
//! can keep it in their templates without affecting the displayed checklist.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

/// One or more consecutive checkbox lines, each introduced by a newline.
///
/// The leading newline forces the list to start on a line after the tag.
/// Only `\n` ends a line; a stray `\r` is part of the item text.
const TASK_LIST_PATTERN: &str = r"(?:\r?\n[ ]*- \[[xX ]\] [^\n]+)+";

macro_rules! region_regex {
    ($name:ident, $marker:expr) => {
        static $name: LazyLock<Regex> = LazyLock::new(|| {
            let pattern = format!(r"{}\s*({})", regex::escape($marker), TASK_LIST_PATTERN);
            Regex::new(&pattern).expect("region pattern must compile")
        });
    };
}

region_regex!(RE_REQUIRED_TASK_REGION, SentinelTag::REQUIRED_TASK_MARKER);
region_regex!(RE_REQUIRED_GROUP_REGION, SentinelTag::REQUIRED_GROUP_MARKER);

/// The kind of sentinel tag preceding a task list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SentinelTag {
    /// Every item in the list must be checked.
    RequiredTask,
    /// At least one item in the list must be checked.
    RequiredGroup,
}

impl SentinelTag {
    /// Literal marker for required tasks.
    pub const REQUIRED_TASK_MARKER: &'static str = "<!-- required_task -->";

    /// Literal marker for required groups.
    pub const REQUIRED_GROUP_MARKER: &'static str = "<!-- required_task_group -->";

    /// Both tag kinds.
    pub const ALL: [SentinelTag; 2] = [SentinelTag::RequiredTask, SentinelTag::RequiredGroup];

    /// The literal comment that introduces this kind of region.
    pub fn marker(self) -> &'static str {
        match self {
            SentinelTag::RequiredTask => Self::REQUIRED_TASK_MARKER,
            SentinelTag::RequiredGroup => Self::REQUIRED_GROUP_MARKER,
        }
    }

    /// Compiled regex matching the tag and capturing the task list after it.
    pub(crate) fn region_regex(self) -> &'static Regex {
        match self {
            SentinelTag::RequiredTask => &RE_REQUIRED_TASK_REGION,
            SentinelTag::RequiredGroup => &RE_REQUIRED_GROUP_REGION,
        }
    }
}

impl fmt::Display for SentinelTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SentinelTag::RequiredTask => write!(f, "required tasks"),
            SentinelTag::RequiredGroup => write!(f, "required group"),
        }
    }
}
