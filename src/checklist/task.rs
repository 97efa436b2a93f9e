//! Task list items.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

/// A single checkbox line: indentation, checkbox glyph, item text.
static TASK_LINE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^( *)- \[([xX ])\] ([^\n]+)$").expect("TASK_LINE_REGEX must compile")
});

/// One item of a markdown task list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskItem {
    /// Text following the checkbox, up to the end of the line.
    pub text: String,
    /// Whether the checkbox is ticked (`x` or `X`).
    pub complete: bool,
    /// Number of leading spaces. Only affects presentation.
    pub indent: usize,
}

impl TaskItem {
    /// Parse a single line as a task item.
    ///
    /// Returns `None` for anything that is not a checkbox line, including
    /// lines with an empty item text. A trailing `\r` is dropped.
    ///
    /// # Example
    ///
    /// ```
    /// use required_tasks::checklist::TaskItem;
    ///
    /// let item = TaskItem::parse("  - [X] update changelog").unwrap();
    /// assert_eq!(item.text, "update changelog");
    /// assert!(item.complete);
    /// assert_eq!(item.indent, 2);
    ///
    /// assert!(TaskItem::parse("- plain bullet").is_none());
    /// ```
    pub fn parse(line: &str) -> Option<Self> {
        let caps = TASK_LINE_REGEX.captures(line)?;
        let text = caps[3].strip_suffix('\r').unwrap_or(&caps[3]);
        if text.is_empty() {
            return None;
        }
        Some(Self {
            text: text.to_string(),
            complete: &caps[2] != " ",
            indent: caps[1].len(),
        })
    }

    /// The checkbox as it would appear in markdown.
    pub fn checkbox(&self) -> &'static str {
        if self.complete {
            "[x]"
        } else {
            "[ ]"
        }
    }
}
