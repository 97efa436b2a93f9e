//! Tagged checklist regions.

use serde::Serialize;

use super::tag::SentinelTag;
use super::task::TaskItem;

/// A task list bound to the sentinel tag right before it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Region {
    /// Which tag introduced the list.
    pub tag: SentinelTag,
    /// 1-based line number of the first item.
    pub line: usize,
    /// Items in document order.
    pub items: Vec<TaskItem>,
}

impl Region {
    /// Items whose checkbox is empty, in document order.
    pub fn incomplete_items(&self) -> impl Iterator<Item = &TaskItem> {
        self.items.iter().filter(|item| !item.complete)
    }

    /// Text of every incomplete item, in document order.
    pub fn incomplete_texts(&self) -> Vec<String> {
        self.incomplete_items()
            .map(|item| item.text.clone())
            .collect()
    }

    /// Whether the region meets its tag's requirement.
    ///
    /// Required tasks need every item ticked; a required group needs at
    /// least one. A region without items is always satisfied.
    pub fn is_satisfied(&self) -> bool {
        match self.tag {
            SentinelTag::RequiredTask => self.items.iter().all(|item| item.complete),
            SentinelTag::RequiredGroup => {
                self.items.is_empty() || self.items.iter().any(|item| item.complete)
            }
        }
    }
}

/// Find every region introduced by `tag`, in document order.
///
/// # Example
///
/// ```
/// use required_tasks::checklist::{find_regions, SentinelTag};
///
/// let body = "Intro\n<!-- required_task -->\n- [x] one\n- [ ] two\n";
/// let regions = find_regions(body, SentinelTag::RequiredTask);
/// assert_eq!(regions.len(), 1);
/// assert_eq!(regions[0].line, 3);
/// assert_eq!(regions[0].incomplete_texts(), vec!["two".to_string()]);
/// ```
pub fn find_regions(body: &str, tag: SentinelTag) -> Vec<Region> {
    tag.region_regex()
        .captures_iter(body)
        .filter_map(|caps| caps.get(1))
        .map(|list| Region {
            tag,
            // The capture begins with the newline ending the tag's line.
            line: body[..list.start()].matches('\n').count() + 2,
            items: list.as_str().lines().filter_map(TaskItem::parse).collect(),
        })
        .collect()
}

/// Find regions of both kinds, ordered by position in the document.
pub fn find_all_regions(body: &str) -> Vec<Region> {
    let mut regions: Vec<Region> = SentinelTag::ALL
        .iter()
        .flat_map(|tag| find_regions(body, *tag))
        .collect();
    regions.sort_by_key(|region| region.line);
    regions
}
