use serde::{Deserialize, Serialize};

/// A single node in a roadmap tree.
///
/// `label` doubles as the storage key for progress tracking and as the URL
/// fragment for deep links, so it must be unique within a roadmap. Items
/// carrying a `url` are link-out nodes: they navigate away instead of
/// opening a detail drawer and are never checkable.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoadmapItem {
    pub label: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub certification: Option<String>,
    #[serde(default)]
    pub children: Option<Vec<RoadmapItem>>,
}

/// Number of checkable children an item has.
///
/// Explicit tri-state instead of a sentinel count: `NoChildren` can never
/// compare equal to a tally of checked entries, so leaf items always
/// aggregate to "not all read".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildCount {
    NoChildren,
    Count(usize),
}

impl RoadmapItem {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            description: None,
            url: None,
            certification: None,
            children: None,
        }
    }

    /// Link-out nodes navigate away instead of opening a drawer.
    pub fn is_link_out(&self) -> bool {
        self.url.as_deref().is_some_and(|u| !u.is_empty())
    }

    pub fn child_items(&self) -> &[RoadmapItem] {
        self.children.as_deref().unwrap_or_default()
    }

    /// Checkable child count. Link-out nodes and items without children
    /// report `NoChildren`; an empty `children` array counts as none.
    pub fn child_count(&self) -> ChildCount {
        if self.is_link_out() {
            return ChildCount::NoChildren;
        }
        match self.children.as_deref() {
            Some(children) if !children.is_empty() => ChildCount::Count(children.len()),
            _ => ChildCount::NoChildren,
        }
    }
}

/// One horizontal band of a roadmap. A missing `label` renders without a
/// heading.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Level {
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub items: Vec<RoadmapItem>,
}

/// A named roadmap: immutable configuration data decoded once at load.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Roadmap {
    pub title: String,
    pub levels: Vec<Level>,
}

/// Finds the first top-level item with the given label, traversing levels
/// in order, then items in order. Deep links and hash routing only target
/// top-level items; children are reachable through their parent's drawer.
pub fn find_item<'a>(levels: &'a [Level], label: &str) -> Option<&'a RoadmapItem> {
    levels
        .iter()
        .flat_map(|level| level.items.iter())
        .find(|item| item.label == label)
}

/// Top-level labels that appear more than once. Hash routing and checklist
/// keys both assume uniqueness; duplicates are reported at load time.
pub fn duplicate_labels(levels: &[Level]) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    let mut dupes = Vec::new();
    for item in levels.iter().flat_map(|level| level.items.iter()) {
        if !seen.insert(item.label.as_str()) && !dupes.contains(&item.label) {
            dupes.push(item.label.clone());
        }
    }
    dupes
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item_with_children(label: &str, children: &[&str]) -> RoadmapItem {
        RoadmapItem {
            children: Some(children.iter().map(|c| RoadmapItem::new(*c)).collect()),
            ..RoadmapItem::new(label)
        }
    }

    #[test]
    fn link_out_items_report_no_children() {
        let mut item = item_with_children("Frontend", &["HTML", "CSS"]);
        item.url = Some("/roadmap/frontend".to_string());
        assert!(item.is_link_out());
        assert_eq!(item.child_count(), ChildCount::NoChildren);
    }

    #[test]
    fn empty_url_is_not_link_out() {
        let mut item = RoadmapItem::new("HTML");
        item.url = Some(String::new());
        assert!(!item.is_link_out());
    }

    #[test]
    fn child_count_tri_state() {
        assert_eq!(RoadmapItem::new("leaf").child_count(), ChildCount::NoChildren);
        assert_eq!(
            item_with_children("p", &[]).child_count(),
            ChildCount::NoChildren
        );
        assert_eq!(
            item_with_children("p", &["a", "b"]).child_count(),
            ChildCount::Count(2)
        );
    }

    #[test]
    fn find_item_first_match_in_level_order() {
        let levels = vec![
            Level {
                label: Some("Basics".to_string()),
                description: None,
                items: vec![RoadmapItem::new("HTML"), RoadmapItem::new("CSS")],
            },
            Level {
                label: None,
                description: None,
                items: vec![RoadmapItem::new("CSS")],
            },
        ];
        let found = find_item(&levels, "CSS").unwrap();
        assert!(std::ptr::eq(found, &levels[0].items[1]));
        assert!(find_item(&levels, "Rust").is_none());
    }

    #[test]
    fn duplicate_labels_detected_once() {
        let levels = vec![
            Level {
                label: None,
                description: None,
                items: vec![RoadmapItem::new("CSS"), RoadmapItem::new("HTML")],
            },
            Level {
                label: None,
                description: None,
                items: vec![RoadmapItem::new("CSS")],
            },
        ];
        assert_eq!(duplicate_labels(&levels), vec!["CSS".to_string()]);
    }
}
