use crate::domain::roadmap::{ChildCount, RoadmapItem};
use crate::repository::checklist_repository::{child_key, set_entry, Checklist};
use crate::repository::storage::StorageError;
use crate::repository::ChecklistRepository;
use tracing::debug;

/// True when every child of `parent_label` is marked read.
///
/// Counts true entries whose key carries the `-{parent_label}` suffix and
/// compares against the child count. `NoChildren` can never match a tally,
/// so leaf items are never "all read".
pub fn is_all_children_read(map: &Checklist, parent_label: &str, count: ChildCount) -> bool {
    let ChildCount::Count(expected) = count else {
        return false;
    };
    let suffix = format!("-{parent_label}");
    let read = map
        .iter()
        .filter(|&(key, &checked)| checked && key.ends_with(&suffix))
        .count();
    read == expected
}

/// Sets every child's composite key to `checked` in a single pass over the
/// children, returning one updated map for one atomic save.
pub fn set_all_children(
    map: Checklist,
    parent_label: &str,
    children: &[RoadmapItem],
    checked: bool,
) -> Checklist {
    children.iter().fold(map, |acc, child| {
        set_entry(acc, &child_key(&child.label, parent_label), checked)
    })
}

/// Single writer for the persisted checklist. All toggles go through this
/// service so every mutation is a whole-map read-modify-write followed by
/// exactly one save.
#[derive(Clone)]
pub struct ProgressService {
    checklist: ChecklistRepository,
}

impl ProgressService {
    pub fn new(checklist: ChecklistRepository) -> Self {
        Self { checklist }
    }

    pub fn load(&self) -> Checklist {
        self.checklist.load()
    }

    /// Marks one entry and persists the whole map.
    pub fn set_read(
        &self,
        map: Checklist,
        key: &str,
        checked: bool,
    ) -> Result<Checklist, StorageError> {
        let updated = set_entry(map, key, checked);
        self.checklist.save(&updated)?;
        debug!(key, checked, "checklist entry saved");
        Ok(updated)
    }

    /// Marks all children of `item` and persists the result as one write,
    /// so no reader ever observes a partially updated map.
    pub fn check_all_children(
        &self,
        map: Checklist,
        item: &RoadmapItem,
        checked: bool,
    ) -> Result<Checklist, StorageError> {
        let updated = set_all_children(map, &item.label, item.child_items(), checked);
        self.checklist.save(&updated)?;
        debug!(parent = %item.label, checked, "bulk checklist update saved");
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::roadmap::RoadmapItem;
    use crate::repository::storage::MemoryStorage;

    fn parent(label: &str, children: &[&str]) -> RoadmapItem {
        RoadmapItem {
            children: Some(children.iter().map(|c| RoadmapItem::new(*c)).collect()),
            ..RoadmapItem::new(label)
        }
    }

    fn service() -> ProgressService {
        ProgressService::new(ChecklistRepository::new(MemoryStorage::shared()))
    }

    #[test]
    fn checking_all_children_completes_the_parent() {
        let item = parent("Frontend", &["HTML", "CSS", "JS"]);
        let map = set_all_children(Checklist::new(), "Frontend", item.child_items(), true);
        assert!(is_all_children_read(&map, "Frontend", ChildCount::Count(3)));
    }

    #[test]
    fn unchecking_all_children_clears_completion() {
        let item = parent("Frontend", &["HTML", "CSS"]);
        let map = set_all_children(Checklist::new(), "Frontend", item.child_items(), true);
        let map = set_all_children(map, "Frontend", item.child_items(), false);
        assert!(!is_all_children_read(&map, "Frontend", ChildCount::Count(2)));
    }

    #[test]
    fn single_checked_child_matches_count_of_one() {
        let map = set_entry(Checklist::new(), "CSS-Frontend", true);
        assert!(is_all_children_read(&map, "Frontend", ChildCount::Count(1)));
    }

    #[test]
    fn leaf_items_are_never_all_read() {
        let mut map = Checklist::new();
        map.insert("anything-Frontend".to_string(), true);
        assert!(!is_all_children_read(&map, "Frontend", ChildCount::NoChildren));
        assert!(!is_all_children_read(&Checklist::new(), "Leaf", ChildCount::NoChildren));
    }

    #[test]
    fn unchecked_entries_do_not_count() {
        let mut map = Checklist::new();
        map.insert("CSS-Frontend".to_string(), false);
        map.insert("HTML-Frontend".to_string(), true);
        assert!(!is_all_children_read(&map, "Frontend", ChildCount::Count(2)));
    }

    #[test]
    fn suffix_match_ignores_other_parents() {
        let mut map = Checklist::new();
        map.insert("SQL-Backend".to_string(), true);
        map.insert("CSS-Frontend".to_string(), true);
        assert!(is_all_children_read(&map, "Frontend", ChildCount::Count(1)));
        assert!(!is_all_children_read(&map, "Frontend", ChildCount::Count(2)));
    }

    #[test]
    fn bulk_update_is_one_persisted_write() {
        let service = service();
        let item = parent("Frontend", &["HTML", "CSS"]);

        let map = service
            .check_all_children(Checklist::new(), &item, true)
            .unwrap();
        assert!(is_all_children_read(&map, "Frontend", ChildCount::Count(2)));

        // A fresh load observes the complete update, never a partial one.
        let reloaded = service.load();
        assert_eq!(reloaded, map);
    }

    #[test]
    fn set_read_persists_across_loads() {
        let service = service();
        let map = service.set_read(service.load(), "HTML", true).unwrap();
        assert_eq!(map.get("HTML"), Some(&true));
        assert_eq!(service.load().get("HTML"), Some(&true));
    }
}
