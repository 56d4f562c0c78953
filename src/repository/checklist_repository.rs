use super::storage::{StorageBackend, StorageError};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::warn;

/// The whole persisted "item read" map. Keys are bare labels for top-level
/// items and `"{child}-{parent}"` composite keys for children.
pub type Checklist = HashMap<String, bool>;

/// Single well-known storage key holding the serialized checklist.
pub const CHECKLIST_STORAGE_KEY: &str = "selected_items";

/// Composite key for a child entry. Two parents with identical labels and
/// same-named children collide; accepted limitation of the key scheme.
pub fn child_key(child_label: &str, parent_label: &str) -> String {
    format!("{child_label}-{parent_label}")
}

/// Pure whole-map update; callers read-modify-write the complete map and
/// persist it in one write.
pub fn set_entry(mut map: Checklist, key: &str, value: bool) -> Checklist {
    map.insert(key.to_string(), value);
    map
}

/// Persisted checklist store. The map is serialized as one JSON object and
/// rewritten in full on every save; last writer wins across tabs.
#[derive(Clone)]
pub struct ChecklistRepository {
    backend: Arc<dyn StorageBackend>,
}

impl ChecklistRepository {
    pub fn new(backend: Arc<dyn StorageBackend>) -> Self {
        Self { backend }
    }

    /// Reads the whole persisted map. Absent or malformed data is an empty
    /// map, never an error.
    pub fn load(&self) -> Checklist {
        let Some(raw) = self.backend.get(CHECKLIST_STORAGE_KEY) else {
            return Checklist::new();
        };
        match serde_json::from_str(&raw) {
            Ok(map) => map,
            Err(err) => {
                warn!(error = %err, "persisted checklist is malformed, starting empty");
                Checklist::new()
            }
        }
    }

    /// Serializes and overwrites the persisted map in full. No merge
    /// semantics: callers must pass the complete map.
    pub fn save(&self, map: &Checklist) -> Result<(), StorageError> {
        let raw = serde_json::to_string(map).map_err(|source| StorageError::Serialize {
            key: CHECKLIST_STORAGE_KEY.to_string(),
            source,
        })?;
        self.backend.set(CHECKLIST_STORAGE_KEY, &raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::storage::MemoryStorage;

    fn repository() -> ChecklistRepository {
        ChecklistRepository::new(MemoryStorage::shared())
    }

    #[test]
    fn load_is_empty_when_absent() {
        assert!(repository().load().is_empty());
    }

    #[test]
    fn save_then_load_round_trips() {
        let repo = repository();
        let mut map = Checklist::new();
        map.insert("HTML".to_string(), true);
        map.insert(child_key("CSS", "Frontend"), false);

        repo.save(&map).unwrap();
        assert_eq!(repo.load(), map);
    }

    #[test]
    fn malformed_payload_loads_as_empty() {
        let backend = MemoryStorage::shared();
        backend.set(CHECKLIST_STORAGE_KEY, "{not json").unwrap();
        let repo = ChecklistRepository::new(backend);
        assert!(repo.load().is_empty());
    }

    #[test]
    fn set_entry_is_pure_whole_map_update() {
        let map = Checklist::new();
        let map = set_entry(map, "HTML", true);
        let map = set_entry(map, "HTML", false);
        assert_eq!(map.get("HTML"), Some(&false));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn save_overwrites_whole_map() {
        let repo = repository();
        repo.save(&set_entry(Checklist::new(), "HTML", true)).unwrap();
        repo.save(&set_entry(Checklist::new(), "CSS", true)).unwrap();

        let loaded = repo.load();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded.get("CSS"), Some(&true));
    }
}
