pub mod checklist_repository;
pub mod roadmap_repository;
pub mod storage;

use std::sync::Arc;

pub use checklist_repository::{Checklist, ChecklistRepository};
pub use roadmap_repository::RoadmapRepository;
pub use storage::StorageBackend;

/// Client-side persistence bundle handed to the UI as context.
#[derive(Clone)]
pub struct Repository {
    pub checklist: ChecklistRepository,
    pub roadmaps: RoadmapRepository,
}

impl Repository {
    pub fn new(backend: Arc<dyn StorageBackend>) -> Self {
        Self {
            checklist: ChecklistRepository::new(backend),
            roadmaps: RoadmapRepository::new(),
        }
    }

    /// Platform-default storage: browser `localStorage` on wasm, memory
    /// elsewhere.
    pub fn with_default_storage() -> Self {
        Self::new(storage::default_backend())
    }

    /// In-memory persistence for tests.
    pub fn new_memory() -> Self {
        Self::new(storage::MemoryStorage::shared())
    }
}
