use super::api::ApiClient;
use super::error::ApiError;
use crate::domain::note::{content_id_for, Note};

/// Note CRUD for a roadmap item, keyed by the item label's derived
/// content id.
#[derive(Clone)]
pub struct NoteService {
    api: ApiClient,
}

impl NoteService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn list_for(&self, label: &str) -> Result<Vec<Note>, ApiError> {
        self.api.notes(content_id_for(label)).await
    }

    pub async fn add(
        &self,
        label: &str,
        text: String,
        author: Option<String>,
    ) -> Result<(), ApiError> {
        let note = Note::new(label, text, author);
        self.api.create_note(&note).await
    }

    pub async fn remove(&self, id: &str) -> Result<(), ApiError> {
        self.api.delete_note(id).await
    }
}
