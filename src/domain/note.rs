use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A free-text note an authenticated user attached to a roadmap item.
/// Mirrors the REST payload of `GET /notes/{contentId}` / `POST /note`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub text: String,
    #[serde(default)]
    pub author: Option<String>,
    pub created_at: DateTime<Utc>,
    pub content_id: Uuid,
}

impl Note {
    pub fn new(label: &str, text: impl Into<String>, author: Option<String>) -> Self {
        Self {
            id: None,
            text: text.into(),
            author,
            created_at: Utc::now(),
            content_id: content_id_for(label),
        }
    }
}

/// Deterministic content id for a roadmap item label. Notes are keyed by
/// this id server-side, so the same label must always map to the same id.
pub fn content_id_for(label: &str) -> Uuid {
    Uuid::new_v5(&Uuid::NAMESPACE_URL, label.as_bytes())
}
