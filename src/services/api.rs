use super::error::ApiError;
use crate::domain::certification::CertificationResult;
use crate::domain::note::Note;
use crate::domain::user::Profile;
use reqwest::StatusCode;
use tracing::debug;
use uuid::Uuid;

/// Thin client over the backend REST API. One instance per session; the
/// bearer token comes from the identity provider's `api_token` cookie.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            token,
        }
    }

    /// Base URL is baked in at build time; the browser has no runtime
    /// environment to read it from.
    pub fn from_env(token: Option<String>) -> Self {
        let base_url = option_env!("TRAILMAP_API_URL").unwrap_or("https://api.trailmap.dev");
        Self::new(base_url, token)
    }

    fn authorize(&self, builder: reqwest::RequestBuilder) -> Result<reqwest::RequestBuilder, ApiError> {
        let token = self.token.as_deref().ok_or(ApiError::Unauthorized)?;
        Ok(builder.header("Authorization", token))
    }

    fn check(operation: &str, status: StatusCode) -> Result<(), ApiError> {
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(ApiError::Unauthorized);
        }
        if !status.is_success() {
            return Err(ApiError::Status {
                operation: operation.to_string(),
                status: status.as_u16(),
            });
        }
        Ok(())
    }

    pub async fn notes(&self, content_id: Uuid) -> Result<Vec<Note>, ApiError> {
        let url = format!("{}/notes/{content_id}", self.base_url);
        let response = self.authorize(self.http.get(&url))?.send().await?;
        Self::check("list notes", response.status())?;
        Ok(response.json().await?)
    }

    pub async fn create_note(&self, note: &Note) -> Result<(), ApiError> {
        let url = format!("{}/note", self.base_url);
        let response = self.authorize(self.http.post(&url))?.json(note).send().await?;
        Self::check("create note", response.status())
    }

    pub async fn delete_note(&self, id: &str) -> Result<(), ApiError> {
        let url = format!("{}/notes/{id}", self.base_url);
        let response = self.authorize(self.http.delete(&url))?.send().await?;
        Self::check("delete note", response.status())
    }

    pub async fn highest_score(&self, certification: &str) -> Result<CertificationResult, ApiError> {
        let url = format!("{}/certification/{certification}/highest-score", self.base_url);
        let response = self.authorize(self.http.get(&url))?.send().await?;
        Self::check("certification score", response.status())?;
        Ok(response.json().await?)
    }

    /// Fetches the stored profile, `None` when the user was never seen.
    pub async fn fetch_user(&self, nickname: &str) -> Result<Option<Profile>, ApiError> {
        let url = format!("{}/user/{nickname}", self.base_url);
        let response = self.authorize(self.http.get(&url))?.send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        Self::check("fetch user", response.status())?;
        Ok(Some(response.json().await?))
    }

    /// Creates the backend profile on first authenticated visit.
    pub async fn create_user(&self, nickname: &str) -> Result<(), ApiError> {
        debug!(nickname, "bootstrapping backend profile");
        let url = format!("{}/user/{nickname}", self.base_url);
        let response = self.authorize(self.http.post(&url))?.send().await?;
        Self::check("create user", response.status())
    }
}
