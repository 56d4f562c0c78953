use super::api::ApiClient;
use super::error::ApiError;
use crate::domain::user::{Profile, Session};
use tracing::info;

/// Cookies written by the identity provider after its redirect flow. The
/// app never runs that flow itself; it only reads the results.
pub const TOKEN_COOKIE: &str = "api_token";
pub const NICKNAME_COOKIE: &str = "nickname";

/// Session as determined by the provider cookies at page load.
pub fn current_session() -> Session {
    match read_cookie(TOKEN_COOKIE) {
        Some(token) => Session::authenticated(token),
        None => Session::anonymous(),
    }
}

pub fn provider_nickname() -> Option<String> {
    read_cookie(NICKNAME_COOKIE)
}

#[cfg(target_arch = "wasm32")]
fn read_cookie(name: &str) -> Option<String> {
    use wasm_bindgen::JsCast;
    let document = web_sys::window()?.document()?;
    let html_document = document.dyn_into::<web_sys::HtmlDocument>().ok()?;
    let cookies = html_document.cookie().ok()?;
    crate::domain::user::cookie_value(&cookies, name)
}

#[cfg(not(target_arch = "wasm32"))]
fn read_cookie(name: &str) -> Option<String> {
    // Native builds (tests, tooling) take the session from the env.
    std::env::var(format!("TRAILMAP_{}", name.to_uppercase())).ok()
}

/// Sends the browser to the identity provider. Placeholder for the
/// provider's own redirect flow; out of the core.
#[cfg(target_arch = "wasm32")]
pub fn login_redirect() {
    // Baked in at build time; the browser has no runtime environment.
    let url = option_env!("TRAILMAP_LOGIN_URL").unwrap_or("/authorize");
    if let Some(window) = web_sys::window() {
        let _ = window.location().assign(url);
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn login_redirect() {}

/// Drops the provider cookies and reloads.
#[cfg(target_arch = "wasm32")]
pub fn logout() {
    use wasm_bindgen::JsCast;
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if let Ok(html_document) = document.dyn_into::<web_sys::HtmlDocument>() {
        for name in [TOKEN_COOKIE, NICKNAME_COOKIE] {
            let _ = html_document.set_cookie(&format!("{name}=; Max-Age=0; path=/"));
        }
    }
    if let Some(window) = web_sys::window() {
        let _ = window.location().reload();
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn logout() {}

/// First-visit bootstrap against the backend's user store.
#[derive(Clone)]
pub struct AuthService {
    api: ApiClient,
}

impl AuthService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Resolves the backend profile for the signed-in user, creating it on
    /// first visit. `None` when the provider supplied no nickname.
    pub async fn resolve_profile(&self) -> Result<Option<Profile>, ApiError> {
        let Some(nickname) = provider_nickname() else {
            return Ok(None);
        };
        if let Some(profile) = self.api.fetch_user(&nickname).await? {
            return Ok(Some(profile));
        }
        info!(nickname, "first visit, creating backend profile");
        self.api.create_user(&nickname).await?;
        Ok(Some(Profile {
            nickname: Some(nickname),
            ..Default::default()
        }))
    }
}
