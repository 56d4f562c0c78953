use dioxus::prelude::*;
use dioxus_router::prelude::*;
use std::sync::Arc;
use tracing::warn;

use crate::repository::Repository;
use crate::services::{auth, ApiClient, AuthService};
use crate::ui::router::Route;

#[component]
pub fn App() -> Element {
    // Client-side persistence and the API client are shared as context
    // with every view below the router.
    use_context_provider(|| Arc::new(Repository::with_default_storage()));
    let mut session = use_context_provider(|| Signal::new(auth::current_session()));
    let api = use_context_provider(|| {
        ApiClient::from_env(session.peek().api_token.clone())
    });

    // Backend profile bootstrap for signed-in users. The future is dropped
    // with the component, so a stale response never lands in live state.
    let _profile_bootstrap = use_resource(move || {
        let auth_service = AuthService::new(api.clone());
        async move {
            if !session.peek().is_authenticated {
                return;
            }
            match auth_service.resolve_profile().await {
                Ok(profile) => {
                    let mut current = session.write();
                    current.user = profile;
                    current.is_loading = false;
                }
                Err(err) => {
                    warn!(error = %err, "profile bootstrap failed");
                    session.write().is_loading = false;
                }
            }
        }
    });

    rsx! {
        Router::<Route> {}
    }
}
