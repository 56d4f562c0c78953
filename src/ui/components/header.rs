use dioxus::prelude::*;
use dioxus_router::prelude::*;

use crate::domain::user::Session;
use crate::services::auth;
use crate::ui::router::Route;

/// Top bar: brand, navigation, authentication state.
#[component]
pub fn Header() -> Element {
    let session = use_context::<Signal<Session>>();
    let current = session.read().clone();

    rsx! {
        header { class: "header",
            Link { class: "brand", to: Route::Home {}, "Trailmap" }
            div { class: "header-spacer" }
            nav { class: "header-nav",
                if current.is_authenticated {
                    if current.is_loading {
                        span { class: "header-loading", "…" }
                    } else {
                        if let Some(picture) = current.user.as_ref().and_then(|u| u.picture.clone()) {
                            img { class: "avatar", src: "{picture}", alt: "profile picture" }
                        }
                        if let Some(name) = current.display_name() {
                            span { class: "display-name", "{name}" }
                        }
                        button {
                            class: "btn-secondary",
                            onclick: move |_| auth::logout(),
                            "Log out"
                        }
                    }
                } else {
                    button {
                        class: "btn-primary",
                        onclick: move |_| auth::login_redirect(),
                        "Log in"
                    }
                }
            }
        }
    }
}
