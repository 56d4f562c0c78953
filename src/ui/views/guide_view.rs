use dioxus::prelude::*;
use dioxus_router::prelude::*;

use crate::ui::router::Route;

/// Landing page for guide links; guide content lives outside this app.
#[component]
pub fn GuideView(id: String) -> Element {
    rsx! {
        section { class: "guide",
            h1 { "Guide: {id}" }
            p { "This guide is hosted separately." }
            Link { to: Route::Home {}, "Back to the roadmaps" }
        }
    }
}
