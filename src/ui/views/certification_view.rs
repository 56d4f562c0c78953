use dioxus::prelude::*;
use dioxus_router::prelude::*;

use crate::ui::router::Route;

/// Landing page for taking a certification; the exam itself is served by
/// the backend, outside this app.
#[component]
pub fn CertificationView(id: String) -> Element {
    rsx! {
        section { class: "certification",
            h1 { "Certification: {id}" }
            p { "The exam runs on the certification platform." }
            Link { to: Route::Home {}, "Back to the roadmaps" }
        }
    }
}
