use dioxus::prelude::*;
use dioxus_router::prelude::*;
use std::sync::Arc;

use crate::repository::Repository;
use crate::ui::router::Route;

/// Roadmap catalog landing page.
#[component]
pub fn HomeView() -> Element {
    let repository = use_context::<Arc<Repository>>();
    let summaries = repository.roadmaps.list();

    rsx! {
        section { class: "home",
            h1 { class: "home-title", "Pick a path" }
            p { class: "home-subtitle",
                "Curated learning roadmaps. Your progress stays in this browser."
            }
            div { class: "roadmap-cards",
                for summary in summaries {
                    Link {
                        class: "roadmap-card",
                        to: Route::Roadmap { name: summary.name.to_string() },
                        h2 { "{summary.title}" }
                    }
                }
            }
        }
    }
}
