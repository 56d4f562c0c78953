use dioxus::prelude::*;
use dioxus_router::prelude::*;

use crate::ui::components::Header;
use crate::ui::views::{CertificationView, GuideView, HomeView, RoadmapView};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[layout(Shell)]
    #[route("/")]
    Home {},

    #[route("/roadmap/:name")]
    Roadmap { name: String },

    #[route("/guide/:id")]
    Guide { id: String },

    #[route("/certification/:id")]
    Certification { id: String },
}

#[component]
fn Shell() -> Element {
    rsx! {
        Header {}
        main { class: "main-content",
            Outlet::<Route> {}
        }
    }
}

#[component]
fn Home() -> Element {
    rsx! { HomeView {} }
}

#[component]
fn Roadmap(name: String) -> Element {
    rsx! { RoadmapView { name } }
}

#[component]
fn Guide(id: String) -> Element {
    rsx! { GuideView { id } }
}

#[component]
fn Certification(id: String) -> Element {
    rsx! { CertificationView { id } }
}
