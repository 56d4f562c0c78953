use dioxus::prelude::*;
use dioxus_router::prelude::*;

use crate::domain::roadmap::RoadmapItem;
use crate::repository::checklist_repository::child_key;
use crate::repository::Checklist;
use crate::services::{ApiClient, CertificationService};
use crate::ui::components::NotePanel;
use crate::ui::router::Route;

/// Detail drawer for an open roadmap item: description, per-child read
/// checkboxes, certification gate and the notes panel. Mounted keyed by
/// item label so switching items refetches the gate.
#[component]
pub fn ItemDrawer(
    item: RoadmapItem,
    checklist: Signal<Checklist>,
    on_toggle_child: EventHandler<(String, bool)>,
    on_dismiss: EventHandler<()>,
) -> Element {
    rsx! {
        div {
            class: "drawer-overlay",
            onclick: move |_| on_dismiss.call(()),
        }
        aside {
            class: "drawer",
            tabindex: "0",
            onkeydown: move |evt| {
                if evt.key() == Key::Escape {
                    on_dismiss.call(());
                }
            },
            div { class: "drawer-title",
                h2 { "{item.label}" }
                if let Some(certification) = item.certification.clone() {
                    CertificationBadge { certification }
                }
                button {
                    class: "drawer-close",
                    onclick: move |_| on_dismiss.call(()),
                    "✕"
                }
            }
            if let Some(description) = item.description.as_ref() {
                p { class: "drawer-description", "{description}" }
            }
            div { class: "drawer-children",
                for child in item.child_items().iter() {
                    ChildRow {
                        key: "{child.label}",
                        child: child.clone(),
                        parent_label: item.label.clone(),
                        checklist,
                        on_toggle_child,
                    }
                }
            }
            NotePanel { item_label: item.label.clone() }
        }
    }
}

#[component]
fn ChildRow(
    child: RoadmapItem,
    parent_label: String,
    checklist: Signal<Checklist>,
    on_toggle_child: EventHandler<(String, bool)>,
) -> Element {
    let key = child_key(&child.label, &parent_label);
    let is_read = checklist.read().get(&key).copied().unwrap_or(false);
    let toggle_key = key.clone();

    rsx! {
        div { class: "child-row",
            label { class: "child-check",
                input {
                    r#type: "checkbox",
                    checked: is_read,
                    onchange: move |_| on_toggle_child.call((toggle_key.clone(), !is_read)),
                }
                span { class: "child-label", "{child.label}" }
            }
            if let Some(description) = child.description.as_ref() {
                p { class: "child-description", "{description}" }
            }
        }
    }
}

/// Certification affordance in the drawer title: passed badge, or a call
/// to action. A failed score fetch shows as not passed with an inline
/// notice instead of failing silently.
#[component]
fn CertificationBadge(certification: String) -> Element {
    let api = use_context::<ApiClient>();
    let cert_id = certification.clone();
    let gate = use_resource(move || {
        let service = CertificationService::new(api.clone());
        let cert_id = cert_id.clone();
        async move { service.check_passed(&cert_id).await }
    });

    let body = match &*gate.read_unchecked() {
        None => rsx! {
            span { class: "cert-badge pending", "…" }
        },
        Some(Ok(true)) => rsx! {
            span { class: "cert-badge passed", title: "Certification complete", "🎓" }
        },
        Some(Ok(false)) => rsx! {
            Link {
                class: "cert-badge cta",
                to: Route::Certification { id: certification.clone() },
                "Take the certification"
            }
        },
        Some(Err(err)) => rsx! {
            Link {
                class: "cert-badge cta",
                to: Route::Certification { id: certification.clone() },
                "Take the certification"
            }
            span { class: "cert-badge notice", "{err.user_message()}" }
        },
    };

    rsx! {
        div { class: "cert-gate", {body} }
    }
}
