use dioxus::prelude::*;

use crate::domain::roadmap::{Level, RoadmapItem};
use crate::repository::Checklist;
use crate::services::progress_service::is_all_children_read;

/// One roadmap level: optional heading plus its row of items. Link-out
/// items navigate; regular items open the detail drawer. Items with
/// children carry a toggle that checks or unchecks all of them at once.
#[component]
pub fn LevelRow(
    level: Level,
    index: usize,
    levels_qty: usize,
    checklist: Signal<Checklist>,
    on_select: EventHandler<RoadmapItem>,
    on_toggle_all: EventHandler<RoadmapItem>,
) -> Element {
    rsx! {
        article { class: "level",
            if let Some(label) = level.label.as_ref() {
                h3 { class: "level-title", "{label}" }
            }
            if let Some(description) = level.description.as_ref() {
                p { class: "level-description", "{description}" }
            }
            div { class: "level-items",
                for item in level.items.iter() {
                    ItemCard {
                        key: "{item.label}",
                        item: item.clone(),
                        checklist,
                        on_select,
                        on_toggle_all,
                    }
                }
            }
            if index < levels_qty - 1 {
                div { class: "level-connector" }
            }
        }
    }
}

#[component]
fn ItemCard(
    item: RoadmapItem,
    checklist: Signal<Checklist>,
    on_select: EventHandler<RoadmapItem>,
    on_toggle_all: EventHandler<RoadmapItem>,
) -> Element {
    let all_read = is_all_children_read(&checklist.read(), &item.label, item.child_count());
    let card_class = if all_read { "item-card complete" } else { "item-card" };

    if item.is_link_out() {
        let link_item = item.clone();
        return rsx! {
            button {
                class: "{card_class} link-out",
                onclick: move |_| on_select.call(link_item.clone()),
                span { class: "item-icon", "⑂" }
                span { class: "item-label", "{item.label}" }
            }
        };
    }

    let open_item = item.clone();
    let toggle_item = item.clone();
    rsx! {
        button {
            class: "{card_class}",
            id: "{item.label}",
            onclick: move |_| on_select.call(open_item.clone()),
            if !item.child_items().is_empty() {
                span {
                    class: "item-check",
                    title: if all_read { "Mark as not done" } else { "Mark as done" },
                    // Bulk toggle must not also open the drawer.
                    onclick: move |evt| {
                        evt.stop_propagation();
                        on_toggle_all.call(toggle_item.clone());
                    },
                    if all_read { "✔" } else { "○" }
                }
            }
            span { class: "item-label", "{item.label}" }
        }
    }
}
