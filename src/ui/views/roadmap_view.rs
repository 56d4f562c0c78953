use dioxus::prelude::*;
use dioxus_router::prelude::*;
use std::sync::Arc;
use tracing::warn;

use crate::domain::roadmap::{Roadmap, RoadmapItem};
use crate::repository::{Checklist, Repository};
use crate::services::celebration::celebrate;
use crate::services::navigation::{NavEffect, NavEvent, NavigationSync};
use crate::services::progress_service::is_all_children_read;
use crate::services::ProgressService;
use crate::ui::components::{ItemDrawer, LevelRow};
use crate::ui::router::Route;

/// Roadmap page: levels of items, completion tracking, and a drawer bound
/// both ways to the URL hash.
#[component]
pub fn RoadmapView(name: String) -> Element {
    let repository = use_context::<Arc<Repository>>();
    let progress = use_hook({
        let repository = repository.clone();
        move || ProgressService::new(repository.checklist.clone())
    });

    let mut checklist = use_signal(Checklist::new);
    let mut nav = use_signal(NavigationSync::new);
    let mut roadmap: Signal<Option<Roadmap>> = use_signal(|| None);
    let mut loaded_name = use_signal(String::new);
    let mut pointer: Signal<Option<(f64, f64)>> = use_signal(|| None);

    // (Re)load when the route's roadmap name changes. The drawer state is
    // re-derived from the current hash so deep links land open.
    if *loaded_name.read() != name {
        loaded_name.set(name.clone());
        checklist.set(progress.load());
        match repository.roadmaps.get(&name) {
            Ok(loaded) => {
                let mut sync = NavigationSync::new();
                sync.apply(&loaded.levels, NavEvent::HashChanged(current_hash()));
                roadmap.set(Some(loaded));
                nav.set(sync);
            }
            Err(err) => {
                warn!(roadmap = %name, error = %err, "roadmap failed to load");
                roadmap.set(None);
                nav.set(NavigationSync::new());
            }
        }
    }

    // URL -> panel direction: back/forward buttons and manual hash edits.
    use_hook(move || install_hash_listener(roadmap, nav));

    let navigator = use_navigator();
    let dismiss_navigator = navigator.clone();
    // Shared handlers: `EventHandler` is `Copy`, so the same handler can be
    // handed to every level row.
    let select = EventHandler::new(move |item: RoadmapItem| {
        dispatch(
            nav,
            roadmap,
            loaded_name,
            navigator.clone(),
            NavEvent::ItemSelected(item),
        );
    });
    let dismiss = move |_| {
        dispatch(
            nav,
            roadmap,
            loaded_name,
            dismiss_navigator.clone(),
            NavEvent::PanelDismissed,
        );
    };

    let toggle_all_progress = progress.clone();
    let toggle_all = EventHandler::new(move |item: RoadmapItem| {
        let map = checklist.peek().clone();
        let target = !is_all_children_read(&map, &item.label, item.child_count());
        match toggle_all_progress.check_all_children(map, &item, target) {
            Ok(updated) => {
                checklist.set(updated);
                if target {
                    celebrate(*pointer.peek());
                }
            }
            Err(err) => warn!(error = %err, "saving bulk progress failed"),
        }
    });

    let toggle_child_progress = progress.clone();
    let toggle_child = move |(key, checked): (String, bool)| {
        let map = checklist.peek().clone();
        match toggle_child_progress.set_read(map, &key, checked) {
            Ok(updated) => {
                checklist.set(updated);
                if checked {
                    celebrate(*pointer.peek());
                }
            }
            Err(err) => warn!(error = %err, "saving progress failed"),
        }
    };

    let Some(current) = roadmap.read().clone() else {
        return rsx! {
            section { class: "roadmap missing",
                h2 { "Roadmap not found" }
                Link { to: Route::Home {}, "Back to the roadmaps" }
            }
        };
    };
    let active = nav.read().active_item().cloned();
    let levels_qty = current.levels.len();

    rsx! {
        section {
            class: "roadmap",
            onmousemove: move |evt| {
                let coords = evt.client_coordinates();
                pointer.set(Some((coords.x, coords.y)));
            },
            h2 { class: "roadmap-title", "{current.title}" }
            div { class: "levels",
                for (index, level) in current.levels.iter().enumerate() {
                    LevelRow {
                        key: "{index}",
                        level: level.clone(),
                        index,
                        levels_qty,
                        checklist,
                        on_select: select,
                        on_toggle_all: toggle_all,
                    }
                }
            }
            if let Some(item) = active {
                ItemDrawer {
                    key: "{item.label}",
                    item,
                    checklist,
                    on_toggle_child: toggle_child,
                    on_dismiss: dismiss,
                }
            }
        }
    }
}

/// Applies one navigation event and performs the resulting history or
/// router effect.
fn dispatch(
    mut nav: Signal<NavigationSync>,
    roadmap: Signal<Option<Roadmap>>,
    loaded_name: Signal<String>,
    navigator: Navigator,
    event: NavEvent,
) {
    let levels = roadmap
        .peek()
        .as_ref()
        .map(|r| r.levels.clone())
        .unwrap_or_default();
    match nav.write().apply(&levels, event) {
        Some(NavEffect::NavigateTo(url)) => {
            let _ = navigator.push(url);
        }
        Some(effect) => push_history(&effect, &loaded_name.peek()),
        None => {}
    }
}

fn current_hash() -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        crate::services::navigation::browser::current_hash()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

#[allow(unused_variables)]
fn push_history(effect: &NavEffect, roadmap_name: &str) {
    #[cfg(target_arch = "wasm32")]
    crate::services::navigation::browser::push_history(effect, roadmap_name);
}

#[cfg(target_arch = "wasm32")]
fn install_hash_listener(roadmap: Signal<Option<Roadmap>>, mut nav: Signal<NavigationSync>) {
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;

    let callback = Closure::<dyn FnMut()>::new(move || {
        let levels = roadmap
            .peek()
            .as_ref()
            .map(|r| r.levels.clone())
            .unwrap_or_default();
        nav.write()
            .apply(&levels, NavEvent::HashChanged(current_hash()));
    });
    if let Some(window) = web_sys::window() {
        let _ = window
            .add_event_listener_with_callback("hashchange", callback.as_ref().unchecked_ref());
    }
    // Listener lives for the rest of the page; it keeps reading the
    // current signals, so roadmap switches stay correct.
    callback.forget();
}

#[cfg(not(target_arch = "wasm32"))]
fn install_hash_listener(_roadmap: Signal<Option<Roadmap>>, _nav: Signal<NavigationSync>) {}
