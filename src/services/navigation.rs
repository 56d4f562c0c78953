use crate::domain::roadmap::{find_item, Level, RoadmapItem};
use tracing::debug;

/// Whether a detail drawer is showing, and for which item.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PanelState {
    #[default]
    Closed,
    Open(RoadmapItem),
}

/// External triggers feeding the reducer. Hash labels arrive already
/// URI-decoded with the `#` stripped; encoding stays in the browser glue.
#[derive(Debug, Clone, PartialEq)]
pub enum NavEvent {
    /// The URL hash changed (on mount or via the back/forward buttons).
    HashChanged(Option<String>),
    /// The user clicked an item on the roadmap.
    ItemSelected(RoadmapItem),
    /// The drawer was dismissed (escape, overlay click, close button).
    PanelDismissed,
}

/// History/router side effects the caller must apply after a transition.
#[derive(Debug, Clone, PartialEq)]
pub enum NavEffect {
    /// Push a history entry with `#` + URI-encoded label; no page load.
    PushHash(String),
    /// Push a history entry at the roadmap's canonical root path.
    PushRootPath,
    /// In-app route change to a link-out item's url.
    NavigateTo(String),
}

/// Bidirectional binding between the open drawer and the URL.
///
/// Both directions (user action -> URL, URL -> panel) funnel through one
/// reducer so that hash-driven and user-driven opens converge on the same
/// `Open` shape. The panel state is derived from navigation, never stored
/// redundantly.
#[derive(Debug, Clone, Default)]
pub struct NavigationSync {
    panel: PanelState,
}

impl NavigationSync {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn panel(&self) -> &PanelState {
        &self.panel
    }

    pub fn active_item(&self) -> Option<&RoadmapItem> {
        match &self.panel {
            PanelState::Open(item) => Some(item),
            PanelState::Closed => None,
        }
    }

    /// Applies one event and returns the side effect to perform, if any.
    pub fn apply(&mut self, levels: &[Level], event: NavEvent) -> Option<NavEffect> {
        match event {
            NavEvent::HashChanged(Some(label)) => {
                // First match wins, level order then item order. An
                // unknown label is a no-op and the panel stays closed.
                match find_item(levels, &label) {
                    Some(item) => {
                        self.panel = PanelState::Open(item.clone());
                        debug!(%label, "drawer opened from hash");
                    }
                    None => debug!(%label, "hash does not match any item"),
                }
                None
            }
            NavEvent::HashChanged(None) => {
                self.panel = PanelState::Closed;
                None
            }
            NavEvent::ItemSelected(item) => {
                if let Some(url) = item.url.as_deref().filter(|u| !u.is_empty()) {
                    // Link-out node: navigate away, panel untouched.
                    return Some(NavEffect::NavigateTo(url.to_string()));
                }
                let label = item.label.clone();
                self.panel = PanelState::Open(item);
                Some(NavEffect::PushHash(label))
            }
            NavEvent::PanelDismissed => {
                self.panel = PanelState::Closed;
                Some(NavEffect::PushRootPath)
            }
        }
    }
}

/// Browser bindings for the reducer's inputs and effects.
#[cfg(target_arch = "wasm32")]
pub mod browser {
    use super::NavEffect;
    use wasm_bindgen::JsValue;

    /// Current hash, URI-decoded, `#` characters stripped. `None` when the
    /// hash is empty.
    pub fn current_hash() -> Option<String> {
        let hash = web_sys::window()?.location().hash().ok()?;
        let label = hash.replace('#', "");
        if label.is_empty() {
            return None;
        }
        js_sys::decode_uri(&label)
            .ok()
            .map(|decoded| String::from(decoded))
    }

    /// Applies a history effect. `NavigateTo` is routed by the caller
    /// through the router instead.
    pub fn push_history(effect: &NavEffect, roadmap_name: &str) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let Ok(history) = window.history() else {
            return;
        };
        let url = match effect {
            NavEffect::PushHash(label) => {
                let encoded = js_sys::encode_uri(label);
                format!("#{}", String::from(encoded))
            }
            NavEffect::PushRootPath => format!("/roadmap/{roadmap_name}"),
            NavEffect::NavigateTo(_) => return,
        };
        // Non-navigating push: updates the visible URL for deep links
        // without reloading.
        let _ = history.push_state_with_url(&JsValue::NULL, "", Some(&url));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(label: &str) -> RoadmapItem {
        RoadmapItem::new(label)
    }

    fn levels() -> Vec<Level> {
        let mut backend = item("Backend Path");
        backend.url = Some("/roadmap/backend".to_string());
        vec![
            Level {
                label: Some("Basics".to_string()),
                description: None,
                items: vec![item("HTML"), item("CSS")],
            },
            Level {
                label: None,
                description: None,
                items: vec![backend],
            },
        ]
    }

    #[test]
    fn click_opens_panel_and_pushes_hash() {
        let levels = levels();
        let mut nav = NavigationSync::new();

        let effect = nav.apply(&levels, NavEvent::ItemSelected(item("HTML")));
        assert_eq!(effect, Some(NavEffect::PushHash("HTML".to_string())));
        assert_eq!(nav.active_item().map(|i| i.label.as_str()), Some("HTML"));
    }

    #[test]
    fn hash_open_is_idempotent() {
        let levels = levels();
        let mut nav = NavigationSync::new();

        let first = nav.apply(&levels, NavEvent::HashChanged(Some("CSS".to_string())));
        let state_after_first = nav.panel().clone();
        let second = nav.apply(&levels, NavEvent::HashChanged(Some("CSS".to_string())));

        assert_eq!(first, None);
        assert_eq!(second, None);
        assert_eq!(nav.panel(), &state_after_first);
        assert_eq!(nav.active_item().map(|i| i.label.as_str()), Some("CSS"));
    }

    #[test]
    fn hash_and_click_converge_on_the_same_open_state() {
        let levels = levels();

        let mut via_hash = NavigationSync::new();
        via_hash.apply(&levels, NavEvent::HashChanged(Some("HTML".to_string())));

        let mut via_click = NavigationSync::new();
        via_click.apply(&levels, NavEvent::ItemSelected(levels[0].items[0].clone()));

        assert_eq!(via_hash.panel(), via_click.panel());
    }

    #[test]
    fn unknown_hash_is_a_no_op() {
        let levels = levels();
        let mut nav = NavigationSync::new();

        let effect = nav.apply(&levels, NavEvent::HashChanged(Some("Rust".to_string())));
        assert_eq!(effect, None);
        assert_eq!(nav.panel(), &PanelState::Closed);
    }

    #[test]
    fn link_out_items_navigate_without_opening() {
        let levels = levels();
        let mut nav = NavigationSync::new();

        let effect = nav.apply(&levels, NavEvent::ItemSelected(levels[1].items[0].clone()));
        assert_eq!(
            effect,
            Some(NavEffect::NavigateTo("/roadmap/backend".to_string()))
        );
        assert_eq!(nav.panel(), &PanelState::Closed);
    }

    #[test]
    fn dismiss_closes_and_pushes_root_path() {
        let levels = levels();
        let mut nav = NavigationSync::new();
        nav.apply(&levels, NavEvent::ItemSelected(item("HTML")));

        let effect = nav.apply(&levels, NavEvent::PanelDismissed);
        assert_eq!(effect, Some(NavEffect::PushRootPath));
        assert_eq!(nav.panel(), &PanelState::Closed);
    }

    #[test]
    fn empty_hash_closes_the_panel() {
        let levels = levels();
        let mut nav = NavigationSync::new();
        nav.apply(&levels, NavEvent::HashChanged(Some("HTML".to_string())));

        nav.apply(&levels, NavEvent::HashChanged(None));
        assert_eq!(nav.panel(), &PanelState::Closed);
    }
}
