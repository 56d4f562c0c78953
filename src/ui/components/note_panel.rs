use dioxus::prelude::*;
use tracing::warn;

use crate::domain::note::Note;
use crate::domain::user::Session;
use crate::services::{ApiClient, NoteService};

/// Personal notes attached to a roadmap item. Only rendered for signed-in
/// users; every remote failure surfaces as an inline notice.
#[component]
pub fn NotePanel(item_label: String) -> Element {
    let session = use_context::<Signal<Session>>();
    let api = use_context::<ApiClient>();
    let service = use_hook({
        let api = api.clone();
        move || NoteService::new(api)
    });

    let list_service = service.clone();
    let list_label = item_label.clone();
    let mut notes = use_resource(move || {
        let service = list_service.clone();
        let label = list_label.clone();
        async move { service.list_for(&label).await }
    });

    let mut draft = use_signal(String::new);
    let mut saving = use_signal(|| false);
    let mut deleting = use_signal(|| false);
    let mut notice: Signal<Option<&'static str>> = use_signal(|| None);

    let save_service = service.clone();
    let save_label = item_label.clone();
    let save = move |_| {
        let text = draft.peek().trim().to_string();
        if text.is_empty() || *saving.peek() {
            return;
        }
        let service = save_service.clone();
        let label = save_label.clone();
        let author = session.peek().user.as_ref().and_then(|u| u.nickname.clone());
        saving.set(true);
        spawn(async move {
            match service.add(&label, text, author).await {
                Ok(()) => {
                    draft.set(String::new());
                    notice.set(None);
                    notes.restart();
                }
                Err(err) => {
                    warn!(error = %err, "saving note failed");
                    notice.set(Some(err.user_message()));
                }
            }
            saving.set(false);
        });
    };

    let delete_service = service.clone();
    let delete = move |id: String| {
        if *deleting.peek() || !confirm_delete() {
            return;
        }
        let service = delete_service.clone();
        deleting.set(true);
        spawn(async move {
            match service.remove(&id).await {
                Ok(()) => {
                    notice.set(None);
                    notes.restart();
                }
                Err(err) => {
                    warn!(error = %err, "deleting note failed");
                    notice.set(Some(err.user_message()));
                }
            }
            deleting.set(false);
        });
    };

    if !session.read().is_authenticated {
        return rsx! {
            div { class: "note-panel anonymous",
                p { "Sign in to keep notes on this topic." }
            }
        };
    }

    rsx! {
        div { class: "note-panel",
            h3 { class: "note-title", "My notes" }
            match &*notes.read_unchecked() {
                None => rsx! { p { class: "note-loading", "Loading notes…" } },
                Some(Err(err)) => rsx! {
                    p { class: "note-notice", "{err.user_message()}" }
                },
                Some(Ok(existing)) => rsx! {
                    for note in existing.iter() {
                        div { class: "note", key: "{note_key(note)}",
                            p { class: "note-text", "{note.text}" }
                            div { class: "note-meta",
                                // A note the backend returned without an id
                                // cannot be addressed for deletion.
                                if let Some(id) = deletable_id(note).map(str::to_string) {
                                    button {
                                        class: "note-delete",
                                        disabled: *deleting.read(),
                                        onclick: {
                                            let mut delete = delete.clone();
                                            move |_| delete(id.clone())
                                        },
                                        "🗑"
                                    }
                                }
                                span { class: "note-date",
                                    {note.created_at.format("%Y-%m-%d %H:%M").to_string()}
                                }
                            }
                        }
                    }
                },
            }
            if let Some(message) = *notice.read() {
                p { class: "note-notice", "{message}" }
            }
            textarea {
                class: "note-draft",
                placeholder: "Write down what you want to remember.",
                value: "{draft}",
                oninput: move |evt| draft.set(evt.value()),
            }
            button {
                class: "btn-primary note-save",
                disabled: *saving.read(),
                onclick: save,
                if *saving.read() { "Saving…" } else { "Save note" }
            }
        }
    }
}

/// Id a delete request can target. Absent or blank ids get no delete
/// affordance.
fn deletable_id(note: &Note) -> Option<&str> {
    note.id.as_deref().filter(|id| !id.is_empty())
}

/// Stable list key; notes without a server id fall back to their creation
/// timestamp.
fn note_key(note: &Note) -> String {
    match deletable_id(note) {
        Some(id) => id.to_string(),
        None => note.created_at.timestamp_millis().to_string(),
    }
}

fn confirm_delete() -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message("Delete this note?").ok())
            .unwrap_or(false)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(id: Option<&str>) -> Note {
        Note {
            id: id.map(str::to_string),
            ..Note::new("HTML", "remember the semantics", None)
        }
    }

    #[test]
    fn only_notes_with_an_id_are_deletable() {
        assert_eq!(deletable_id(&note(Some("abc"))), Some("abc"));
        assert_eq!(deletable_id(&note(None)), None);
        assert_eq!(deletable_id(&note(Some(""))), None);
    }

    #[test]
    fn note_key_never_collapses_to_empty() {
        assert_eq!(note_key(&note(Some("abc"))), "abc");
        assert!(!note_key(&note(None)).is_empty());
        assert!(!note_key(&note(Some(""))).is_empty());
    }
}
