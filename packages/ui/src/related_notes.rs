//! Related-notes panel shown on account, contact, and opportunity details.

use dioxus::prelude::*;
use store::{NoteCreate, RecordAssociation, RecordType, Severity};
use uuid::Uuid;

use crate::actions::{create_note, delete_note, fetch_notes_for_record};
use crate::icons::{FaPenToSquare, FaPlus, FaTrashCan};
use crate::state::use_store;
use crate::widgets::{format_datetime, Spinner};
use crate::Icon;

#[component]
pub fn RelatedNotes(
    record_id: Uuid,
    record_type: RecordType,
    record_name: String,
    on_open_note: EventHandler<Uuid>,
    on_edit_note: EventHandler<Uuid>,
) -> Element {
    let mut store = use_store();
    let mut show_dialog = use_signal(|| false);
    let mut content = use_signal(String::new);
    let mut submitting = use_signal(|| false);

    let _loader = use_resource(move || async move {
        fetch_notes_for_record(store, record_type, record_id).await;
    });

    let handle_create = move |_| {
        let body = content().trim().to_string();
        if body.is_empty() {
            return;
        }
        let Some(user_id) = store.auth.peek().user.as_ref().map(|u| u.id) else {
            store
                .ui
                .write()
                .notify(Severity::Error, "Sign in to add notes");
            return;
        };
        submitting.set(true);
        spawn(async move {
            let payload = NoteCreate {
                content: body,
                created_by: user_id,
                records: vec![RecordAssociation {
                    record_id,
                    record_type,
                }],
            };
            if create_note(store, payload).await.is_some() {
                show_dialog.set(false);
                content.set(String::new());
                fetch_notes_for_record(store, record_type, record_id).await;
            }
            submitting.set(false);
        });
    };

    let notes = store.notes.read().related.clone();
    let loading = store.notes.read().related_loading;
    let type_label = record_type.label();

    rsx! {
        section {
            class: "related-notes card",
            div {
                class: "card-header",
                h3 { "Notes" }
                button {
                    class: "primary small",
                    onclick: move |_| {
                        content.set(String::new());
                        show_dialog.set(true);
                    },
                    Icon { icon: FaPlus, width: 12, height: 12 }
                    "Add Note"
                }
            }

            if loading {
                Spinner {}
            } else if notes.is_empty() {
                div {
                    class: "empty-state",
                    p { "No notes associated with this {type_label.to_lowercase()} yet." }
                }
            } else {
                ul {
                    class: "related-notes-list",
                    for note in notes {
                        li {
                            key: "{note.id}",
                            div {
                                class: "related-note-body",
                                a {
                                    class: "related-note-summary",
                                    onclick: {
                                        let id = note.id;
                                        move |_| on_open_note.call(id)
                                    },
                                    "{note.summary(100)}"
                                }
                                span {
                                    class: "related-note-date",
                                    "Added on {format_datetime(&note.created_at)}"
                                }
                            }
                            div {
                                class: "related-note-actions",
                                button {
                                    class: "icon-button",
                                    title: "Edit note",
                                    onclick: {
                                        let id = note.id;
                                        move |_| on_edit_note.call(id)
                                    },
                                    Icon { icon: FaPenToSquare, width: 14, height: 14 }
                                }
                                button {
                                    class: "icon-button",
                                    title: "Delete note",
                                    onclick: {
                                        let id = note.id;
                                        move |_| {
                                            spawn(async move {
                                                if delete_note(store, id).await {
                                                    fetch_notes_for_record(
                                                        store,
                                                        record_type,
                                                        record_id,
                                                    )
                                                    .await;
                                                }
                                            });
                                        }
                                    },
                                    Icon { icon: FaTrashCan, width: 14, height: 14 }
                                }
                            }
                        }
                    }
                }
            }

            if show_dialog() {
                div {
                    class: "modal-backdrop",
                    div {
                        class: "modal",
                        h3 { "Add Note to {record_name}" }
                        p {
                            class: "modal-subtitle",
                            "Adding note to {type_label}: {record_name}"
                        }
                        textarea {
                            rows: 6,
                            placeholder: "Note content",
                            value: content(),
                            oninput: move |evt| content.set(evt.value()),
                        }
                        div {
                            class: "form-actions",
                            button {
                                class: "primary",
                                disabled: submitting(),
                                onclick: handle_create,
                                if submitting() { "Saving..." } else { "Save" }
                            }
                            button {
                                class: "secondary",
                                onclick: move |_| show_dialog.set(false),
                                "Cancel"
                            }
                        }
                    }
                }
            }
        }
    }
}
