//! Note views: list, markdown detail with record links, create/edit form.

use dioxus::prelude::*;
use store::{NoteAssociation, NoteCreate, NoteUpdate, RecordAssociation, RecordType, Severity};
use ui::actions::{
    delete_note, fetch_accounts, fetch_contacts, fetch_note, fetch_notes, fetch_opportunities,
    remove_note_association,
};
use ui::{format_datetime, use_store, ErrorBanner, Markdown, Spinner, Store};
use uuid::Uuid;

use crate::Route;

#[component]
pub fn NoteList() -> Element {
    let mut store = use_store();
    let nav = use_navigator();

    use_effect(move || store.ui.write().set_view("notes"));

    let _loader = use_resource(move || async move {
        fetch_notes(store, 20, 0).await;
    });

    let notes = store.notes.read();
    let slice = &notes.collection;

    rsx! {
        div {
            class: "list-view",
            div {
                class: "list-header",
                h2 { "Notes" }
                button {
                    class: "primary",
                    onclick: move |_| {
                        nav.push(Route::NoteNew {});
                    },
                    "New Note"
                }
            }

            if let Some(error) = slice.error.clone() {
                ErrorBanner { message: error }
            }

            if slice.loading {
                Spinner {}
            } else {
                table {
                    class: "data-table",
                    thead {
                        tr {
                            th { "Note" }
                            th { "Linked Records" }
                            th { "Created" }
                        }
                    }
                    tbody {
                        if slice.items.is_empty() {
                            tr {
                                td {
                                    colspan: 3,
                                    class: "empty-state",
                                    "No notes found"
                                }
                            }
                        }
                        for note in slice.items.clone() {
                            tr {
                                key: "{note.id}",
                                class: "clickable",
                                onclick: {
                                    let id = note.id;
                                    move |_| {
                                        nav.push(Route::NoteDetail { id });
                                    }
                                },
                                td { "{note.summary(80)}" }
                                td { "{note.records.len()}" }
                                td { "{format_datetime(&note.created_at)}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Display name for a linked record, falling back to a shortened id when the
/// record is not in the loaded pages.
fn record_label(store: &Store, assoc: &RecordAssociation) -> String {
    let found = match assoc.record_type {
        RecordType::Account => store
            .accounts
            .read()
            .items
            .iter()
            .find(|a| a.id == assoc.record_id)
            .map(|a| a.name.clone()),
        RecordType::Contact => store
            .contacts
            .read()
            .items
            .iter()
            .find(|c| c.id == assoc.record_id)
            .map(|c| c.full_name()),
        RecordType::Opportunity => store
            .opportunities
            .read()
            .items
            .iter()
            .find(|o| o.id == assoc.record_id)
            .map(|o| o.opportunity_name.clone()),
    };
    found.unwrap_or_else(|| {
        let short = &assoc.record_id.to_string()[..8];
        format!("{} {short}", assoc.record_type.label())
    })
}

fn record_route(assoc: &RecordAssociation) -> Route {
    match assoc.record_type {
        RecordType::Account => Route::AccountDetail { id: assoc.record_id },
        RecordType::Contact => Route::ContactDetail { id: assoc.record_id },
        RecordType::Opportunity => Route::OpportunityDetail { id: assoc.record_id },
    }
}

#[component]
pub fn NoteDetail(id: Uuid) -> Element {
    let mut store = use_store();
    let nav = use_navigator();

    use_effect(move || store.ui.write().set_view("notes"));

    let _loader = use_resource(move || async move {
        fetch_note(store, id).await;
        // Record names for the linked-records panel.
        fetch_accounts(store, 100, 0).await;
        fetch_contacts(store, 100, 0).await;
        fetch_opportunities(store, 100, 0).await;
    });

    let notes = store.notes.read();
    let slice = &notes.collection;

    if slice.loading && slice.current.is_none() {
        return rsx! { Spinner {} };
    }
    if let Some(error) = slice.error.clone() {
        return rsx! { ErrorBanner { message: error } };
    }
    let Some(note) = slice.current.clone() else {
        return rsx! { p { class: "empty-state", "Note not found" } };
    };
    drop(notes);

    rsx! {
        div {
            class: "detail-view",
            div {
                class: "detail-header",
                h2 { "Note" }
                div {
                    class: "detail-actions",
                    button {
                        class: "primary",
                        onclick: move |_| {
                            nav.push(Route::NoteEdit { id });
                        },
                        "Edit"
                    }
                    button {
                        class: "danger",
                        onclick: move |_| {
                            spawn(async move {
                                if delete_note(store, id).await {
                                    nav.replace(Route::NoteList {});
                                }
                            });
                        },
                        "Delete"
                    }
                }
            }

            p {
                class: "muted",
                "Created {format_datetime(&note.created_at)}"
                if note.updated_at != note.created_at {
                    " · Updated {format_datetime(&note.updated_at)}"
                }
            }

            div {
                class: "card",
                Markdown { source: note.content.clone() }
            }

            section {
                class: "card related-panel",
                h3 { "Linked Records" }
                if note.records.is_empty() {
                    p {
                        class: "empty-state",
                        "This note is not linked to any records."
                    }
                } else {
                    ul {
                        for assoc in note.records.clone() {
                            li {
                                key: "{assoc.record_type}-{assoc.record_id}",
                                span {
                                    class: "record-type-badge",
                                    "{assoc.record_type.label()}"
                                }
                                a {
                                    onclick: {
                                        let route = record_route(&assoc);
                                        move |_| {
                                            nav.push(route.clone());
                                        }
                                    },
                                    {record_label(&store, &assoc)}
                                }
                                button {
                                    class: "icon-button",
                                    title: "Unlink",
                                    onclick: {
                                        let assoc = assoc.clone();
                                        move |_| {
                                            let Some(user_id) = store
                                                .auth
                                                .peek()
                                                .user
                                                .as_ref()
                                                .map(|u| u.id)
                                            else {
                                                return;
                                            };
                                            let payload = NoteAssociation {
                                                note_id: id,
                                                record_id: assoc.record_id,
                                                record_type: assoc.record_type,
                                                created_by: user_id,
                                            };
                                            spawn(async move {
                                                remove_note_association(store, payload).await;
                                                fetch_note(store, id).await;
                                            });
                                        }
                                    },
                                    "×"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn NoteNew() -> Element {
    rsx! {
        NoteForm { id: None::<Uuid> }
    }
}

#[component]
pub fn NoteEdit(id: Uuid) -> Element {
    rsx! {
        NoteForm { id: Some(id) }
    }
}

/// Create collects content plus an optional set of record links; edit only
/// touches the content, links are managed from the detail page.
#[component]
fn NoteForm(id: Option<Uuid>) -> Element {
    let mut store = use_store();
    let nav = use_navigator();
    let edit_mode = id.is_some();

    let mut content = use_signal(String::new);
    let mut links = use_signal(Vec::<RecordAssociation>::new);
    let mut link_type = use_signal(|| RecordType::Account);
    let mut link_record = use_signal(String::new);
    let mut prefilled = use_signal(|| false);

    use_effect(move || store.ui.write().set_view("notes"));

    let _loader = use_resource(move || async move {
        if let Some(id) = id {
            fetch_note(store, id).await;
        } else {
            fetch_accounts(store, 100, 0).await;
            fetch_contacts(store, 100, 0).await;
            fetch_opportunities(store, 100, 0).await;
        }
    });

    use_effect(move || {
        if !edit_mode || prefilled() {
            return;
        }
        if let Some(note) = store.notes.read().collection.current.clone() {
            if Some(note.id) == id {
                content.set(note.content);
                prefilled.set(true);
            }
        }
    });

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if content().trim().is_empty() {
            return;
        }
        let Some(user_id) = store.auth.peek().user.as_ref().map(|u| u.id) else {
            store.ui.write().notify(Severity::Error, "Not signed in");
            return;
        };
        spawn(async move {
            let saved = match id {
                Some(id) => {
                    let payload = NoteUpdate {
                        content: content(),
                        updated_by: user_id,
                    };
                    ui::actions::update_note(store, id, payload).await
                }
                None => {
                    let payload = NoteCreate {
                        content: content(),
                        created_by: user_id,
                        records: links(),
                    };
                    ui::actions::create_note(store, payload).await
                }
            };
            if let Some(note) = saved {
                nav.push(Route::NoteDetail { id: note.id });
            }
        });
    };

    let handle_cancel = move |_| {
        match id {
            Some(id) => nav.push(Route::NoteDetail { id }),
            None => nav.push(Route::NoteList {}),
        };
    };

    let add_link = move |_| {
        let Ok(record_id) = Uuid::parse_str(&link_record()) else {
            return;
        };
        let assoc = RecordAssociation {
            record_id,
            record_type: link_type(),
        };
        let mut current = links.write();
        if !current.contains(&assoc) {
            current.push(assoc);
        }
        drop(current);
        link_record.set(String::new());
    };

    let loading = store.notes.read().collection.loading;
    if edit_mode && loading && !prefilled() {
        return rsx! { Spinner {} };
    }

    // Options for the currently selected record type.
    let record_options: Vec<(Uuid, String)> = match link_type() {
        RecordType::Account => store
            .accounts
            .read()
            .items
            .iter()
            .map(|a| (a.id, a.name.clone()))
            .collect(),
        RecordType::Contact => store
            .contacts
            .read()
            .items
            .iter()
            .map(|c| (c.id, c.full_name()))
            .collect(),
        RecordType::Opportunity => store
            .opportunities
            .read()
            .items
            .iter()
            .map(|o| (o.id, o.opportunity_name.clone()))
            .collect(),
    };

    rsx! {
        div {
            class: "form-view",
            h2 {
                if edit_mode { "Edit Note" } else { "New Note" }
            }
            form {
                class: "card entity-form",
                onsubmit: handle_submit,
                div {
                    class: "form-field",
                    label { "Content *" }
                    textarea {
                        rows: 10,
                        required: true,
                        placeholder: "Markdown is supported",
                        value: content(),
                        oninput: move |evt| content.set(evt.value()),
                    }
                }

                if !edit_mode {
                    div {
                        class: "form-field",
                        label { "Link to Records" }
                        div {
                            class: "link-builder",
                            select {
                                value: link_type().to_string(),
                                onchange: move |evt| {
                                    if let Some(rt) = RecordType::parse(&evt.value()) {
                                        link_type.set(rt);
                                        link_record.set(String::new());
                                    }
                                },
                                for rt in RecordType::ALL {
                                    option {
                                        key: "{rt}",
                                        value: "{rt}",
                                        selected: rt == link_type(),
                                        "{rt.label()}"
                                    }
                                }
                            }
                            select {
                                value: link_record(),
                                onchange: move |evt| link_record.set(evt.value()),
                                option { value: "", "Select a record" }
                                for (record_id, label) in record_options {
                                    option {
                                        key: "{record_id}",
                                        value: "{record_id}",
                                        selected: record_id.to_string() == link_record(),
                                        "{label}"
                                    }
                                }
                            }
                            button {
                                class: "secondary small",
                                r#type: "button",
                                onclick: add_link,
                                "Add"
                            }
                        }
                        if !links.read().is_empty() {
                            ul {
                                class: "link-list",
                                for (index, assoc) in links.read().clone().into_iter().enumerate() {
                                    li {
                                        key: "{assoc.record_type}-{assoc.record_id}",
                                        span {
                                            class: "record-type-badge",
                                            "{assoc.record_type.label()}"
                                        }
                                        {record_label(&store, &assoc)}
                                        button {
                                            class: "icon-button",
                                            r#type: "button",
                                            onclick: move |_| {
                                                links.write().remove(index);
                                            },
                                            "×"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }

                div {
                    class: "form-actions",
                    button {
                        class: "primary",
                        r#type: "submit",
                        if edit_mode { "Save" } else { "Create" }
                    }
                    button {
                        class: "secondary",
                        r#type: "button",
                        onclick: handle_cancel,
                        "Cancel"
                    }
                }
            }
        }
    }
}
