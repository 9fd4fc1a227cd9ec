//! Contact views: list, detail, create/edit form with account picker.

use dioxus::prelude::*;
use store::{ContactCreate, ContactUpdate, RecordType, Severity};
use ui::actions::{delete_contact, fetch_account, fetch_accounts, fetch_contact, fetch_contacts};
use ui::{format_date, or_na, use_store, ErrorBanner, RelatedNotes, Spinner};
use uuid::Uuid;

use crate::Route;

#[component]
pub fn ContactList() -> Element {
    let mut store = use_store();
    let nav = use_navigator();

    use_effect(move || store.ui.write().set_view("contacts"));

    let _loader = use_resource(move || async move {
        fetch_contacts(store, 20, 0).await;
    });

    let slice = store.contacts.read();

    rsx! {
        div {
            class: "list-view",
            div {
                class: "list-header",
                h2 { "Contacts" }
                button {
                    class: "primary",
                    onclick: move |_| {
                        nav.push(Route::ContactNew {});
                    },
                    "New Contact"
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
                            th { "Name" }
                            th { "Title" }
                            th { "Email" }
                            th { "Phone" }
                        }
                    }
                    tbody {
                        if slice.items.is_empty() {
                            tr {
                                td {
                                    colspan: 4,
                                    class: "empty-state",
                                    "No contacts found"
                                }
                            }
                        }
                        for contact in slice.items.clone() {
                            tr {
                                key: "{contact.id}",
                                class: "clickable",
                                onclick: {
                                    let id = contact.id;
                                    move |_| {
                                        nav.push(Route::ContactDetail { id });
                                    }
                                },
                                td { "{contact.full_name()}" }
                                td { "{or_na(&contact.title)}" }
                                td { "{or_na(&contact.email)}" }
                                td { "{or_na(&contact.phone)}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn ContactDetail(id: Uuid) -> Element {
    let mut store = use_store();
    let nav = use_navigator();
    let mut account_name = use_signal(|| None::<(Uuid, String)>);

    use_effect(move || store.ui.write().set_view("contacts"));

    let _loader = use_resource(move || async move {
        fetch_contact(store, id).await;
        let account_id = store
            .contacts
            .peek()
            .current
            .as_ref()
            .and_then(|c| c.account_id);
        if let Some(account_id) = account_id {
            fetch_account(store, account_id).await;
            if let Some(account) = store.accounts.peek().current.clone() {
                account_name.set(Some((account.id, account.name)));
            }
        }
    });

    let slice = store.contacts.read();

    if slice.loading && slice.current.is_none() {
        return rsx! { Spinner {} };
    }
    if let Some(error) = slice.error.clone() {
        return rsx! { ErrorBanner { message: error } };
    }
    let Some(contact) = slice.current.clone() else {
        return rsx! { p { class: "empty-state", "Contact not found" } };
    };
    drop(slice);

    let full_name = contact.full_name();

    rsx! {
        div {
            class: "detail-view",
            div {
                class: "detail-header",
                h2 { "{full_name}" }
                div {
                    class: "detail-actions",
                    button {
                        class: "primary",
                        onclick: move |_| {
                            nav.push(Route::ContactEdit { id });
                        },
                        "Edit"
                    }
                    button {
                        class: "danger",
                        onclick: move |_| {
                            spawn(async move {
                                if delete_contact(store, id).await {
                                    nav.replace(Route::ContactList {});
                                }
                            });
                        },
                        "Delete"
                    }
                }
            }

            div {
                class: "card field-grid",
                Field { label: "Title", value: or_na(&contact.title).to_string() }
                Field { label: "Email", value: or_na(&contact.email).to_string() }
                Field { label: "Phone", value: or_na(&contact.phone).to_string() }
                Field { label: "Address", value: or_na(&contact.address).to_string() }
                Field { label: "City", value: or_na(&contact.city).to_string() }
                Field { label: "State", value: or_na(&contact.state).to_string() }
                Field { label: "Zip", value: or_na(&contact.zip).to_string() }
                Field { label: "Country", value: or_na(&contact.country).to_string() }
                Field { label: "Created", value: format_date(&contact.created_at) }
                div {
                    class: "field",
                    span { class: "field-label", "Account" }
                    if let Some((account_id, name)) = account_name.read().clone() {
                        a {
                            class: "field-value",
                            onclick: move |_| {
                                nav.push(Route::AccountDetail { id: account_id });
                            },
                            "{name}"
                        }
                    } else {
                        span { class: "field-value", "N/A" }
                    }
                }
            }

            RelatedNotes {
                record_id: id,
                record_type: RecordType::Contact,
                record_name: full_name.clone(),
                on_open_note: move |note_id| {
                    nav.push(Route::NoteDetail { id: note_id });
                },
                on_edit_note: move |note_id| {
                    nav.push(Route::NoteEdit { id: note_id });
                },
            }
        }
    }
}

#[component]
fn Field(label: &'static str, value: String) -> Element {
    rsx! {
        div {
            class: "field",
            span { class: "field-label", "{label}" }
            span { class: "field-value", "{value}" }
        }
    }
}

#[component]
pub fn ContactNew() -> Element {
    rsx! {
        ContactForm { id: None::<Uuid> }
    }
}

#[component]
pub fn ContactEdit(id: Uuid) -> Element {
    rsx! {
        ContactForm { id: Some(id) }
    }
}

#[component]
fn ContactForm(id: Option<Uuid>) -> Element {
    let mut store = use_store();
    let nav = use_navigator();
    let edit_mode = id.is_some();

    let mut first_name = use_signal(String::new);
    let mut last_name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut title = use_signal(String::new);
    let mut account_id = use_signal(String::new);
    let mut address = use_signal(String::new);
    let mut city = use_signal(String::new);
    let mut state = use_signal(String::new);
    let mut zip = use_signal(String::new);
    let mut country = use_signal(String::new);
    let mut prefilled = use_signal(|| false);

    use_effect(move || store.ui.write().set_view("contacts"));

    let _loader = use_resource(move || async move {
        fetch_accounts(store, 100, 0).await;
        if let Some(id) = id {
            fetch_contact(store, id).await;
        }
    });

    use_effect(move || {
        if !edit_mode || prefilled() {
            return;
        }
        if let Some(contact) = store.contacts.read().current.clone() {
            if Some(contact.id) == id {
                first_name.set(contact.first_name);
                last_name.set(contact.last_name);
                email.set(contact.email);
                phone.set(contact.phone);
                title.set(contact.title);
                account_id.set(
                    contact
                        .account_id
                        .map(|a| a.to_string())
                        .unwrap_or_default(),
                );
                address.set(contact.address);
                city.set(contact.city);
                state.set(contact.state);
                zip.set(contact.zip);
                country.set(contact.country);
                prefilled.set(true);
            }
        }
    });

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if first_name().trim().is_empty() || last_name().trim().is_empty() {
            return;
        }
        let Some(user_id) = store.auth.peek().user.as_ref().map(|u| u.id) else {
            store.ui.write().notify(Severity::Error, "Not signed in");
            return;
        };
        let linked_account = Uuid::parse_str(&account_id()).ok();
        spawn(async move {
            let saved = match id {
                Some(id) => {
                    let payload = ContactUpdate {
                        first_name: first_name(),
                        last_name: last_name(),
                        email: email(),
                        phone: phone(),
                        title: title(),
                        account_id: linked_account,
                        address: address(),
                        city: city(),
                        state: state(),
                        zip: zip(),
                        country: country(),
                        updated_by: user_id,
                    };
                    ui::actions::update_contact(store, id, payload).await
                }
                None => {
                    let payload = ContactCreate {
                        first_name: first_name(),
                        last_name: last_name(),
                        email: email(),
                        phone: phone(),
                        title: title(),
                        account_id: linked_account,
                        address: address(),
                        city: city(),
                        state: state(),
                        zip: zip(),
                        country: country(),
                        created_by: user_id,
                    };
                    ui::actions::create_contact(store, payload).await
                }
            };
            if let Some(contact) = saved {
                nav.push(Route::ContactDetail { id: contact.id });
            }
        });
    };

    let handle_cancel = move |_| {
        match id {
            Some(id) => nav.push(Route::ContactDetail { id }),
            None => nav.push(Route::ContactList {}),
        };
    };

    let loading = store.contacts.read().loading;
    if edit_mode && loading && !prefilled() {
        return rsx! { Spinner {} };
    }

    let accounts = store.accounts.read().items.clone();

    rsx! {
        div {
            class: "form-view",
            h2 {
                if edit_mode { "Edit Contact" } else { "New Contact" }
            }
            form {
                class: "card entity-form",
                onsubmit: handle_submit,
                div {
                    class: "form-row",
                    div {
                        class: "form-field",
                        label { "First Name *" }
                        input {
                            required: true,
                            value: first_name(),
                            oninput: move |evt| first_name.set(evt.value()),
                        }
                    }
                    div {
                        class: "form-field",
                        label { "Last Name *" }
                        input {
                            required: true,
                            value: last_name(),
                            oninput: move |evt| last_name.set(evt.value()),
                        }
                    }
                }
                div {
                    class: "form-row",
                    div {
                        class: "form-field",
                        label { "Email" }
                        input {
                            r#type: "email",
                            value: email(),
                            oninput: move |evt| email.set(evt.value()),
                        }
                    }
                    div {
                        class: "form-field",
                        label { "Phone" }
                        input {
                            value: phone(),
                            oninput: move |evt| phone.set(evt.value()),
                        }
                    }
                }
                div {
                    class: "form-row",
                    div {
                        class: "form-field",
                        label { "Title" }
                        input {
                            value: title(),
                            oninput: move |evt| title.set(evt.value()),
                        }
                    }
                    div {
                        class: "form-field",
                        label { "Account" }
                        select {
                            value: account_id(),
                            onchange: move |evt| account_id.set(evt.value()),
                            option { value: "", "None" }
                            for account in accounts {
                                option {
                                    key: "{account.id}",
                                    value: "{account.id}",
                                    selected: account.id.to_string() == account_id(),
                                    "{account.name}"
                                }
                            }
                        }
                    }
                }
                div {
                    class: "form-row",
                    div {
                        class: "form-field",
                        label { "Address" }
                        input {
                            value: address(),
                            oninput: move |evt| address.set(evt.value()),
                        }
                    }
                    div {
                        class: "form-field",
                        label { "City" }
                        input {
                            value: city(),
                            oninput: move |evt| city.set(evt.value()),
                        }
                    }
                }
                div {
                    class: "form-row",
                    div {
                        class: "form-field",
                        label { "State" }
                        input {
                            value: state(),
                            oninput: move |evt| state.set(evt.value()),
                        }
                    }
                    div {
                        class: "form-field",
                        label { "Zip" }
                        input {
                            value: zip(),
                            oninput: move |evt| zip.set(evt.value()),
                        }
                    }
                }
                div {
                    class: "form-field",
                    label { "Country" }
                    input {
                        value: country(),
                        oninput: move |evt| country.set(evt.value()),
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
