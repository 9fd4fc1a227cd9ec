//! Account views: list, detail with related panels, create/edit form.

use dioxus::prelude::*;
use store::{AccountCreate, AccountUpdate, Contact, Opportunity, RecordType, Severity};
use ui::actions::{
    delete_account, fetch_account, fetch_accounts, fetch_contacts_for_account,
    fetch_opportunities_for_account,
};
use ui::{
    format_amount, format_date, or_na, use_store, ErrorBanner, RelatedNotes, Spinner,
};
use uuid::Uuid;

use crate::Route;

#[component]
pub fn AccountList() -> Element {
    let mut store = use_store();
    let nav = use_navigator();

    use_effect(move || store.ui.write().set_view("accounts"));

    let _loader = use_resource(move || async move {
        fetch_accounts(store, 20, 0).await;
    });

    let slice = store.accounts.read();

    rsx! {
        div {
            class: "list-view",
            div {
                class: "list-header",
                h2 { "Accounts" }
                button {
                    class: "primary",
                    onclick: move |_| {
                        nav.push(Route::AccountNew {});
                    },
                    "New Account"
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
                            th { "Industry" }
                            th { "Website" }
                            th { "Phone" }
                        }
                    }
                    tbody {
                        if slice.items.is_empty() {
                            tr {
                                td {
                                    colspan: 4,
                                    class: "empty-state",
                                    "No accounts found"
                                }
                            }
                        }
                        for account in slice.items.clone() {
                            tr {
                                key: "{account.id}",
                                class: "clickable",
                                onclick: {
                                    let id = account.id;
                                    move |_| {
                                        nav.push(Route::AccountDetail { id });
                                    }
                                },
                                td { "{account.name}" }
                                td { "{or_na(&account.industry)}" }
                                td { "{or_na(&account.website)}" }
                                td { "{or_na(&account.phone)}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn AccountDetail(id: Uuid) -> Element {
    let mut store = use_store();
    let nav = use_navigator();
    let mut contacts = use_signal(Vec::<Contact>::new);
    let mut opportunities = use_signal(Vec::<Opportunity>::new);

    use_effect(move || store.ui.write().set_view("accounts"));

    let _loader = use_resource(move || async move {
        fetch_account(store, id).await;
        contacts.set(fetch_contacts_for_account(store, id).await);
        opportunities.set(fetch_opportunities_for_account(store, id).await);
    });

    let slice = store.accounts.read();

    if slice.loading && slice.current.is_none() {
        return rsx! { Spinner {} };
    }
    if let Some(error) = slice.error.clone() {
        return rsx! { ErrorBanner { message: error } };
    }
    let Some(account) = slice.current.clone() else {
        return rsx! { p { class: "empty-state", "Account not found" } };
    };
    drop(slice);

    let account_name = account.name.clone();

    rsx! {
        div {
            class: "detail-view",
            div {
                class: "detail-header",
                h2 { "{account.name}" }
                div {
                    class: "detail-actions",
                    button {
                        class: "primary",
                        onclick: move |_| {
                            nav.push(Route::AccountEdit { id });
                        },
                        "Edit"
                    }
                    button {
                        class: "danger",
                        onclick: move |_| {
                            spawn(async move {
                                if delete_account(store, id).await {
                                    nav.replace(Route::AccountList {});
                                }
                            });
                        },
                        "Delete"
                    }
                }
            }

            div {
                class: "card field-grid",
                Field { label: "Industry", value: or_na(&account.industry).to_string() }
                Field { label: "Website", value: or_na(&account.website).to_string() }
                Field { label: "Phone", value: or_na(&account.phone).to_string() }
                Field { label: "Address", value: or_na(&account.address).to_string() }
                Field { label: "City", value: or_na(&account.city).to_string() }
                Field { label: "State", value: or_na(&account.state).to_string() }
                Field { label: "Zip", value: or_na(&account.zip).to_string() }
                Field { label: "Country", value: or_na(&account.country).to_string() }
                Field { label: "Created", value: format_date(&account.created_at) }
            }

            section {
                class: "card related-panel",
                h3 { "Contacts" }
                if contacts.read().is_empty() {
                    p {
                        class: "empty-state",
                        "No contacts associated with this account yet."
                    }
                } else {
                    ul {
                        for contact in contacts.read().clone() {
                            li {
                                key: "{contact.id}",
                                a {
                                    onclick: {
                                        let id = contact.id;
                                        move |_| {
                                            nav.push(Route::ContactDetail { id });
                                        }
                                    },
                                    "{contact.full_name()}"
                                }
                                span { class: "muted", " {or_na(&contact.title)}" }
                            }
                        }
                    }
                }
            }

            section {
                class: "card related-panel",
                h3 { "Opportunities" }
                if opportunities.read().is_empty() {
                    p {
                        class: "empty-state",
                        "No opportunities associated with this account yet."
                    }
                } else {
                    ul {
                        for opportunity in opportunities.read().clone() {
                            li {
                                key: "{opportunity.id}",
                                a {
                                    onclick: {
                                        let id = opportunity.id;
                                        move |_| {
                                            nav.push(Route::OpportunityDetail { id });
                                        }
                                    },
                                    "{opportunity.opportunity_name}"
                                }
                                span {
                                    class: "muted",
                                    " {opportunity.stage} · {format_amount(opportunity.amount)}"
                                }
                            }
                        }
                    }
                }
            }

            RelatedNotes {
                record_id: id,
                record_type: RecordType::Account,
                record_name: account_name,
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
pub fn AccountNew() -> Element {
    rsx! {
        AccountForm { id: None::<Uuid> }
    }
}

#[component]
pub fn AccountEdit(id: Uuid) -> Element {
    rsx! {
        AccountForm { id: Some(id) }
    }
}

/// Create and edit share one form; edit prefills from `current` once it
/// arrives.
#[component]
fn AccountForm(id: Option<Uuid>) -> Element {
    let mut store = use_store();
    let nav = use_navigator();
    let edit_mode = id.is_some();

    let mut name = use_signal(String::new);
    let mut industry = use_signal(String::new);
    let mut website = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut address = use_signal(String::new);
    let mut city = use_signal(String::new);
    let mut state = use_signal(String::new);
    let mut zip = use_signal(String::new);
    let mut country = use_signal(String::new);
    let mut prefilled = use_signal(|| false);

    use_effect(move || store.ui.write().set_view("accounts"));

    let _loader = use_resource(move || async move {
        if let Some(id) = id {
            fetch_account(store, id).await;
        }
    });

    use_effect(move || {
        if !edit_mode || prefilled() {
            return;
        }
        if let Some(account) = store.accounts.read().current.clone() {
            if Some(account.id) == id {
                name.set(account.name);
                industry.set(account.industry);
                website.set(account.website);
                phone.set(account.phone);
                address.set(account.address);
                city.set(account.city);
                state.set(account.state);
                zip.set(account.zip);
                country.set(account.country);
                prefilled.set(true);
            }
        }
    });

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if name().trim().is_empty() {
            return;
        }
        let Some(user_id) = store.auth.peek().user.as_ref().map(|u| u.id) else {
            store.ui.write().notify(Severity::Error, "Not signed in");
            return;
        };
        spawn(async move {
            let saved = match id {
                Some(id) => {
                    let payload = AccountUpdate {
                        name: name(),
                        industry: industry(),
                        website: website(),
                        phone: phone(),
                        address: address(),
                        city: city(),
                        state: state(),
                        zip: zip(),
                        country: country(),
                        updated_by: user_id,
                    };
                    ui::actions::update_account(store, id, payload).await
                }
                None => {
                    let payload = AccountCreate {
                        name: name(),
                        industry: industry(),
                        website: website(),
                        phone: phone(),
                        address: address(),
                        city: city(),
                        state: state(),
                        zip: zip(),
                        country: country(),
                        created_by: user_id,
                    };
                    ui::actions::create_account(store, payload).await
                }
            };
            if let Some(account) = saved {
                nav.push(Route::AccountDetail { id: account.id });
            }
        });
    };

    let handle_cancel = move |_| {
        match id {
            Some(id) => nav.push(Route::AccountDetail { id }),
            None => nav.push(Route::AccountList {}),
        };
    };

    let loading = store.accounts.read().loading;
    if edit_mode && loading && !prefilled() {
        return rsx! { Spinner {} };
    }

    rsx! {
        div {
            class: "form-view",
            h2 {
                if edit_mode { "Edit Account" } else { "New Account" }
            }
            form {
                class: "card entity-form",
                onsubmit: handle_submit,
                div {
                    class: "form-field",
                    label { "Account Name *" }
                    input {
                        required: true,
                        value: name(),
                        oninput: move |evt| name.set(evt.value()),
                    }
                }
                div {
                    class: "form-row",
                    div {
                        class: "form-field",
                        label { "Industry" }
                        input {
                            value: industry(),
                            oninput: move |evt| industry.set(evt.value()),
                        }
                    }
                    div {
                        class: "form-field",
                        label { "Website" }
                        input {
                            value: website(),
                            oninput: move |evt| website.set(evt.value()),
                        }
                    }
                }
                div {
                    class: "form-row",
                    div {
                        class: "form-field",
                        label { "Phone" }
                        input {
                            value: phone(),
                            oninput: move |evt| phone.set(evt.value()),
                        }
                    }
                    div {
                        class: "form-field",
                        label { "Address" }
                        input {
                            value: address(),
                            oninput: move |evt| address.set(evt.value()),
                        }
                    }
                }
                div {
                    class: "form-row",
                    div {
                        class: "form-field",
                        label { "City" }
                        input {
                            value: city(),
                            oninput: move |evt| city.set(evt.value()),
                        }
                    }
                    div {
                        class: "form-field",
                        label { "State" }
                        input {
                            value: state(),
                            oninput: move |evt| state.set(evt.value()),
                        }
                    }
                }
                div {
                    class: "form-row",
                    div {
                        class: "form-field",
                        label { "Zip" }
                        input {
                            value: zip(),
                            oninput: move |evt| zip.set(evt.value()),
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
