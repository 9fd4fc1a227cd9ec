//! Opportunity views: list, detail, create/edit form with stage picker.

use dioxus::prelude::*;
use store::{OpportunityCreate, OpportunityUpdate, RecordType, Severity, Stage};
use ui::actions::{
    delete_opportunity, fetch_account, fetch_accounts, fetch_contacts, fetch_opportunities,
    fetch_opportunity,
};
use ui::{format_amount, format_optional_date, use_store, ErrorBanner, RelatedNotes, Spinner};
use uuid::Uuid;

use crate::Route;

#[component]
pub fn OpportunityList() -> Element {
    let mut store = use_store();
    let nav = use_navigator();

    use_effect(move || store.ui.write().set_view("opportunities"));

    let _loader = use_resource(move || async move {
        fetch_opportunities(store, 20, 0).await;
    });

    let slice = store.opportunities.read();

    rsx! {
        div {
            class: "list-view",
            div {
                class: "list-header",
                h2 { "Opportunities" }
                button {
                    class: "primary",
                    onclick: move |_| {
                        nav.push(Route::OpportunityNew {});
                    },
                    "New Opportunity"
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
                            th { "Stage" }
                            th { "Amount" }
                            th { "Close Date" }
                            th { "Probability" }
                        }
                    }
                    tbody {
                        if slice.items.is_empty() {
                            tr {
                                td {
                                    colspan: 5,
                                    class: "empty-state",
                                    "No opportunities found"
                                }
                            }
                        }
                        for opportunity in slice.items.clone() {
                            tr {
                                key: "{opportunity.id}",
                                class: "clickable",
                                onclick: {
                                    let id = opportunity.id;
                                    move |_| {
                                        nav.push(Route::OpportunityDetail { id });
                                    }
                                },
                                td { "{opportunity.opportunity_name}" }
                                td {
                                    span {
                                        class: "stage-badge",
                                        "{opportunity.stage}"
                                    }
                                }
                                td { "{format_amount(opportunity.amount)}" }
                                td { "{format_optional_date(&opportunity.close_date)}" }
                                td { "{opportunity.probability:.0}%" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn OpportunityDetail(id: Uuid) -> Element {
    let mut store = use_store();
    let nav = use_navigator();
    let mut account_name = use_signal(|| None::<(Uuid, String)>);

    use_effect(move || store.ui.write().set_view("opportunities"));

    let _loader = use_resource(move || async move {
        fetch_opportunity(store, id).await;
        let account_id = store
            .opportunities
            .peek()
            .current
            .as_ref()
            .and_then(|o| o.account_id);
        if let Some(account_id) = account_id {
            fetch_account(store, account_id).await;
            if let Some(account) = store.accounts.peek().current.clone() {
                account_name.set(Some((account.id, account.name)));
            }
        }
    });

    let slice = store.opportunities.read();

    if slice.loading && slice.current.is_none() {
        return rsx! { Spinner {} };
    }
    if let Some(error) = slice.error.clone() {
        return rsx! { ErrorBanner { message: error } };
    }
    let Some(opportunity) = slice.current.clone() else {
        return rsx! { p { class: "empty-state", "Opportunity not found" } };
    };
    drop(slice);

    let name = opportunity.opportunity_name.clone();

    rsx! {
        div {
            class: "detail-view",
            div {
                class: "detail-header",
                h2 { "{name}" }
                div {
                    class: "detail-actions",
                    button {
                        class: "primary",
                        onclick: move |_| {
                            nav.push(Route::OpportunityEdit { id });
                        },
                        "Edit"
                    }
                    button {
                        class: "danger",
                        onclick: move |_| {
                            spawn(async move {
                                if delete_opportunity(store, id).await {
                                    nav.replace(Route::OpportunityList {});
                                }
                            });
                        },
                        "Delete"
                    }
                }
            }

            div {
                class: "card field-grid",
                Field {
                    label: "Stage",
                    value: opportunity.stage.to_string(),
                }
                Field {
                    label: "Amount",
                    value: format_amount(opportunity.amount),
                }
                Field {
                    label: "Close Date",
                    value: format_optional_date(&opportunity.close_date),
                }
                Field {
                    label: "Probability",
                    value: format!("{:.0}%", opportunity.probability),
                }
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
                record_type: RecordType::Opportunity,
                record_name: name,
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
pub fn OpportunityNew() -> Element {
    rsx! {
        OpportunityForm { id: None::<Uuid> }
    }
}

#[component]
pub fn OpportunityEdit(id: Uuid) -> Element {
    rsx! {
        OpportunityForm { id: Some(id) }
    }
}

#[component]
fn OpportunityForm(id: Option<Uuid>) -> Element {
    let mut store = use_store();
    let nav = use_navigator();
    let edit_mode = id.is_some();

    let mut name = use_signal(String::new);
    let mut account_id = use_signal(String::new);
    let mut contact_id = use_signal(String::new);
    let mut stage = use_signal(|| Stage::Prospecting);
    let mut amount = use_signal(String::new);
    let mut close_date = use_signal(String::new);
    let mut probability = use_signal(String::new);
    let mut prefilled = use_signal(|| false);

    use_effect(move || store.ui.write().set_view("opportunities"));

    let _loader = use_resource(move || async move {
        fetch_accounts(store, 100, 0).await;
        fetch_contacts(store, 100, 0).await;
        if let Some(id) = id {
            fetch_opportunity(store, id).await;
        }
    });

    use_effect(move || {
        if !edit_mode || prefilled() {
            return;
        }
        if let Some(opportunity) = store.opportunities.read().current.clone() {
            if Some(opportunity.id) == id {
                name.set(opportunity.opportunity_name);
                account_id.set(
                    opportunity
                        .account_id
                        .map(|a| a.to_string())
                        .unwrap_or_default(),
                );
                contact_id.set(
                    opportunity
                        .primary_contact_id
                        .map(|c| c.to_string())
                        .unwrap_or_default(),
                );
                stage.set(opportunity.stage);
                amount.set(opportunity.amount.to_string());
                close_date.set(
                    opportunity
                        .close_date
                        .map(|d| d.format("%Y-%m-%d").to_string())
                        .unwrap_or_default(),
                );
                probability.set(opportunity.probability.to_string());
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
        let Ok(linked_account) = Uuid::parse_str(&account_id()) else {
            store.ui.write().notify(Severity::Error, "Account is required");
            return;
        };
        let primary_contact = Uuid::parse_str(&contact_id()).ok();
        let amount_value = amount().trim().parse::<f64>().unwrap_or(0.0);
        let probability_value = probability().trim().parse::<f64>().unwrap_or(0.0);
        spawn(async move {
            let saved = match id {
                Some(id) => {
                    let payload = OpportunityUpdate {
                        opportunity_name: name(),
                        account_id: linked_account,
                        primary_contact_id: primary_contact,
                        stage: stage(),
                        amount: amount_value,
                        close_date: close_date(),
                        probability: probability_value,
                        updated_by: user_id,
                    };
                    ui::actions::update_opportunity(store, id, payload).await
                }
                None => {
                    let payload = OpportunityCreate {
                        opportunity_name: name(),
                        account_id: linked_account,
                        primary_contact_id: primary_contact,
                        stage: stage(),
                        amount: amount_value,
                        close_date: close_date(),
                        probability: probability_value,
                        created_by: user_id,
                    };
                    ui::actions::create_opportunity(store, payload).await
                }
            };
            if let Some(opportunity) = saved {
                nav.push(Route::OpportunityDetail { id: opportunity.id });
            }
        });
    };

    let handle_cancel = move |_| {
        match id {
            Some(id) => nav.push(Route::OpportunityDetail { id }),
            None => nav.push(Route::OpportunityList {}),
        };
    };

    let loading = store.opportunities.read().loading;
    if edit_mode && loading && !prefilled() {
        return rsx! { Spinner {} };
    }

    let accounts = store.accounts.read().items.clone();
    let contacts = store.contacts.read().items.clone();

    rsx! {
        div {
            class: "form-view",
            h2 {
                if edit_mode { "Edit Opportunity" } else { "New Opportunity" }
            }
            form {
                class: "card entity-form",
                onsubmit: handle_submit,
                div {
                    class: "form-field",
                    label { "Opportunity Name *" }
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
                        label { "Account *" }
                        select {
                            required: true,
                            value: account_id(),
                            onchange: move |evt| account_id.set(evt.value()),
                            option { value: "", "Select an account" }
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
                    div {
                        class: "form-field",
                        label { "Primary Contact" }
                        select {
                            value: contact_id(),
                            onchange: move |evt| contact_id.set(evt.value()),
                            option { value: "", "None" }
                            for contact in contacts {
                                option {
                                    key: "{contact.id}",
                                    value: "{contact.id}",
                                    selected: contact.id.to_string() == contact_id(),
                                    "{contact.full_name()}"
                                }
                            }
                        }
                    }
                }
                div {
                    class: "form-row",
                    div {
                        class: "form-field",
                        label { "Stage" }
                        select {
                            value: stage().to_string(),
                            onchange: move |evt| stage.set(Stage::from(evt.value())),
                            for option_stage in Stage::ALL {
                                option {
                                    key: "{option_stage}",
                                    value: "{option_stage}",
                                    selected: option_stage == stage(),
                                    "{option_stage}"
                                }
                            }
                        }
                    }
                    div {
                        class: "form-field",
                        label { "Amount" }
                        input {
                            r#type: "number",
                            min: "0",
                            step: "0.01",
                            value: amount(),
                            oninput: move |evt| amount.set(evt.value()),
                        }
                    }
                }
                div {
                    class: "form-row",
                    div {
                        class: "form-field",
                        label { "Close Date" }
                        input {
                            r#type: "date",
                            value: close_date(),
                            oninput: move |evt| close_date.set(evt.value()),
                        }
                    }
                    div {
                        class: "form-field",
                        label { "Probability (%)" }
                        input {
                            r#type: "number",
                            min: "0",
                            max: "100",
                            value: probability(),
                            oninput: move |evt| probability.set(evt.value()),
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
