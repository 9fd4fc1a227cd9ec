//! Dashboard: entity counts plus recent accounts.

use dioxus::prelude::*;
use ui::actions::{fetch_accounts, fetch_contacts, fetch_opportunities};
use ui::use_store;

use crate::Route;

#[component]
pub fn Dashboard() -> Element {
    let mut store = use_store();
    let nav = use_navigator();

    use_effect(move || store.ui.write().set_view("dashboard"));

    // Recent accounts for the card list; contacts and opportunities only for
    // their totals, which ride along on any page size.
    let _loader = use_resource(move || async move {
        fetch_accounts(store, 5, 0).await;
        fetch_contacts(store, 1, 0).await;
        fetch_opportunities(store, 1, 0).await;
    });

    let accounts = store.accounts.read().items.clone();
    let account_total = store.accounts.read().total;
    let contact_total = store.contacts.read().total;
    let opportunity_total = store.opportunities.read().total;

    rsx! {
        div {
            class: "dashboard",
            h2 { "Dashboard" }

            div {
                class: "summary-cards",
                SummaryCard {
                    title: "Accounts",
                    count: account_total,
                    on_click: move |_| {
                        nav.push(Route::AccountList {});
                    },
                }
                SummaryCard {
                    title: "Contacts",
                    count: contact_total,
                    on_click: move |_| {
                        nav.push(Route::ContactList {});
                    },
                }
                SummaryCard {
                    title: "Opportunities",
                    count: opportunity_total,
                    on_click: move |_| {
                        nav.push(Route::OpportunityList {});
                    },
                }
            }

            h3 { "Recent Accounts" }
            div {
                class: "recent-accounts",
                if accounts.is_empty() {
                    p {
                        class: "empty-state",
                        "No accounts found. Create your first account to get started."
                    }
                } else {
                    for account in accounts {
                        div {
                            key: "{account.id}",
                            class: "card recent-account-card",
                            onclick: {
                                let id = account.id;
                                move |_| {
                                    nav.push(Route::AccountDetail { id });
                                }
                            },
                            h4 { "{account.name}" }
                            p {
                                class: "muted",
                                if account.industry.is_empty() {
                                    "No industry specified"
                                } else {
                                    "{account.industry}"
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
fn SummaryCard(title: &'static str, count: u64, on_click: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "card summary-card",
            onclick: move |_| on_click.call(()),
            span { class: "summary-count", "{count}" }
            span { class: "summary-title", "{title}" }
        }
    }
}
