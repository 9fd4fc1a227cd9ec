use dioxus::prelude::*;

use store::RecordType;
use ui::{Header, NotificationCenter, Sidebar, StoreProvider};
use views::{
    AccountDetail, AccountEdit, AccountList, AccountNew, ContactDetail, ContactEdit, ContactList,
    ContactNew, Dashboard, Login, NotFound, NoteDetail, NoteEdit, NoteList, NoteNew,
    OpportunityDetail, OpportunityEdit, OpportunityList, OpportunityNew,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/login")]
    Login {},

    #[layout(Shell)]
        #[route("/")]
        Dashboard {},

        #[route("/accounts")]
        AccountList {},
        #[route("/accounts/new")]
        AccountNew {},
        #[route("/accounts/:id")]
        AccountDetail { id: uuid::Uuid },
        #[route("/accounts/:id/edit")]
        AccountEdit { id: uuid::Uuid },

        #[route("/contacts")]
        ContactList {},
        #[route("/contacts/new")]
        ContactNew {},
        #[route("/contacts/:id")]
        ContactDetail { id: uuid::Uuid },
        #[route("/contacts/:id/edit")]
        ContactEdit { id: uuid::Uuid },

        #[route("/opportunities")]
        OpportunityList {},
        #[route("/opportunities/new")]
        OpportunityNew {},
        #[route("/opportunities/:id")]
        OpportunityDetail { id: uuid::Uuid },
        #[route("/opportunities/:id/edit")]
        OpportunityEdit { id: uuid::Uuid },

        #[route("/notes")]
        NoteList {},
        #[route("/notes/new")]
        NoteNew {},
        #[route("/notes/:id")]
        NoteDetail { id: uuid::Uuid },
        #[route("/notes/:id/edit")]
        NoteEdit { id: uuid::Uuid },

        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        StoreProvider {
            Router::<Route> {}
        }
    }
}

/// Authenticated chrome: header, sidebar, notification center, routed body.
/// Unauthenticated navigation to anything under this layout bounces to the
/// login page.
#[component]
fn Shell() -> Element {
    let store = ui::use_store();
    let nav = use_navigator();
    let authenticated = store.auth.read().is_authenticated;

    use_effect(move || {
        if !store.auth.read().is_authenticated {
            nav.replace(Route::Login {});
        }
    });

    if !authenticated {
        return rsx! {};
    }

    let on_quick_create = move |record_type: RecordType| {
        match record_type {
            RecordType::Account => nav.push(Route::AccountNew {}),
            RecordType::Contact => nav.push(Route::ContactNew {}),
            RecordType::Opportunity => nav.push(Route::OpportunityNew {}),
        };
    };

    let on_navigate = move |view: String| {
        match view.as_str() {
            "accounts" => nav.push(Route::AccountList {}),
            "contacts" => nav.push(Route::ContactList {}),
            "opportunities" => nav.push(Route::OpportunityList {}),
            "notes" => nav.push(Route::NoteList {}),
            _ => nav.push(Route::Dashboard {}),
        };
    };

    rsx! {
        div {
            class: "app-layout",
            Header {
                on_quick_create,
                on_logout: move |_| {
                    nav.push(Route::Login {});
                },
            }
            div {
                class: "app-body",
                Sidebar { on_navigate }
                main {
                    class: "app-main",
                    Outlet::<Route> {}
                }
            }
            NotificationCenter {}
        }
    }
}
