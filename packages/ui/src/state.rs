//! Store context: one signal per slice, provided once at the app root.

use dioxus::prelude::*;
use store::{
    Account, AuthSlice, CollectionSlice, Contact, NotesSlice, Opportunity, UiSlice,
};

pub type AccountsSlice = CollectionSlice<Account>;
pub type ContactsSlice = CollectionSlice<Contact>;
pub type OpportunitiesSlice = CollectionSlice<Opportunity>;

/// Handles to every slice. `Signal` is `Copy`, so the whole store can be
/// moved into event handlers and async actions freely.
#[derive(Clone, Copy)]
pub struct Store {
    pub auth: Signal<AuthSlice>,
    pub accounts: Signal<AccountsSlice>,
    pub contacts: Signal<ContactsSlice>,
    pub opportunities: Signal<OpportunitiesSlice>,
    pub notes: Signal<NotesSlice>,
    pub ui: Signal<UiSlice>,
}

/// Get the store from context.
pub fn use_store() -> Store {
    use_context::<Store>()
}

/// Provider component that owns all application state.
///
/// Auth is hydrated synchronously from the persisted session, so the first
/// render already knows whether the user is signed in.
#[component]
pub fn StoreProvider(children: Element) -> Element {
    use_context_provider(|| Store {
        auth: Signal::new(AuthSlice::hydrate(store::load_session())),
        accounts: Signal::new(AccountsSlice::default()),
        contacts: Signal::new(ContactsSlice::default()),
        opportunities: Signal::new(OpportunitiesSlice::default()),
        notes: Signal::new(NotesSlice::default()),
        ui: Signal::new(UiSlice::default()),
    });

    rsx! {
        {children}
    }
}
