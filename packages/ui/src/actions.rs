//! # Thunk-style actions
//!
//! Every action drives its slice through the same lifecycle: mark pending,
//! call the REST client, then merge the payload (fulfilled) or retain the
//! error string (rejected). A 401 anywhere ends the session.
//!
//! Mutations return the server's record (`Option`) so form views can
//! navigate to the new detail page on success; on failure they push an
//! error notification and return `None`.

use api::{ApiClient, ApiError};
use dioxus::prelude::*;
use store::{
    Account, AccountCreate, AccountUpdate, Contact, ContactCreate, ContactUpdate, Note,
    NoteAssociation, NoteCreate, NoteUpdate, Opportunity, OpportunityCreate, OpportunityUpdate,
    RecordType, Severity,
};
use uuid::Uuid;

use crate::auth::expire_session;
use crate::state::Store;

/// Client carrying the current bearer token, built fresh per request.
fn client(store: &Store) -> ApiClient {
    ApiClient::new(store.auth.peek().token.clone())
}

/// Convert a failure into the string the slice retains, ending the session
/// first when the token was rejected.
fn rejection(store: Store, err: ApiError) -> String {
    if matches!(err, ApiError::Unauthorized) {
        expire_session(store);
    }
    err.to_string()
}

fn notify_error(mut store: Store, message: String) {
    store.ui.write().notify(Severity::Error, message);
}

// ---- accounts ----

pub async fn fetch_accounts(mut store: Store, limit: u32, offset: u32) {
    store.accounts.write().pending();
    match client(&store).list_accounts(limit, offset).await {
        Ok(page) => store.accounts.write().fulfilled_list(page),
        Err(err) => {
            tracing::error!(%err, "failed to fetch accounts");
            let message = rejection(store, err);
            store.accounts.write().rejected(message);
        }
    }
}

pub async fn fetch_account(mut store: Store, id: Uuid) {
    store.accounts.write().pending();
    match client(&store).get_account(id).await {
        Ok(account) => store.accounts.write().fulfilled_one(account),
        Err(err) => {
            tracing::error!(%err, %id, "failed to fetch account");
            let message = rejection(store, err);
            store.accounts.write().rejected(message);
        }
    }
}

pub async fn create_account(mut store: Store, payload: AccountCreate) -> Option<Account> {
    store.accounts.write().pending();
    match client(&store).create_account(&payload).await {
        Ok(account) => {
            store.accounts.write().created(account.clone());
            Some(account)
        }
        Err(err) => {
            tracing::error!(%err, "failed to create account");
            let message = rejection(store, err);
            store.accounts.write().rejected(message.clone());
            notify_error(store, format!("Error creating account: {message}"));
            None
        }
    }
}

pub async fn update_account(
    mut store: Store,
    id: Uuid,
    payload: AccountUpdate,
) -> Option<Account> {
    store.accounts.write().pending();
    match client(&store).update_account(id, &payload).await {
        Ok(account) => {
            store.accounts.write().updated(account.clone());
            Some(account)
        }
        Err(err) => {
            tracing::error!(%err, %id, "failed to update account");
            let message = rejection(store, err);
            store.accounts.write().rejected(message.clone());
            notify_error(store, format!("Error updating account: {message}"));
            None
        }
    }
}

pub async fn delete_account(mut store: Store, id: Uuid) -> bool {
    store.accounts.write().pending();
    match client(&store).delete_account(id).await {
        Ok(()) => {
            store.accounts.write().deleted(id);
            true
        }
        Err(err) => {
            tracing::error!(%err, %id, "failed to delete account");
            let message = rejection(store, err);
            store.accounts.write().rejected(message.clone());
            notify_error(store, format!("Error deleting account: {message}"));
            false
        }
    }
}

/// Contacts belonging to one account, for the account detail panel. Errors
/// notify and yield an empty list rather than disturbing the contacts slice.
pub async fn fetch_contacts_for_account(store: Store, account_id: Uuid) -> Vec<Contact> {
    match client(&store).contacts_for_account(account_id).await {
        Ok(contacts) => contacts,
        Err(err) => {
            tracing::error!(%err, %account_id, "failed to fetch account contacts");
            let message = rejection(store, err);
            notify_error(store, format!("Error loading contacts: {message}"));
            Vec::new()
        }
    }
}

/// Opportunities belonging to one account, for the account detail panel.
pub async fn fetch_opportunities_for_account(store: Store, account_id: Uuid) -> Vec<Opportunity> {
    match client(&store).opportunities_for_account(account_id).await {
        Ok(opportunities) => opportunities,
        Err(err) => {
            tracing::error!(%err, %account_id, "failed to fetch account opportunities");
            let message = rejection(store, err);
            notify_error(store, format!("Error loading opportunities: {message}"));
            Vec::new()
        }
    }
}

// ---- contacts ----

pub async fn fetch_contacts(mut store: Store, limit: u32, offset: u32) {
    store.contacts.write().pending();
    match client(&store).list_contacts(limit, offset).await {
        Ok(page) => store.contacts.write().fulfilled_list(page),
        Err(err) => {
            tracing::error!(%err, "failed to fetch contacts");
            let message = rejection(store, err);
            store.contacts.write().rejected(message);
        }
    }
}

pub async fn fetch_contact(mut store: Store, id: Uuid) {
    store.contacts.write().pending();
    match client(&store).get_contact(id).await {
        Ok(contact) => store.contacts.write().fulfilled_one(contact),
        Err(err) => {
            tracing::error!(%err, %id, "failed to fetch contact");
            let message = rejection(store, err);
            store.contacts.write().rejected(message);
        }
    }
}

pub async fn create_contact(mut store: Store, payload: ContactCreate) -> Option<Contact> {
    store.contacts.write().pending();
    match client(&store).create_contact(&payload).await {
        Ok(contact) => {
            store.contacts.write().created(contact.clone());
            Some(contact)
        }
        Err(err) => {
            tracing::error!(%err, "failed to create contact");
            let message = rejection(store, err);
            store.contacts.write().rejected(message.clone());
            notify_error(store, format!("Error creating contact: {message}"));
            None
        }
    }
}

pub async fn update_contact(
    mut store: Store,
    id: Uuid,
    payload: ContactUpdate,
) -> Option<Contact> {
    store.contacts.write().pending();
    match client(&store).update_contact(id, &payload).await {
        Ok(contact) => {
            store.contacts.write().updated(contact.clone());
            Some(contact)
        }
        Err(err) => {
            tracing::error!(%err, %id, "failed to update contact");
            let message = rejection(store, err);
            store.contacts.write().rejected(message.clone());
            notify_error(store, format!("Error updating contact: {message}"));
            None
        }
    }
}

pub async fn delete_contact(mut store: Store, id: Uuid) -> bool {
    store.contacts.write().pending();
    match client(&store).delete_contact(id).await {
        Ok(()) => {
            store.contacts.write().deleted(id);
            true
        }
        Err(err) => {
            tracing::error!(%err, %id, "failed to delete contact");
            let message = rejection(store, err);
            store.contacts.write().rejected(message.clone());
            notify_error(store, format!("Error deleting contact: {message}"));
            false
        }
    }
}

// ---- opportunities ----

pub async fn fetch_opportunities(mut store: Store, limit: u32, offset: u32) {
    store.opportunities.write().pending();
    match client(&store).list_opportunities(limit, offset).await {
        Ok(page) => store.opportunities.write().fulfilled_list(page),
        Err(err) => {
            tracing::error!(%err, "failed to fetch opportunities");
            let message = rejection(store, err);
            store.opportunities.write().rejected(message);
        }
    }
}

pub async fn fetch_opportunity(mut store: Store, id: Uuid) {
    store.opportunities.write().pending();
    match client(&store).get_opportunity(id).await {
        Ok(opportunity) => store.opportunities.write().fulfilled_one(opportunity),
        Err(err) => {
            tracing::error!(%err, %id, "failed to fetch opportunity");
            let message = rejection(store, err);
            store.opportunities.write().rejected(message);
        }
    }
}

pub async fn create_opportunity(
    mut store: Store,
    payload: OpportunityCreate,
) -> Option<Opportunity> {
    store.opportunities.write().pending();
    match client(&store).create_opportunity(&payload).await {
        Ok(opportunity) => {
            store.opportunities.write().created(opportunity.clone());
            Some(opportunity)
        }
        Err(err) => {
            tracing::error!(%err, "failed to create opportunity");
            let message = rejection(store, err);
            store.opportunities.write().rejected(message.clone());
            notify_error(store, format!("Error creating opportunity: {message}"));
            None
        }
    }
}

pub async fn update_opportunity(
    mut store: Store,
    id: Uuid,
    payload: OpportunityUpdate,
) -> Option<Opportunity> {
    store.opportunities.write().pending();
    match client(&store).update_opportunity(id, &payload).await {
        Ok(opportunity) => {
            store.opportunities.write().updated(opportunity.clone());
            Some(opportunity)
        }
        Err(err) => {
            tracing::error!(%err, %id, "failed to update opportunity");
            let message = rejection(store, err);
            store.opportunities.write().rejected(message.clone());
            notify_error(store, format!("Error updating opportunity: {message}"));
            None
        }
    }
}

pub async fn delete_opportunity(mut store: Store, id: Uuid) -> bool {
    store.opportunities.write().pending();
    match client(&store).delete_opportunity(id).await {
        Ok(()) => {
            store.opportunities.write().deleted(id);
            true
        }
        Err(err) => {
            tracing::error!(%err, %id, "failed to delete opportunity");
            let message = rejection(store, err);
            store.opportunities.write().rejected(message.clone());
            notify_error(store, format!("Error deleting opportunity: {message}"));
            false
        }
    }
}

// ---- notes ----

pub async fn fetch_notes(mut store: Store, limit: u32, offset: u32) {
    store.notes.write().collection.pending();
    match client(&store).list_notes(limit, offset).await {
        Ok(page) => store.notes.write().collection.fulfilled_list(page),
        Err(err) => {
            tracing::error!(%err, "failed to fetch notes");
            let message = rejection(store, err);
            store.notes.write().collection.rejected(message);
        }
    }
}

pub async fn fetch_note(mut store: Store, id: Uuid) {
    store.notes.write().collection.pending();
    match client(&store).get_note(id).await {
        Ok(note) => store.notes.write().collection.fulfilled_one(note),
        Err(err) => {
            tracing::error!(%err, %id, "failed to fetch note");
            let message = rejection(store, err);
            store.notes.write().collection.rejected(message);
        }
    }
}

/// Notes linked to one record, for the related-notes panel.
pub async fn fetch_notes_for_record(mut store: Store, record_type: RecordType, record_id: Uuid) {
    store.notes.write().related_pending();
    match client(&store).notes_for_record(record_type, record_id).await {
        Ok(notes) => store.notes.write().related_fulfilled(notes),
        Err(err) => {
            tracing::error!(%err, %record_id, "failed to fetch related notes");
            let message = rejection(store, err);
            store.notes.write().related_rejected(message);
        }
    }
}

pub async fn create_note(mut store: Store, payload: NoteCreate) -> Option<Note> {
    store.notes.write().collection.pending();
    match client(&store).create_note(&payload).await {
        Ok(note) => {
            store.notes.write().collection.created(note.clone());
            Some(note)
        }
        Err(err) => {
            tracing::error!(%err, "failed to create note");
            let message = rejection(store, err);
            store.notes.write().collection.rejected(message.clone());
            notify_error(store, format!("Error creating note: {message}"));
            None
        }
    }
}

pub async fn update_note(mut store: Store, id: Uuid, payload: NoteUpdate) -> Option<Note> {
    store.notes.write().collection.pending();
    match client(&store).update_note(id, &payload).await {
        Ok(note) => {
            store.notes.write().collection.updated(note.clone());
            Some(note)
        }
        Err(err) => {
            tracing::error!(%err, %id, "failed to update note");
            let message = rejection(store, err);
            store.notes.write().collection.rejected(message.clone());
            notify_error(store, format!("Error updating note: {message}"));
            None
        }
    }
}

pub async fn delete_note(mut store: Store, id: Uuid) -> bool {
    store.notes.write().collection.pending();
    match client(&store).delete_note(id).await {
        Ok(()) => {
            store.notes.write().collection.deleted(id);
            true
        }
        Err(err) => {
            tracing::error!(%err, %id, "failed to delete note");
            let message = rejection(store, err);
            store.notes.write().collection.rejected(message.clone());
            notify_error(store, format!("Error deleting note: {message}"));
            false
        }
    }
}

/// Link a note to a record, then refresh the related panel.
pub async fn add_note_association(store: Store, payload: NoteAssociation) {
    let record_type = payload.record_type;
    let record_id = payload.record_id;
    match client(&store).add_note_association(&payload).await {
        Ok(()) => fetch_notes_for_record(store, record_type, record_id).await,
        Err(err) => {
            tracing::error!(%err, "failed to add note association");
            let message = rejection(store, err);
            notify_error(store, format!("Error linking note: {message}"));
        }
    }
}

/// Unlink a note from a record, then refresh the related panel.
pub async fn remove_note_association(store: Store, payload: NoteAssociation) {
    let record_type = payload.record_type;
    let record_id = payload.record_id;
    match client(&store).remove_note_association(&payload).await {
        Ok(()) => fetch_notes_for_record(store, record_type, record_id).await,
        Err(err) => {
            tracing::error!(%err, "failed to remove note association");
            let message = rejection(store, err);
            notify_error(store, format!("Error unlinking note: {message}"));
        }
    }
}
