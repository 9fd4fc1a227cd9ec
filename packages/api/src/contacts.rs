//! Contact endpoints.

use store::{Contact, ContactCreate, ContactUpdate, Page};
use uuid::Uuid;

use crate::client::ApiClient;
use crate::error::Result;

impl ApiClient {
    /// `GET /contacts`
    pub async fn list_contacts(&self, limit: u32, offset: u32) -> Result<Page<Contact>> {
        self.get_with_query("/contacts", &[("limit", limit), ("offset", offset)])
            .await
    }

    /// `GET /contacts/:id`
    pub async fn get_contact(&self, id: Uuid) -> Result<Contact> {
        self.get(&format!("/contacts/{id}")).await
    }

    /// `GET /contacts/account/:id` — plain array, no envelope.
    pub async fn contacts_for_account(&self, account_id: Uuid) -> Result<Vec<Contact>> {
        self.get(&format!("/contacts/account/{account_id}")).await
    }

    /// `POST /contacts`
    pub async fn create_contact(&self, payload: &ContactCreate) -> Result<Contact> {
        self.post("/contacts", payload).await
    }

    /// `PUT /contacts/:id`
    pub async fn update_contact(&self, id: Uuid, payload: &ContactUpdate) -> Result<Contact> {
        self.put(&format!("/contacts/{id}"), payload).await
    }

    /// `DELETE /contacts/:id`
    pub async fn delete_contact(&self, id: Uuid) -> Result<()> {
        self.delete(&format!("/contacts/{id}")).await
    }
}
