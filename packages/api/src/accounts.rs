//! Account endpoints.

use store::{Account, AccountCreate, AccountUpdate, Page};
use uuid::Uuid;

use crate::client::ApiClient;
use crate::error::Result;

impl ApiClient {
    /// `GET /accounts`
    pub async fn list_accounts(&self, limit: u32, offset: u32) -> Result<Page<Account>> {
        self.get_with_query("/accounts", &[("limit", limit), ("offset", offset)])
            .await
    }

    /// `GET /accounts/:id`
    pub async fn get_account(&self, id: Uuid) -> Result<Account> {
        self.get(&format!("/accounts/{id}")).await
    }

    /// `POST /accounts`
    pub async fn create_account(&self, payload: &AccountCreate) -> Result<Account> {
        self.post("/accounts", payload).await
    }

    /// `PUT /accounts/:id`
    pub async fn update_account(&self, id: Uuid, payload: &AccountUpdate) -> Result<Account> {
        self.put(&format!("/accounts/{id}"), payload).await
    }

    /// `DELETE /accounts/:id`
    pub async fn delete_account(&self, id: Uuid) -> Result<()> {
        self.delete(&format!("/accounts/{id}")).await
    }
}
