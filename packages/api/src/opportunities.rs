//! Opportunity endpoints.

use store::{Opportunity, OpportunityCreate, OpportunityUpdate, Page};
use uuid::Uuid;

use crate::client::ApiClient;
use crate::error::Result;

impl ApiClient {
    /// `GET /opportunities`
    pub async fn list_opportunities(&self, limit: u32, offset: u32) -> Result<Page<Opportunity>> {
        self.get_with_query("/opportunities", &[("limit", limit), ("offset", offset)])
            .await
    }

    /// `GET /opportunities/:id`
    pub async fn get_opportunity(&self, id: Uuid) -> Result<Opportunity> {
        self.get(&format!("/opportunities/{id}")).await
    }

    /// `GET /opportunities/account/:id` — plain array, no envelope.
    pub async fn opportunities_for_account(&self, account_id: Uuid) -> Result<Vec<Opportunity>> {
        self.get(&format!("/opportunities/account/{account_id}"))
            .await
    }

    /// `POST /opportunities`
    pub async fn create_opportunity(&self, payload: &OpportunityCreate) -> Result<Opportunity> {
        self.post("/opportunities", payload).await
    }

    /// `PUT /opportunities/:id`
    pub async fn update_opportunity(
        &self,
        id: Uuid,
        payload: &OpportunityUpdate,
    ) -> Result<Opportunity> {
        self.put(&format!("/opportunities/{id}"), payload).await
    }

    /// `DELETE /opportunities/:id`
    pub async fn delete_opportunity(&self, id: Uuid) -> Result<()> {
        self.delete(&format!("/opportunities/{id}")).await
    }
}
