//! Authentication endpoint.

use store::{LoginRequest, LoginResponse};

use crate::client::ApiClient;
use crate::error::Result;

impl ApiClient {
    /// `POST /auth/login` — exchange credentials for a bearer token and the
    /// signed-in user. The only unauthenticated endpoint besides `/health`.
    pub async fn login(&self, credentials: &LoginRequest) -> Result<LoginResponse> {
        self.post("/auth/login", credentials).await
    }
}
