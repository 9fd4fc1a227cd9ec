//! HTTP plumbing shared by every endpoint wrapper.

use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{ApiError, Result};

/// Typed client for the CRM REST service.
///
/// Cheap to construct; actions build one per request from the current auth
/// state, so a token change never needs to invalidate a shared client.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base: String,
    token: Option<String>,
}

/// Resolve the service base URL for this platform.
///
/// In the browser the API is served from the app's own origin under
/// `/v1/api`. On native, `CLIENTLINE_API_URL` overrides the default local
/// backend address.
pub fn default_base_url() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .map(|origin| format!("{origin}/v1/api"))
            .unwrap_or_else(|| "/v1/api".to_string())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        std::env::var("CLIENTLINE_API_URL")
            .unwrap_or_else(|_| "http://localhost:8080/v1/api".to_string())
    }
}

impl ApiClient {
    /// Client against the platform default base URL.
    pub fn new(token: Option<String>) -> Self {
        Self::with_base(default_base_url(), token)
    }

    /// Client against an explicit base URL. Tests point this at a mock server.
    pub fn with_base(base: impl Into<String>, token: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base: base.into(),
            token,
        }
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let rb = self.http.request(method, format!("{}{path}", self.base));
        match &self.token {
            Some(token) => rb.bearer_auth(token),
            None => rb,
        }
    }

    async fn decode<T: DeserializeOwned>(path: &str, response: Response) -> Result<T> {
        let status = response.status();
        match status {
            StatusCode::UNAUTHORIZED => return Err(ApiError::Unauthorized),
            StatusCode::NOT_FOUND => return Err(ApiError::NotFound),
            _ if !status.is_success() => {
                let body = response.text().await.unwrap_or_default();
                tracing::error!(%path, status = status.as_u16(), %body, "API error");
                return Err(ApiError::from_response(status.as_u16(), &body));
            }
            _ => {}
        }
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self.request(Method::GET, path).send().await?;
        Self::decode(path, response).await
    }

    pub(crate) async fn get_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, u32)],
    ) -> Result<T> {
        let response = self.request(Method::GET, path).query(query).send().await?;
        Self::decode(path, response).await
    }

    pub(crate) async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let response = self.request(Method::POST, path).json(body).send().await?;
        Self::decode(path, response).await
    }

    pub(crate) async fn put<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let response = self.request(Method::PUT, path).json(body).send().await?;
        Self::decode(path, response).await
    }

    /// DELETE, discarding the `{"message": ...}` acknowledgment body.
    pub(crate) async fn delete(&self, path: &str) -> Result<()> {
        let response = self.request(Method::DELETE, path).send().await?;
        Self::decode::<serde_json::Value>(path, response).await?;
        Ok(())
    }

    /// DELETE with a JSON body; the association endpoints bind one.
    pub(crate) async fn delete_with_body<B: Serialize>(&self, path: &str, body: &B) -> Result<()> {
        let response = self.request(Method::DELETE, path).json(body).send().await?;
        Self::decode::<serde_json::Value>(path, response).await?;
        Ok(())
    }

    /// `GET /health` — service and database status.
    pub async fn health(&self) -> Result<Health> {
        self.get("/health").await
    }
}

/// Response from `GET /health`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Health {
    pub status: String,
    pub database: DatabaseHealth,
}

/// Database portion of the health response.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct DatabaseHealth {
    pub status: String,
    #[serde(default)]
    pub error: String,
}
