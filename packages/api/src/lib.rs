//! Typed REST client for the Clientline CRM backend.
//!
//! Thin wrappers over the service's `/v1/api` endpoints: one module per
//! record type, a shared [`ApiClient`] carrying the bearer token, and an
//! [`ApiError`] taxonomy the UI can react to. No UI dependency; compiles
//! for wasm32 and native.

mod client;
pub use client::{default_base_url, ApiClient, DatabaseHealth, Health};

mod error;
pub use error::{ApiError, Result};

mod accounts;
mod auth;
mod contacts;
mod notes;
mod opportunities;
