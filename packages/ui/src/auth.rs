//! Sign-in, sign-out, and expired-session handling.

use api::{ApiClient, ApiError};
use dioxus::prelude::*;
use store::{LoginRequest, Session};

use crate::state::Store;

/// Exchange credentials for a session. Returns whether sign-in succeeded;
/// on success the session is persisted and the auth slice updated.
pub async fn login(mut store: Store, email: String, password: String) -> bool {
    store.auth.write().pending();
    match ApiClient::new(None)
        .login(&LoginRequest { email, password })
        .await
    {
        Ok(response) => {
            let session = Session {
                token: response.token,
                user: response.user,
            };
            store::save_session(&session);
            store.auth.write().fulfilled(session);
            true
        }
        Err(err) => {
            tracing::error!(%err, "login failed");
            let message = match err {
                ApiError::Unauthorized => "Invalid email or password".to_string(),
                other => other.to_string(),
            };
            store.auth.write().rejected(message);
            false
        }
    }
}

/// Forget the persisted session and reset auth state. The caller handles
/// navigation back to the login screen.
pub fn logout(mut store: Store) {
    store::clear_session();
    store.auth.write().signed_out();
}

/// A request came back 401: the token is dead. Clear the session and send
/// the browser to the login page.
pub fn expire_session(store: Store) {
    tracing::info!("session expired, signing out");
    logout(store);
    redirect_to_login();
}

fn redirect_to_login() {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href("/login");
        }
    }
}
