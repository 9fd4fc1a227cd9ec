//! Authentication state and the persisted session payload.

use serde::{Deserialize, Serialize};

use crate::models::User;

/// What survives a page reload: the bearer token and the user it belongs to.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: User,
}

/// Sign-in state for the whole app.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthSlice {
    pub user: Option<User>,
    pub token: Option<String>,
    pub is_authenticated: bool,
    pub loading: bool,
    pub error: Option<String>,
}

impl AuthSlice {
    /// Rebuild sign-in state from a persisted session, if one exists.
    pub fn hydrate(session: Option<Session>) -> Self {
        match session {
            Some(session) => Self::signed_in(session),
            None => Self::default(),
        }
    }

    pub fn signed_in(session: Session) -> Self {
        Self {
            user: Some(session.user),
            token: Some(session.token),
            is_authenticated: true,
            loading: false,
            error: None,
        }
    }

    pub fn pending(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn fulfilled(&mut self, session: Session) {
        *self = Self::signed_in(session);
    }

    pub fn rejected(&mut self, error: impl Into<String>) {
        self.loading = false;
        self.error = Some(error.into());
    }

    /// Logout and 401 handling both reset to signed-out.
    pub fn signed_out(&mut self) {
        *self = Self::default();
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn session() -> Session {
        Session {
            token: "opaque-token".to_string(),
            user: User {
                id: Uuid::new_v4(),
                username: "ada".to_string(),
                email: "ada@example.com".to_string(),
                role: "user".to_string(),
                created_at: Utc::now(),
                updated_at: Utc::now(),
            },
        }
    }

    #[test]
    fn test_hydrate_none_is_signed_out() {
        let auth = AuthSlice::hydrate(None);
        assert!(!auth.is_authenticated);
        assert!(auth.token.is_none());
    }

    #[test]
    fn test_login_lifecycle() {
        let mut auth = AuthSlice::default();
        auth.pending();
        assert!(auth.loading);
        auth.fulfilled(session());
        assert!(auth.is_authenticated);
        assert!(!auth.loading);
        assert_eq!(auth.token.as_deref(), Some("opaque-token"));
    }

    #[test]
    fn test_rejected_keeps_signed_out() {
        let mut auth = AuthSlice::default();
        auth.pending();
        auth.rejected("Invalid email or password");
        assert!(!auth.is_authenticated);
        assert_eq!(auth.error.as_deref(), Some("Invalid email or password"));
    }

    #[test]
    fn test_signed_out_clears_everything() {
        let mut auth = AuthSlice::hydrate(Some(session()));
        auth.signed_out();
        assert_eq!(auth, AuthSlice::default());
    }
}
