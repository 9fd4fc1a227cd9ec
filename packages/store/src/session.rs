//! # Persisted session storage
//!
//! The login response is kept for the lifetime of the session so a page
//! reload does not sign the user out:
//!
//! | Platform | Location | Format |
//! |----------|----------|--------|
//! | Browser (wasm) | `localStorage`, key [`SESSION_KEY`] | JSON |
//! | Native | `<config_dir>/clientline/session.toml` | TOML |
//!
//! A corrupt or missing stored session hydrates to signed-out rather than
//! erroring; writes are best effort.

use crate::auth::Session;

/// Browser storage key for the serialized session.
pub const SESSION_KEY: &str = "clientline.session";

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod platform {
    use super::SESSION_KEY;
    use crate::auth::Session;

    fn local_storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }

    pub fn load() -> Option<Session> {
        let storage = local_storage()?;
        let raw = storage.get_item(SESSION_KEY).ok()??;
        serde_json::from_str(&raw).ok()
    }

    pub fn save(session: &Session) {
        if let (Some(storage), Ok(raw)) = (local_storage(), serde_json::to_string(session)) {
            let _ = storage.set_item(SESSION_KEY, &raw);
        }
    }

    pub fn clear() {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(SESSION_KEY);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod platform {
    use crate::auth::Session;
    use crate::session::SessionFile;

    pub fn load() -> Option<Session> {
        SessionFile::default_location()?.load()
    }

    pub fn save(session: &Session) {
        if let Some(file) = SessionFile::default_location() {
            file.save(session);
        }
    }

    pub fn clear() {
        if let Some(file) = SessionFile::default_location() {
            file.clear();
        }
    }
}

// wasm32 without the web feature has nowhere to persist (headless tooling
// builds); the session lives only in memory.
#[cfg(all(target_arch = "wasm32", not(feature = "web")))]
mod platform {
    use crate::auth::Session;

    pub fn load() -> Option<Session> {
        None
    }

    pub fn save(_session: &Session) {}

    pub fn clear() {}
}

/// Read the persisted session, if any.
pub fn load_session() -> Option<Session> {
    platform::load()
}

/// Persist the session. Best effort.
pub fn save_session(session: &Session) {
    platform::save(session)
}

/// Forget the persisted session.
pub fn clear_session() {
    platform::clear()
}

/// TOML session file used on native platforms.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Clone, Debug)]
pub struct SessionFile {
    path: std::path::PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl SessionFile {
    pub fn new(path: std::path::PathBuf) -> Self {
        Self { path }
    }

    /// `<config_dir>/clientline/session.toml`, platform-dependent.
    pub fn default_location() -> Option<Self> {
        Some(Self::new(
            dirs::config_dir()?.join("clientline").join("session.toml"),
        ))
    }

    pub fn load(&self) -> Option<Session> {
        let raw = std::fs::read_to_string(&self.path).ok()?;
        toml::from_str(&raw).ok()
    }

    pub fn save(&self, session: &Session) {
        let Ok(raw) = toml::to_string_pretty(session) else {
            return;
        };
        if let Some(parent) = self.path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        let _ = std::fs::write(&self.path, raw);
    }

    pub fn clear(&self) {
        let _ = std::fs::remove_file(&self.path);
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::models::User;
    use chrono::Utc;
    use uuid::Uuid;

    fn session() -> Session {
        Session {
            token: "opaque-token".to_string(),
            user: User {
                id: Uuid::new_v4(),
                username: "ada".to_string(),
                email: "ada@example.com".to_string(),
                role: "admin".to_string(),
                created_at: Utc::now(),
                updated_at: Utc::now(),
            },
        }
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let file = SessionFile::new(dir.path().join("clientline").join("session.toml"));

        assert!(file.load().is_none());
        let session = session();
        file.save(&session);
        assert_eq!(file.load(), Some(session));
    }

    #[test]
    fn test_clear_removes_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = SessionFile::new(dir.path().join("session.toml"));
        file.save(&session());
        file.clear();
        assert!(file.load().is_none());
    }

    #[test]
    fn test_corrupt_file_loads_as_signed_out() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.toml");
        std::fs::write(&path, "not really toml {{{{").unwrap();
        assert!(SessionFile::new(path).load().is_none());
    }
}
