//! Centralized client-side state for the Clientline CRM front end.
//!
//! One slice per concern, each driven through the same pending / fulfilled /
//! rejected request lifecycle, plus the persisted session. Pure data crate:
//! no UI dependency, compiles for wasm32 and native.

pub mod models;
pub use models::{
    Account, AccountCreate, AccountUpdate, Contact, ContactCreate, ContactUpdate, LoginRequest,
    LoginResponse, Note, NoteAssociation, NoteCreate, NoteUpdate, Opportunity, OpportunityCreate,
    OpportunityUpdate, Page, RecordAssociation, RecordType, Stage, User,
};

mod slice;
pub use slice::{CollectionSlice, Keyed};

mod notes;
pub use notes::NotesSlice;

mod auth;
pub use auth::{AuthSlice, Session};

mod ui;
pub use ui::{Notification, Severity, UiSlice};

pub mod session;
pub use session::{clear_session, load_session, save_session, SESSION_KEY};
