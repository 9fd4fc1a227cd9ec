//! This crate contains all shared UI for the workspace.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod state;
pub use state::{
    use_store, AccountsSlice, ContactsSlice, OpportunitiesSlice, Store, StoreProvider,
};

pub mod auth;
pub use auth::{expire_session, login, logout};

pub mod actions;

mod header;
pub use header::Header;

mod sidebar;
pub use sidebar::Sidebar;

mod notifications;
pub use notifications::NotificationCenter;

mod related_notes;
pub use related_notes::RelatedNotes;

mod markdown;
pub use markdown::{render_markdown, Markdown};

mod widgets;
pub use widgets::{
    format_amount, format_date, format_datetime, format_optional_date, or_na, ErrorBanner,
    Spinner,
};
