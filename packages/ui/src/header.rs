//! Top bar: current view title, quick-create buttons, user chip, logout.

use dioxus::prelude::*;
use store::RecordType;

use crate::icons::{FaBars, FaRightFromBracket, FaUser};
use crate::state::use_store;
use crate::Icon;

#[component]
pub fn Header(on_quick_create: EventHandler<RecordType>, on_logout: EventHandler<()>) -> Element {
    let mut store = use_store();
    let title = store.ui.read().view_title();
    let email = store
        .auth
        .read()
        .user
        .as_ref()
        .map(|u| u.email.clone())
        .unwrap_or_else(|| "User".to_string());

    let handle_logout = move |_| {
        crate::auth::logout(store);
        on_logout.call(());
    };

    rsx! {
        header {
            class: "app-header",
            button {
                class: "header-menu-toggle",
                title: "Toggle sidebar",
                onclick: move |_| store.ui.write().toggle_sidebar(),
                Icon { icon: FaBars, width: 16, height: 16 }
            }
            h1 {
                class: "header-title",
                "Clientline - {title}"
            }
            div {
                class: "header-actions",
                button {
                    class: "header-action",
                    onclick: move |_| on_quick_create.call(RecordType::Account),
                    "New Account"
                }
                button {
                    class: "header-action",
                    onclick: move |_| on_quick_create.call(RecordType::Contact),
                    "New Contact"
                }
                button {
                    class: "header-action",
                    onclick: move |_| on_quick_create.call(RecordType::Opportunity),
                    "New Opportunity"
                }
                span {
                    class: "header-user",
                    Icon { icon: FaUser, width: 14, height: 14 }
                    "{email}"
                }
                button {
                    class: "header-action header-logout",
                    onclick: handle_logout,
                    Icon { icon: FaRightFromBracket, width: 14, height: 14 }
                    "Logout"
                }
            }
        }
    }
}
