//! Navigation sidebar with the active entry highlighted.

use dioxus::prelude::*;
use dioxus_free_icons::IconShape;

use crate::icons::{FaBuilding, FaDollarSign, FaHouse, FaNoteSticky, FaUsers};
use crate::state::use_store;
use crate::Icon;

#[component]
pub fn Sidebar(on_navigate: EventHandler<String>) -> Element {
    let store = use_store();
    let open = store.ui.read().sidebar_open;
    let active = store.ui.read().current_view.clone();

    rsx! {
        nav {
            class: if open { "app-sidebar" } else { "app-sidebar collapsed" },
            SidebarEntry {
                view: "dashboard",
                label: "Dashboard",
                icon: FaHouse,
                active: active == "dashboard",
                show_label: open,
                on_navigate,
            }
            SidebarEntry {
                view: "accounts",
                label: "Accounts",
                icon: FaBuilding,
                active: active == "accounts",
                show_label: open,
                on_navigate,
            }
            SidebarEntry {
                view: "contacts",
                label: "Contacts",
                icon: FaUsers,
                active: active == "contacts",
                show_label: open,
                on_navigate,
            }
            SidebarEntry {
                view: "opportunities",
                label: "Opportunities",
                icon: FaDollarSign,
                active: active == "opportunities",
                show_label: open,
                on_navigate,
            }
            SidebarEntry {
                view: "notes",
                label: "Notes",
                icon: FaNoteSticky,
                active: active == "notes",
                show_label: open,
                on_navigate,
            }
        }
    }
}

#[component]
fn SidebarEntry<I: IconShape + Clone + PartialEq + 'static>(
    view: &'static str,
    label: &'static str,
    icon: I,
    active: bool,
    show_label: bool,
    on_navigate: EventHandler<String>,
) -> Element {
    rsx! {
        button {
            class: if active { "sidebar-entry active" } else { "sidebar-entry" },
            title: "{label}",
            onclick: move |_| on_navigate.call(view.to_string()),
            Icon { icon: icon.clone(), width: 16, height: 16 }
            if show_label {
                span { "{label}" }
            }
        }
    }
}
