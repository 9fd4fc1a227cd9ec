use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let nav = use_navigator();
    let path = segments.join("/");

    rsx! {
        div {
            class: "not-found",
            h2 { "Page not found" }
            p {
                class: "muted",
                "No page exists at /{path}"
            }
            button {
                class: "primary",
                onclick: move |_| {
                    nav.replace(Route::Dashboard {});
                },
                "Back to Dashboard"
            }
        }
    }
}
