//! Notification center: renders the ui slice's queue. Toasts dismiss on
//! click and auto-expire after a few seconds.

use dioxus::prelude::*;
use store::Notification;

use crate::state::use_store;

const AUTO_DISMISS_SECS: u64 = 4;

#[component]
pub fn NotificationCenter() -> Element {
    let store = use_store();
    let notifications = store.ui.read().notifications.clone();

    rsx! {
        div {
            class: "notification-center",
            for notification in notifications {
                NotificationToast { key: "{notification.id}", notification }
            }
        }
    }
}

#[component]
fn NotificationToast(notification: Notification) -> Element {
    let mut store = use_store();
    let id = notification.id;

    // Expire the toast after a fixed delay; dismissing twice is harmless.
    use_effect(move || {
        spawn(async move {
            sleep_secs(AUTO_DISMISS_SECS).await;
            store.ui.write().dismiss(id);
        });
    });

    rsx! {
        div {
            class: "notification {notification.severity.css_class()}",
            onclick: move |_| store.ui.write().dismiss(id),
            "{notification.message}"
        }
    }
}

async fn sleep_secs(secs: u64) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(std::time::Duration::from_secs(secs)).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(std::time::Duration::from_secs(secs)).await;
}
