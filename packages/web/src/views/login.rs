//! Login page: email/password against `POST /auth/login`.

use dioxus::prelude::*;
use ui::use_store;

use crate::Route;

#[component]
pub fn Login() -> Element {
    let store = use_store();
    let nav = use_navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);

    // Already signed in: the login page is not for you.
    use_effect(move || {
        if store.auth.read().is_authenticated {
            nav.replace(Route::Dashboard {});
        }
    });

    let loading = store.auth.read().loading;
    let error = store.auth.read().error.clone();

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let email = email().trim().to_string();
        let password = password();
        if email.is_empty() || password.is_empty() {
            return;
        }
        spawn(async move {
            if ui::login(store, email, password).await {
                nav.replace(Route::Dashboard {});
            }
        });
    };

    rsx! {
        div {
            class: "login-page",
            form {
                class: "login-card",
                onsubmit: handle_submit,
                h1 { "Clientline" }
                p {
                    class: "login-subtitle",
                    "Sign in to your CRM"
                }

                if let Some(error) = error {
                    div {
                        class: "error-banner",
                        "{error}"
                    }
                }

                div {
                    class: "form-field",
                    label { r#for: "email", "Email" }
                    input {
                        id: "email",
                        r#type: "email",
                        autocomplete: "email",
                        value: email(),
                        oninput: move |evt| email.set(evt.value()),
                    }
                }
                div {
                    class: "form-field",
                    label { r#for: "password", "Password" }
                    input {
                        id: "password",
                        r#type: "password",
                        autocomplete: "current-password",
                        value: password(),
                        oninput: move |evt| password.set(evt.value()),
                    }
                }

                button {
                    class: "primary login-submit",
                    r#type: "submit",
                    disabled: loading,
                    if loading { "Signing in..." } else { "Sign In" }
                }
            }
        }
    }
}
