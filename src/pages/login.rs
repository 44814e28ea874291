//! Account + password login.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::{spawn_task, use_gateway};
use crate::net::types::Credentials;
use crate::routes::Page;
use crate::state::auth::{AuthState, sign_in};

fn validate_credentials(account: &str, password: &str) -> Result<Credentials, &'static str> {
    let account = account.trim();
    if account.is_empty() || password.is_empty() {
        return Err("Enter both account and password.");
    }
    Ok(Credentials { account: account.to_owned(), password: password.to_owned() })
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let gateway = use_gateway();
    let navigate = use_navigate();

    let account = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let credentials = match validate_credentials(&account.get(), &password.get()) {
            Ok(c) => c,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Signing in...".to_owned());

        let gateway = gateway.get_value();
        let navigate = navigate.clone();
        spawn_task(async move {
            match sign_in(&gateway, &credentials).await {
                Ok(user) => {
                    auth.set(AuthState { user: Some(user), logged_in: true });
                    info.set(String::new());
                    let target = Page::PersonalDashboard.href(None).unwrap_or_default();
                    navigate(&target, NavigateOptions::default());
                }
                Err(e) => info.set(format!("Login failed: {}", e.user_message())),
            }
            busy.set(false);
        });
    };

    view! {
        <div class="login-page">
            <form class="login-form" on:submit=on_submit>
                <h1>"Log in"</h1>
                <input
                    class="login-input"
                    type="text"
                    placeholder="Account"
                    prop:value=move || account.get()
                    on:input=move |ev| account.set(event_target_value(&ev))
                />
                <input
                    class="login-input"
                    type="password"
                    placeholder="Password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <button class="login-button" type="submit" disabled=move || busy.get()>
                    "Log in"
                </button>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </form>
        </div>
    }
}
