//! New account registration.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::{spawn_task, use_gateway};
use crate::net::types::{RegisterRequest, UserRole};
use crate::routes::Page;

fn parse_role(raw: &str) -> Option<UserRole> {
    match raw {
        "student" => Some(UserRole::Student),
        "teacher" => Some(UserRole::Teacher),
        _ => None,
    }
}

/// Length limits match the backend's user schema.
fn validate_registration(
    name: &str,
    account: &str,
    password: &str,
    confirm: &str,
    role: &str,
) -> Result<RegisterRequest, &'static str> {
    let name = name.trim();
    let account = account.trim();
    if name.is_empty() || name.chars().count() > 100 {
        return Err("Name must be 1-100 characters.");
    }
    if !(3..=50).contains(&account.chars().count()) {
        return Err("Account must be 3-50 characters.");
    }
    if !(6..=100).contains(&password.chars().count()) {
        return Err("Password must be 6-100 characters.");
    }
    if password != confirm {
        return Err("Passwords do not match.");
    }
    let role = parse_role(role).ok_or("Choose student or teacher.")?;
    Ok(RegisterRequest {
        name: name.to_owned(),
        account: account.to_owned(),
        password: password.to_owned(),
        role,
    })
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let gateway = use_gateway();
    let navigate = use_navigate();

    let name = RwSignal::new(String::new());
    let account = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let role = RwSignal::new("student".to_owned());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = match validate_registration(
            &name.get(),
            &account.get(),
            &password.get(),
            &confirm.get(),
            &role.get(),
        ) {
            Ok(r) => r,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);

        let gateway = gateway.get_value();
        let navigate = navigate.clone();
        spawn_task(async move {
            match gateway.auth().register(&request).await {
                Ok(_) => {
                    let target = Page::Login.href(None).unwrap_or_default();
                    navigate(&target, NavigateOptions::default());
                }
                Err(e) => info.set(format!("Registration failed: {}", e.user_message())),
            }
            busy.set(false);
        });
    };

    view! {
        <form class="register-form" on:submit=on_submit>
            <h1>"Create an account"</h1>
            <input
                type="text"
                placeholder="Name"
                on:input=move |ev| name.set(event_target_value(&ev))
            />
            <input
                type="text"
                placeholder="Account"
                on:input=move |ev| account.set(event_target_value(&ev))
            />
            <input
                type="password"
                placeholder="Password"
                on:input=move |ev| password.set(event_target_value(&ev))
            />
            <input
                type="password"
                placeholder="Confirm password"
                on:input=move |ev| confirm.set(event_target_value(&ev))
            />
            <select on:change=move |ev| role.set(event_target_value(&ev))>
                <option value="student" selected=true>"Student"</option>
                <option value="teacher">"Teacher"</option>
            </select>
            <button type="submit" disabled=move || busy.get()>"Sign up"</button>
            <p class="form-message">{move || info.get()}</p>
        </form>
    }
}
