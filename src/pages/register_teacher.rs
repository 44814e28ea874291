//! Teacher profile registration for an existing account.

#[cfg(test)]
#[path = "register_teacher_test.rs"]
mod register_teacher_test;

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::{spawn_task, use_gateway};
use crate::net::types::TeacherRegistration;
use crate::routes::Page;
use crate::state::auth::AuthState;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct TeacherForm {
    name: String,
    email: String,
    phone: String,
    education: String,
    certifications: String,
    intro: String,
    teaching_experience: String,
}

type FieldGet = fn(&TeacherForm) -> String;
type FieldSet = fn(&mut TeacherForm, String);

fn looks_like_email(raw: &str) -> bool {
    match raw.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.split('.').count() >= 2
                && domain.split('.').all(|part| !part.is_empty())
        }
        None => false,
    }
}

fn validate_teacher(
    user_id: Option<i64>,
    form: &TeacherForm,
) -> Result<TeacherRegistration, &'static str> {
    let user_id = user_id.ok_or("Log in before registering as a teacher.")?;
    let name = super::non_blank(&form.name).ok_or("Enter your name.")?;
    let email = form.email.trim();
    if !looks_like_email(email) {
        return Err("Enter a valid email address.");
    }
    let required = |raw: &str| super::non_blank(raw).ok_or("Fill in every profile section.");
    Ok(TeacherRegistration {
        user_id,
        name,
        email: email.to_owned(),
        education: required(&form.education)?,
        certifications: required(&form.certifications)?,
        intro: required(&form.intro)?,
        teaching_experience: required(&form.teaching_experience)?,
        phone: super::non_blank(&form.phone),
        gender: None,
        age: None,
        avatar: None,
    })
}

#[component]
pub fn RegisterTeacherPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let gateway = use_gateway();
    let navigate = use_navigate();

    let form = RwSignal::new(TeacherForm::default());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let user_id = auth.get().user.map(|u| u.id);
        let teacher = match validate_teacher(user_id, &form.get()) {
            Ok(t) => t,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);

        let gateway = gateway.get_value();
        let navigate = navigate.clone();
        spawn_task(async move {
            match gateway.teacher().register_teacher(&teacher).await {
                Ok(_) => {
                    let target = Page::TeacherDashboard.href(None).unwrap_or_default();
                    navigate(&target, NavigateOptions::default());
                }
                Err(e) => info.set(format!("Registration failed: {}", e.user_message())),
            }
            busy.set(false);
        });
    };

    let field = move |label: &'static str, get: FieldGet, set: FieldSet| {
        view! {
            <label>
                {label}
                <input
                    type="text"
                    prop:value=move || form.with(get)
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|f| set(f, value));
                    }
                />
            </label>
        }
    };

    view! {
        <form class="register-teacher-form" on:submit=on_submit>
            <h1>"Become a teacher"</h1>
            {field("Name", |f| f.name.clone(), |f, v| f.name = v)}
            {field("Email", |f| f.email.clone(), |f, v| f.email = v)}
            {field("Phone", |f| f.phone.clone(), |f, v| f.phone = v)}
            {field("Education", |f| f.education.clone(), |f, v| f.education = v)}
            {field("Certifications", |f| f.certifications.clone(), |f, v| f.certifications = v)}
            {field("Introduction", |f| f.intro.clone(), |f, v| f.intro = v)}
            {field(
                "Teaching experience",
                |f| f.teaching_experience.clone(),
                |f, v| f.teaching_experience = v,
            )}
            <button type="submit" disabled=move || busy.get()>"Submit"</button>
            <p class="form-message">{move || info.get()}</p>
        </form>
    }
}
