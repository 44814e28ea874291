//! Course publishing form for teachers.

#[cfg(test)]
#[path = "course_form_test.rs"]
mod course_form_test;

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::{spawn_task, use_gateway};
use crate::net::types::CourseInput;
use crate::routes::Page;
use crate::state::auth::AuthState;

fn validate_course(
    teacher_id: Option<i64>,
    subject: &str,
    description: &str,
    price: &str,
    location: &str,
) -> Result<CourseInput, &'static str> {
    let teacher_id = teacher_id.ok_or("Log in as a teacher to publish courses.")?;
    let subject = super::non_blank(subject).ok_or("Enter a subject.")?;
    let price = match price.trim().parse::<f64>() {
        Ok(p) if p.is_finite() && p > 0.0 => p,
        _ => return Err("Price must be a positive number."),
    };
    let location = super::non_blank(location).ok_or("Enter a location.")?;
    let description = super::non_blank(description);
    Ok(CourseInput { subject, teacher_id, description, price, location })
}

#[component]
pub fn CourseFormPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let gateway = use_gateway();
    let navigate = use_navigate();

    let subject = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let price = RwSignal::new(String::new());
    let location = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let teacher_id = auth.get().user.map(|u| u.id);
        let course = match validate_course(
            teacher_id,
            &subject.get(),
            &description.get(),
            &price.get(),
            &location.get(),
        ) {
            Ok(c) => c,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);

        let gateway = gateway.get_value();
        let navigate = navigate.clone();
        spawn_task(async move {
            match gateway.course().create_course(&course).await {
                Ok(_) => {
                    let target = Page::TeacherDashboard.href(None).unwrap_or_default();
                    navigate(&target, NavigateOptions::default());
                }
                Err(e) => info.set(format!("Could not publish course: {}", e.user_message())),
            }
            busy.set(false);
        });
    };

    view! {
        <form class="course-form" on:submit=on_submit>
            <h1>"Publish a course"</h1>
            <input
                type="text"
                placeholder="Subject"
                prop:value=move || subject.get()
                on:input=move |ev| subject.set(event_target_value(&ev))
            />
            <textarea
                placeholder="Description"
                prop:value=move || description.get()
                on:input=move |ev| description.set(event_target_value(&ev))
            ></textarea>
            <input
                type="number"
                placeholder="Price per lesson"
                prop:value=move || price.get()
                on:input=move |ev| price.set(event_target_value(&ev))
            />
            <input
                type="text"
                placeholder="Location"
                prop:value=move || location.get()
                on:input=move |ev| location.set(event_target_value(&ev))
            />
            <button type="submit" disabled=move || busy.get()>"Publish"</button>
            <p class="form-message">{move || info.get()}</p>
        </form>
    }
}
