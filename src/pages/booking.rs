//! Booking request form for a course.

#[cfg(test)]
#[path = "booking_test.rs"]
mod booking_test;

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::{spawn_task, use_gateway};
use crate::net::types::BookingInput;
use crate::routes::Page;
use crate::state::auth::AuthState;

const MAX_MESSAGE_LEN: usize = 500;

/// `YYYY-MM-DD`, optionally followed by a time part.
fn is_iso_date(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    bytes.len() >= 10
        && bytes[..10]
            .iter()
            .enumerate()
            .all(|(i, b)| if i == 4 || i == 7 { *b == b'-' } else { b.is_ascii_digit() })
        && (bytes.len() == 10 || matches!(bytes[10], b'T' | b' '))
}

fn validate_booking(
    student_id: Option<i64>,
    course_id: &str,
    schedule_date: &str,
    message: &str,
) -> Result<BookingInput, &'static str> {
    let student_id = student_id.ok_or("Log in to book a course.")?;
    let course_id = super::parse_id(course_id).ok_or("Choose a course.")?;
    let schedule_date = schedule_date.trim();
    if !is_iso_date(schedule_date) {
        return Err("Pick a date.");
    }
    let message = message.trim();
    if message.chars().count() > MAX_MESSAGE_LEN {
        return Err("Message must be at most 500 characters.");
    }
    Ok(BookingInput {
        course_id,
        student_id,
        schedule_date: schedule_date.to_owned(),
        message: message.to_owned(),
    })
}

#[component]
pub fn BookingPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let gateway = use_gateway();
    let navigate = use_navigate();

    let course_id = RwSignal::new(String::new());
    let schedule_date = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let student_id = auth.get().user.map(|u| u.id);
        let booking = match validate_booking(
            student_id,
            &course_id.get(),
            &schedule_date.get(),
            &message.get(),
        ) {
            Ok(b) => b,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);

        let gateway = gateway.get_value();
        let navigate = navigate.clone();
        spawn_task(async move {
            match gateway.booking().create_booking(&booking).await {
                Ok(_) => {
                    let target = Page::PersonalDashboard.href(None).unwrap_or_default();
                    navigate(&target, NavigateOptions::default());
                }
                Err(e) => info.set(format!("Booking failed: {}", e.user_message())),
            }
            busy.set(false);
        });
    };

    view! {
        <form class="booking-form" on:submit=on_submit>
            <h1>"Book a lesson"</h1>
            <input
                type="number"
                placeholder="Course id"
                prop:value=move || course_id.get()
                on:input=move |ev| course_id.set(event_target_value(&ev))
            />
            <input
                type="date"
                prop:value=move || schedule_date.get()
                on:input=move |ev| schedule_date.set(event_target_value(&ev))
            />
            <textarea
                placeholder="Message to the teacher"
                prop:value=move || message.get()
                on:input=move |ev| message.set(event_target_value(&ev))
            ></textarea>
            <button type="submit" disabled=move || busy.get()>"Send request"</button>
            <p class="form-message">{move || info.get()}</p>
        </form>
    }
}
