//! Teacher dashboard: incoming bookings with confirm / complete / cancel
//! actions.

#[cfg(test)]
#[path = "teacher_dashboard_test.rs"]
mod teacher_dashboard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::app::{spawn_task, use_gateway};
use crate::net::types::{Booking, BookingStatus};
use crate::routes::Page;
use crate::state::auth::AuthState;

/// Status transitions a teacher may apply from `current`.
fn next_statuses(current: BookingStatus) -> &'static [BookingStatus] {
    match current {
        BookingStatus::Pending => &[BookingStatus::Confirmed, BookingStatus::Cancelled],
        BookingStatus::Confirmed => &[BookingStatus::Completed, BookingStatus::Cancelled],
        BookingStatus::Completed | BookingStatus::Cancelled => &[],
    }
}

fn action_label(status: BookingStatus) -> &'static str {
    match status {
        BookingStatus::Pending => "Reopen",
        BookingStatus::Confirmed => "Confirm",
        BookingStatus::Completed => "Mark completed",
        BookingStatus::Cancelled => "Cancel",
    }
}

#[component]
pub fn TeacherDashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let gateway = use_gateway();
    let navigate = use_navigate();

    let bookings = RwSignal::new(Vec::<Booking>::new());
    let info = RwSignal::new(String::new());

    Effect::new(move || {
        if !auth.get().logged_in {
            navigate(&Page::Login.href(None).unwrap_or_default(), NavigateOptions::default());
        }
    });

    if auth.get_untracked().logged_in {
        let gateway = gateway.get_value();
        spawn_task(async move {
            let outcome = gateway.booking().get_teacher_bookings().await;
            match outcome.and_then(|r| r.data::<Vec<Booking>>()) {
                Ok(list) => bookings.set(list),
                Err(e) => info.set(format!("Could not load bookings: {}", e.user_message())),
            }
        });
    }

    let set_status = move |booking_id: i64, status: BookingStatus| {
        let gateway = gateway.get_value();
        spawn_task(async move {
            match gateway.booking().update_booking_status(booking_id, status).await {
                Ok(_) => bookings.update(|list| {
                    if let Some(b) = list.iter_mut().find(|b| b.id == booking_id) {
                        b.status = status;
                    }
                }),
                Err(e) => info.set(format!("Update failed: {}", e.user_message())),
            }
        });
    };

    view! {
        <section class="dashboard dashboard--teacher">
            <h1>"Incoming bookings"</h1>
            <p class="form-message">{move || info.get()}</p>
            <ul class="booking-list">
                <For
                    each=move || bookings.get()
                    key=|b: &Booking| (b.id, b.status.as_str())
                    children=move |booking: Booking| {
                        let id = booking.id;
                        let actions = next_statuses(booking.status)
                            .iter()
                            .map(|status| {
                                let status = *status;
                                view! {
                                    <button on:click=move |_| set_status(id, status)>
                                        {action_label(status)}
                                    </button>
                                }
                            })
                            .collect_view();
                        view! {
                            <li class="booking-row">
                                <span>{booking.student_name.clone().unwrap_or_default()}</span>
                                <span>{booking.course_subject.clone().unwrap_or_default()}</span>
                                <span>{booking.schedule_date.clone()}</span>
                                <span class="booking-status">{booking.status.as_str()}</span>
                                {actions}
                            </li>
                        }
                    }
                />
            </ul>
            <A href=Page::CourseForm.href(None).unwrap_or_default()>"Publish a course"</A>
        </section>
    }
}
