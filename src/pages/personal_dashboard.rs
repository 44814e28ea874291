//! Student dashboard: the logged-in user's bookings.
//!
//! Redirects to `/login` when no session is present.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::app::{spawn_task, use_gateway};
use crate::net::types::Booking;
use crate::routes::Page;
use crate::state::auth::AuthState;

#[component]
pub fn PersonalDashboardPage() -> impl IntoView {
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
            let outcome = gateway.booking().get_user_bookings().await;
            match outcome.and_then(|r| r.data::<Vec<Booking>>()) {
                Ok(list) => bookings.set(list),
                Err(e) => info.set(format!("Could not load bookings: {}", e.user_message())),
            }
        });
    }

    let greeting = move || {
        auth.get()
            .user
            .map_or_else(|| "My bookings".to_owned(), |u| format!("{}'s bookings", u.name))
    };

    view! {
        <section class="dashboard">
            <h1>{greeting}</h1>
            <p class="form-message">{move || info.get()}</p>
            <ul class="booking-list">
                <For
                    each=move || bookings.get()
                    key=|b: &Booking| b.id
                    children=move |booking: Booking| {
                        view! {
                            <li class="booking-row">
                                <span>{booking.course_subject.clone().unwrap_or_default()}</span>
                                <span>{booking.schedule_date.clone()}</span>
                                <span class="booking-status">{booking.status.as_str()}</span>
                            </li>
                        }
                    }
                />
            </ul>
            <A href=Page::ReviewForm.href(None).unwrap_or_default()>"Review a finished course"</A>
        </section>
    }
}
