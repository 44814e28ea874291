//! Landing page.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::routes::Page;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <section class="home">
            <h1>"Find the right tutor"</h1>
            <p>"Browse courses, book a lesson, and review your teacher afterwards."</p>
            <div class="home__actions">
                <A href=Page::Search.href(None).unwrap_or_default()>"Search courses"</A>
                <A href=Page::RegisterTeacher.href(None).unwrap_or_default()>"Teach with us"</A>
            </div>
        </section>
    }
}
