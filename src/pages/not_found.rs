use leptos::prelude::*;
use leptos_router::components::A;

/// Rendered when no route table entry matches the current path.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <section class="not-found">
            <h1>"Page not found."</h1>
            <A href="/">"Back to home"</A>
        </section>
    }
}
