//! Static about page.

use leptos::prelude::*;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <section class="about">
            <h1>"About"</h1>
            <p>"A marketplace connecting students with verified private tutors."</p>
        </section>
    }
}
