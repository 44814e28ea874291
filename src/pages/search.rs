//! Course search with links to each teacher's page.

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::app::{spawn_task, use_gateway};
use crate::net::types::{Course, CourseFilters};
use crate::routes::Page;

fn build_filters(
    keyword: &str,
    location: &str,
    max_price: &str,
) -> Result<CourseFilters, &'static str> {
    let max_price = match max_price.trim() {
        "" => None,
        raw => match raw.parse::<f64>() {
            Ok(v) if v > 0.0 => Some(v),
            _ => return Err("Max price must be a positive number."),
        },
    };
    Ok(CourseFilters {
        keyword: super::non_blank(keyword),
        location: super::non_blank(location),
        max_price,
        ..CourseFilters::default()
    })
}

pub(crate) fn price_label(course: &Course) -> String {
    course.price.map_or_else(|| "Price on request".to_owned(), |p| format!("NT${p:.0}"))
}

#[component]
pub fn SearchPage() -> impl IntoView {
    let gateway = use_gateway();

    let keyword = RwSignal::new(String::new());
    let location = RwSignal::new(String::new());
    let max_price = RwSignal::new(String::new());
    let courses = RwSignal::new(Vec::<Course>::new());
    let info = RwSignal::new(String::new());

    let run_search = move |filters: CourseFilters| {
        let gateway = gateway.get_value();
        info.set("Searching...".to_owned());
        spawn_task(async move {
            let outcome = gateway.course().get_all_courses(&filters).await;
            match outcome.and_then(|r| r.data::<Vec<Course>>()) {
                Ok(found) => {
                    let status = if found.is_empty() { "No courses found." } else { "" };
                    info.set(status.to_owned());
                    courses.set(found);
                }
                Err(e) => info.set(format!("Search failed: {}", e.user_message())),
            }
        });
    };

    run_search(CourseFilters::default());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        match build_filters(&keyword.get(), &location.get(), &max_price.get()) {
            Ok(filters) => run_search(filters),
            Err(msg) => info.set(msg.to_owned()),
        }
    };

    view! {
        <section class="search">
            <form class="search-form" on:submit=on_submit>
                <input
                    type="search"
                    placeholder="Subject or keyword"
                    on:input=move |ev| keyword.set(event_target_value(&ev))
                />
                <input
                    type="text"
                    placeholder="Location"
                    on:input=move |ev| location.set(event_target_value(&ev))
                />
                <input
                    type="number"
                    placeholder="Max price"
                    on:input=move |ev| max_price.set(event_target_value(&ev))
                />
                <button type="submit">"Search"</button>
            </form>
            <p class="form-message">{move || info.get()}</p>
            <ul class="course-list">
                <For
                    each=move || courses.get()
                    key=|c: &Course| c.id
                    children=move |course: Course| {
                        let teacher_link = course.teacher_name.clone().and_then(|name| {
                            Page::teacher_href(&name).map(|href| view! { <A href=href>{name}</A> })
                        });
                        view! {
                            <li class="course-card">
                                <h3>{course.subject.clone()}</h3>
                                <p>{course.location.clone().unwrap_or_default()}</p>
                                <p>{price_label(&course)}</p>
                                {teacher_link}
                            </li>
                        }
                    }
                />
            </ul>
        </section>
    }
}
