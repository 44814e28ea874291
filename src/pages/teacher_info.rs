//! Public teacher profile at `/teacher/:teacherName`.

#[cfg(test)]
#[path = "teacher_info_test.rs"]
mod teacher_info_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::app::{spawn_task, use_gateway};
use crate::net::types::{Course, CourseFilters, Teacher};
use crate::routes::Page;

use super::search::price_label;

fn find_teacher<'a>(teachers: &'a [Teacher], name: &str) -> Option<&'a Teacher> {
    teachers.iter().find(|t| t.name.trim().eq_ignore_ascii_case(name))
}

#[component]
pub fn TeacherInfoPage(teacher_name: String) -> impl IntoView {
    let gateway = use_gateway();
    let name = teacher_name.trim().to_owned();

    let teacher = RwSignal::new(None::<Teacher>);
    let courses = RwSignal::new(Vec::<Course>::new());
    let info = RwSignal::new(String::new());

    if name.is_empty() {
        info.set("Teacher not found.".to_owned());
    } else {
        let gateway = gateway.get_value();
        let name = name.clone();
        spawn_task(async move {
            let outcome = gateway.teacher().get_all_teachers().await;
            match outcome.and_then(|r| r.data::<Vec<Teacher>>()) {
                Ok(list) => match find_teacher(&list, &name) {
                    Some(found) => teacher.set(Some(found.clone())),
                    None => info.set("Teacher not found.".to_owned()),
                },
                Err(e) => {
                    info.set(format!("Could not load teacher: {}", e.user_message()));
                    return;
                }
            }

            let filters = CourseFilters { teacher_name: Some(name), ..CourseFilters::default() };
            let outcome = gateway.course().get_all_courses(&filters).await;
            match outcome.and_then(|r| r.data::<Vec<Course>>()) {
                Ok(list) => courses.set(list),
                Err(e) => log::warn!("teacher courses failed: {e}"),
            }
        });
    }

    let profile = move || {
        teacher.get().map(|t| {
            let premium = t.blue_premium;
            view! {
                <div class="teacher-profile">
                    <h2>
                        {t.name.clone()}
                        <Show when=move || premium>
                            <span class="badge">"Verified"</span>
                        </Show>
                    </h2>
                    <p>{t.intro.clone().unwrap_or_default()}</p>
                    <dl>
                        <dt>"Education"</dt>
                        <dd>{t.education.clone().unwrap_or_default()}</dd>
                        <dt>"Certifications"</dt>
                        <dd>{t.certifications.clone().unwrap_or_default()}</dd>
                        <dt>"Experience"</dt>
                        <dd>{t.teaching_experience.clone().unwrap_or_default()}</dd>
                    </dl>
                </div>
            }
        })
    };

    view! {
        <section class="teacher-info">
            <h1>{name}</h1>
            <p class="form-message">{move || info.get()}</p>
            {profile}
            <ul class="course-list">
                <For
                    each=move || courses.get()
                    key=|c: &Course| c.id
                    children=move |course: Course| {
                        view! {
                            <li class="course-card">
                                <h3>{course.subject.clone()}</h3>
                                <span class="course-card__price">{price_label(&course)}</span>
                            </li>
                        }
                    }
                />
            </ul>
            <A href=Page::Booking.href(None).unwrap_or_default()>"Book a lesson"</A>
        </section>
    }
}
