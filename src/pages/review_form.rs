//! Review form for a finished course.

#[cfg(test)]
#[path = "review_form_test.rs"]
mod review_form_test;

use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::app::{spawn_task, use_gateway};
use crate::net::types::ReviewInput;

const MAX_COMMENT_LEN: usize = 1000;

/// `1`-`5` with at most one decimal place, as the backend stores it.
fn is_valid_rating(raw: &str) -> bool {
    let (whole, frac) = raw.split_once('.').unwrap_or((raw, ""));
    let whole_ok = matches!(whole, "1" | "2" | "3" | "4" | "5");
    let frac_ok =
        !raw.contains('.') || (frac.len() == 1 && frac.bytes().all(|b| b.is_ascii_digit()));
    whole_ok && frac_ok && (whole != "5" || frac.bytes().all(|b| b == b'0'))
}

fn validate_review(
    course_id: &str,
    rating: &str,
    comment: &str,
) -> Result<ReviewInput, &'static str> {
    let course_id = super::parse_id(course_id).ok_or("Choose a course.")?;
    let rating = rating.trim();
    if !is_valid_rating(rating) {
        return Err("Rating must be between 1 and 5.");
    }
    let comment = super::non_blank(comment);
    if comment.as_ref().is_some_and(|c| c.chars().count() > MAX_COMMENT_LEN) {
        return Err("Comment must be at most 1000 characters.");
    }
    Ok(ReviewInput { course_id, rating: rating.to_owned(), comment })
}

#[component]
pub fn ReviewFormPage() -> impl IntoView {
    let gateway = use_gateway();

    let course_id = RwSignal::new(String::new());
    let rating = RwSignal::new("5".to_owned());
    let comment = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let review = match validate_review(&course_id.get(), &rating.get(), &comment.get()) {
            Ok(r) => r,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);

        let gateway = gateway.get_value();
        spawn_task(async move {
            match gateway.review().create_review(&review).await {
                Ok(_) => {
                    comment.set(String::new());
                    info.set("Thanks for your review.".to_owned());
                }
                Err(e) => info.set(format!("Could not submit review: {}", e.user_message())),
            }
            busy.set(false);
        });
    };

    view! {
        <form class="review-form" on:submit=on_submit>
            <h1>"Review a course"</h1>
            <input
                type="number"
                placeholder="Course id"
                prop:value=move || course_id.get()
                on:input=move |ev| course_id.set(event_target_value(&ev))
            />
            <input
                type="number"
                min="1"
                max="5"
                step="0.1"
                prop:value=move || rating.get()
                on:input=move |ev| rating.set(event_target_value(&ev))
            />
            <textarea
                placeholder="How was the lesson?"
                prop:value=move || comment.get()
                on:input=move |ev| comment.set(event_target_value(&ev))
            ></textarea>
            <button type="submit" disabled=move || busy.get()>"Submit review"</button>
            <p class="form-message">{move || info.get()}</p>
        </form>
    }
}
