//! Route-level page components.
//!
//! Pages validate form input with small pure helpers, then issue at most a
//! few gateway calls. Anything shown to the user on failure comes from
//! [`ApiError::user_message`](crate::net::ApiError::user_message).

pub mod about;
pub mod booking;
pub mod course_form;
pub mod home;
pub mod login;
pub mod not_found;
pub mod personal_dashboard;
pub mod register;
pub mod register_teacher;
pub mod review_form;
pub mod search;
pub mod teacher_dashboard;
pub mod teacher_info;

/// Trimmed value, or `None` when blank.
pub(crate) fn non_blank(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

/// Positive integer id typed into a form field.
pub(crate) fn parse_id(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok().filter(|id| *id > 0)
}
