//! Grouped REST endpoints.
//!
//! Each function maps typed parameters onto exactly one
//! [`Gateway::send`](super::gateway::Gateway::send) call and adds no logic of
//! its own. Path parameters are interpolated into the path, filters become
//! query pairs, and payloads are sent as the JSON body.
//!
//! Every endpoint fails the same way, see [`ApiError`](super::error::ApiError).

#![allow(clippy::missing_errors_doc)]


mod auth;
mod booking;
mod course;
mod payment;
mod review;
mod student;
mod teacher;
mod user;

pub use auth::AuthApi;
pub use booking::BookingApi;
pub use course::CourseApi;
pub use payment::PaymentApi;
pub use review::ReviewApi;
pub use student::StudentApi;
pub use teacher::TeacherApi;
pub use user::UserApi;
