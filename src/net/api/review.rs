use std::fmt::Display;

use crate::net::error::ApiError;
use crate::net::gateway::Gateway;
use crate::net::request::{ApiCall, ApiResponse};
use crate::net::transport::Transport;
use crate::net::types::{ReviewInput, ReviewUpdate};

/// `/reviews/*` endpoints.
pub struct ReviewApi<'a, T> {
    gateway: &'a Gateway<T>,
}

impl<'a, T: Transport> ReviewApi<'a, T> {
    pub(crate) fn new(gateway: &'a Gateway<T>) -> Self {
        Self { gateway }
    }

    /// `POST /reviews/create`
    pub async fn create_review(&self, review: &ReviewInput) -> Result<ApiResponse, ApiError> {
        let call = ApiCall::post("/reviews/create").with_json(review)?;
        self.gateway.send(call).await
    }

    /// `GET /reviews/course/{courseId}`
    pub async fn get_course_reviews(
        &self,
        course_id: impl Display,
    ) -> Result<ApiResponse, ApiError> {
        let call = ApiCall::get(format!("/reviews/course/{course_id}"));
        self.gateway.send(call).await
    }

    /// `GET /reviews/teacher/{teacherId}`
    pub async fn get_teacher_reviews(
        &self,
        teacher_id: impl Display,
    ) -> Result<ApiResponse, ApiError> {
        let call = ApiCall::get(format!("/reviews/teacher/{teacher_id}"));
        self.gateway.send(call).await
    }

    /// `PUT /reviews/{id}`
    pub async fn update_review(
        &self,
        review_id: impl Display,
        update: &ReviewUpdate,
    ) -> Result<ApiResponse, ApiError> {
        let call = ApiCall::put(format!("/reviews/{review_id}"))
            .with_json(update)?;
        self.gateway.send(call).await
    }

    /// `DELETE /reviews/{id}`
    pub async fn delete_review(&self, review_id: impl Display) -> Result<ApiResponse, ApiError> {
        let call = ApiCall::delete(format!("/reviews/{review_id}"));
        self.gateway.send(call).await
    }
}
