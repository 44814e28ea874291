use std::fmt::Display;

use crate::net::error::ApiError;
use crate::net::gateway::Gateway;
use crate::net::request::{ApiCall, ApiResponse};
use crate::net::transport::Transport;
use crate::net::types::{StudentRegistration, StudentUpdate};

/// `/student/*` endpoints.
pub struct StudentApi<'a, T> {
    gateway: &'a Gateway<T>,
}

impl<'a, T: Transport> StudentApi<'a, T> {
    pub(crate) fn new(gateway: &'a Gateway<T>) -> Self {
        Self { gateway }
    }

    /// `POST /student/register`
    pub async fn register_student(
        &self,
        student: &StudentRegistration,
    ) -> Result<ApiResponse, ApiError> {
        let call = ApiCall::post("/student/register").with_json(student)?;
        self.gateway.send(call).await
    }

    /// `GET /student/user/{userId}`
    pub async fn get_student_by_user_id(
        &self,
        user_id: impl Display,
    ) -> Result<ApiResponse, ApiError> {
        let call = ApiCall::get(format!("/student/user/{user_id}"));
        self.gateway.send(call).await
    }

    /// `PUT /student/profile`
    pub async fn update_student_info(
        &self,
        update: &StudentUpdate,
    ) -> Result<ApiResponse, ApiError> {
        let call = ApiCall::put("/student/profile").with_json(update)?;
        self.gateway.send(call).await
    }
}
