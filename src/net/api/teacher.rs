use std::fmt::Display;

use crate::net::error::ApiError;
use crate::net::gateway::Gateway;
use crate::net::request::{ApiCall, ApiResponse};
use crate::net::transport::Transport;
use crate::net::types::{TeacherRegistration, TeacherUpdate};

/// `/teacher/*` endpoints.
pub struct TeacherApi<'a, T> {
    gateway: &'a Gateway<T>,
}

impl<'a, T: Transport> TeacherApi<'a, T> {
    pub(crate) fn new(gateway: &'a Gateway<T>) -> Self {
        Self { gateway }
    }

    /// `POST /teacher/register`
    pub async fn register_teacher(
        &self,
        teacher: &TeacherRegistration,
    ) -> Result<ApiResponse, ApiError> {
        let call = ApiCall::post("/teacher/register").with_json(teacher)?;
        self.gateway.send(call).await
    }

    /// `GET /teacher/{id}`
    pub async fn get_teacher_info(
        &self,
        teacher_id: impl Display,
    ) -> Result<ApiResponse, ApiError> {
        let call = ApiCall::get(format!("/teacher/{teacher_id}"));
        self.gateway.send(call).await
    }

    /// `PUT /teacher/profile`
    pub async fn update_teacher_info(
        &self,
        update: &TeacherUpdate,
    ) -> Result<ApiResponse, ApiError> {
        let call = ApiCall::put("/teacher/profile").with_json(update)?;
        self.gateway.send(call).await
    }

    /// `GET /teacher/courses`
    pub async fn get_teacher_courses(&self) -> Result<ApiResponse, ApiError> {
        self.gateway.send(ApiCall::get("/teacher/courses")).await
    }

    /// `GET /teacher/all`
    pub async fn get_all_teachers(&self) -> Result<ApiResponse, ApiError> {
        self.gateway.send(ApiCall::get("/teacher/all")).await
    }
}
