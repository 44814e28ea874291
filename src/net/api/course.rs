use std::fmt::Display;

use crate::net::error::ApiError;
use crate::net::gateway::Gateway;
use crate::net::request::{ApiCall, ApiResponse};
use crate::net::transport::Transport;
use crate::net::types::{CourseFilters, CourseInput, CourseUpdate};

/// `/course/*` endpoints.
pub struct CourseApi<'a, T> {
    gateway: &'a Gateway<T>,
}

impl<'a, T: Transport> CourseApi<'a, T> {
    pub(crate) fn new(gateway: &'a Gateway<T>) -> Self {
        Self { gateway }
    }

    /// `GET /course/list?{filters}`
    pub async fn get_all_courses(&self, filters: &CourseFilters) -> Result<ApiResponse, ApiError> {
        let call = ApiCall::get("/course/list").with_query(filters.to_query());
        self.gateway.send(call).await
    }

    /// `GET /course/{id}`
    pub async fn get_course(&self, course_id: impl Display) -> Result<ApiResponse, ApiError> {
        let call = ApiCall::get(format!("/course/{course_id}"));
        self.gateway.send(call).await
    }

    /// `POST /course/create`
    pub async fn create_course(&self, course: &CourseInput) -> Result<ApiResponse, ApiError> {
        let call = ApiCall::post("/course/create").with_json(course)?;
        self.gateway.send(call).await
    }

    /// `PUT /course/{id}`
    pub async fn update_course(
        &self,
        course_id: impl Display,
        update: &CourseUpdate,
    ) -> Result<ApiResponse, ApiError> {
        let call = ApiCall::put(format!("/course/{course_id}"))
            .with_json(update)?;
        self.gateway.send(call).await
    }

    /// `DELETE /course/{id}`
    pub async fn delete_course(&self, course_id: impl Display) -> Result<ApiResponse, ApiError> {
        let call = ApiCall::delete(format!("/course/{course_id}"));
        self.gateway.send(call).await
    }

    /// `GET /course/search?{filters}`
    pub async fn search_courses(&self, filters: &CourseFilters) -> Result<ApiResponse, ApiError> {
        let call = ApiCall::get("/course/search")
            .with_query(filters.to_query());
        self.gateway.send(call).await
    }
}
