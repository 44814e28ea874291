use std::fmt::Display;

use crate::net::error::ApiError;
use crate::net::gateway::Gateway;
use crate::net::request::{ApiCall, ApiResponse};
use crate::net::transport::Transport;
use crate::net::types::{BookingFilters, BookingInput, BookingStatus, BookingUpdate, StatusUpdate};

/// `/booking/*` endpoints.
pub struct BookingApi<'a, T> {
    gateway: &'a Gateway<T>,
}

impl<'a, T: Transport> BookingApi<'a, T> {
    pub(crate) fn new(gateway: &'a Gateway<T>) -> Self {
        Self { gateway }
    }

    /// `POST /booking/create`
    pub async fn create_booking(&self, booking: &BookingInput) -> Result<ApiResponse, ApiError> {
        let call = ApiCall::post("/booking/create").with_json(booking)?;
        self.gateway.send(call).await
    }

    /// `GET /booking/list?{filters}`
    pub async fn get_all_bookings(
        &self,
        filters: &BookingFilters,
    ) -> Result<ApiResponse, ApiError> {
        let call = ApiCall::get("/booking/list").with_query(filters.to_query());
        self.gateway.send(call).await
    }

    /// `GET /booking/{id}`
    pub async fn get_booking(&self, booking_id: impl Display) -> Result<ApiResponse, ApiError> {
        let call = ApiCall::get(format!("/booking/{booking_id}"));
        self.gateway.send(call).await
    }

    /// `PUT /booking/{id}`
    pub async fn update_booking(
        &self,
        booking_id: impl Display,
        update: &BookingUpdate,
    ) -> Result<ApiResponse, ApiError> {
        let call = ApiCall::put(format!("/booking/{booking_id}"))
            .with_json(update)?;
        self.gateway.send(call).await
    }

    /// `DELETE /booking/{id}`
    pub async fn delete_booking(&self, booking_id: impl Display) -> Result<ApiResponse, ApiError> {
        let call = ApiCall::delete(format!("/booking/{booking_id}"));
        self.gateway.send(call).await
    }

    /// `GET /booking/user`
    pub async fn get_user_bookings(&self) -> Result<ApiResponse, ApiError> {
        self.gateway.send(ApiCall::get("/booking/user")).await
    }

    /// `GET /booking/teacher`
    pub async fn get_teacher_bookings(&self) -> Result<ApiResponse, ApiError> {
        self.gateway.send(ApiCall::get("/booking/teacher")).await
    }

    /// `PUT /booking/{id}/status` with body `{"status": ..}`.
    pub async fn update_booking_status(
        &self,
        booking_id: impl Display,
        status: BookingStatus,
    ) -> Result<ApiResponse, ApiError> {
        let call = ApiCall::put(format!("/booking/{booking_id}/status"))
            .with_json(&StatusUpdate { status })?;
        self.gateway.send(call).await
    }
}
