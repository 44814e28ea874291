use crate::net::error::ApiError;
use crate::net::gateway::Gateway;
use crate::net::request::{ApiCall, ApiResponse};
use crate::net::transport::Transport;
use crate::net::types::ProfileUpdate;

/// `/users*` endpoints.
pub struct UserApi<'a, T> {
    gateway: &'a Gateway<T>,
}

impl<'a, T: Transport> UserApi<'a, T> {
    pub(crate) fn new(gateway: &'a Gateway<T>) -> Self {
        Self { gateway }
    }

    /// `GET /users`
    pub async fn get_profile(&self) -> Result<ApiResponse, ApiError> {
        self.gateway.send(ApiCall::get("/users")).await
    }

    /// `PUT /users/profile`
    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<ApiResponse, ApiError> {
        let call = ApiCall::put("/users/profile").with_json(update)?;
        self.gateway.send(call).await
    }

    /// `DELETE /users/profile`
    pub async fn delete_user(&self) -> Result<ApiResponse, ApiError> {
        self.gateway.send(ApiCall::delete("/users/profile")).await
    }
}
