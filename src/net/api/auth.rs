use crate::net::error::ApiError;
use crate::net::gateway::Gateway;
use crate::net::request::{ApiCall, ApiResponse};
use crate::net::transport::Transport;
use crate::net::types::{Credentials, RegisterRequest};

/// `/auth/*` endpoints.
pub struct AuthApi<'a, T> {
    gateway: &'a Gateway<T>,
}

impl<'a, T: Transport> AuthApi<'a, T> {
    pub(crate) fn new(gateway: &'a Gateway<T>) -> Self {
        Self { gateway }
    }

    /// `POST /auth/login`. The caller stores the returned token.
    pub async fn login(&self, credentials: &Credentials) -> Result<ApiResponse, ApiError> {
        let call = ApiCall::post("/auth/login").with_json(credentials)?;
        self.gateway.send(call).await
    }

    /// `POST /auth/register`
    pub async fn register(&self, user: &RegisterRequest) -> Result<ApiResponse, ApiError> {
        let call = ApiCall::post("/auth/register").with_json(user)?;
        self.gateway.send(call).await
    }

    /// `POST /auth/logout`
    pub async fn logout(&self) -> Result<ApiResponse, ApiError> {
        self.gateway.send(ApiCall::post("/auth/logout")).await
    }

    /// `GET /auth/me`
    pub async fn current_user(&self) -> Result<ApiResponse, ApiError> {
        self.gateway.send(ApiCall::get("/auth/me")).await
    }

    /// `POST /auth/refresh`
    pub async fn refresh_token(&self) -> Result<ApiResponse, ApiError> {
        self.gateway.send(ApiCall::post("/auth/refresh")).await
    }
}
