//! Error taxonomy for gateway calls.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is per-call and recoverable: callers get the full response
//! (status and body) back so pages can decide what to show. Only
//! [`ApiError::Unauthorized`] has a side effect, applied by the gateway
//! before the error is returned.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use std::time::Duration;

use super::request::ApiResponse;

/// Failure raised by a [`Transport`](super::transport::Transport) before any
/// response arrived.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    #[error("network error: {0}")]
    Network(String),
    #[error("request timed out after {}ms", .0.as_millis())]
    Timeout(Duration),
}

/// Outcome of a rejected gateway call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// No response received.
    #[error("network error: {0}")]
    Network(String),
    /// Abandoned after the configured timeout.
    #[error("request timed out after {}ms", .0.as_millis())]
    Timeout(Duration),
    /// HTTP 401. The session has already been cleared.
    #[error("unauthorized (401)")]
    Unauthorized(ApiResponse),
    /// HTTP 4xx other than 401.
    #[error("client error ({})", .0.status)]
    Client(ApiResponse),
    /// HTTP 5xx.
    #[error("server error ({})", .0.status)]
    Server(ApiResponse),
    /// Any other non-2xx status.
    #[error("unexpected status ({})", .0.status)]
    UnexpectedStatus(ApiResponse),
    /// The request body could not be serialized; nothing was sent.
    #[error("failed to encode request body: {0}")]
    Encode(String),
    /// The response body did not match the expected type.
    #[error("failed to decode response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// Classify a non-2xx response.
    #[must_use]
    pub fn from_status(response: ApiResponse) -> Self {
        match response.status {
            401 => Self::Unauthorized(response),
            400..=499 => Self::Client(response),
            500..=599 => Self::Server(response),
            _ => Self::UnexpectedStatus(response),
        }
    }

    /// Response carried by status-class errors.
    #[must_use]
    pub fn response(&self) -> Option<&ApiResponse> {
        match self {
            Self::Unauthorized(r)
            | Self::Client(r)
            | Self::Server(r)
            | Self::UnexpectedStatus(r) => Some(r),
            _ => None,
        }
    }

    #[must_use]
    pub fn status(&self) -> Option<u16> {
        self.response().map(|r| r.status)
    }

    /// True when no response was received at all.
    #[must_use]
    pub(crate) fn is_transport(&self) -> bool {
        matches!(self, Self::Network(_) | Self::Timeout(_))
    }

    /// Short text suitable for a status line in a page.
    #[must_use]
    pub fn user_message(&self) -> String {
        if self.is_transport() {
            return format!("cannot reach the server ({self})");
        }
        self.response()
            .and_then(ApiResponse::error_message)
            .unwrap_or_else(|| self.to_string())
    }
}

impl From<TransportError> for ApiError {
    fn from(err: TransportError) -> Self {
        match err {
            TransportError::Network(msg) => Self::Network(msg),
            TransportError::Timeout(after) => Self::Timeout(after),
        }
    }
}
