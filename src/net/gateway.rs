//! The single outbound channel to the tutoring API.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages never talk HTTP directly. They call a group accessor
//! (`gateway.course().get_course(..)`) which builds one [`ApiCall`] and hands
//! it to [`Gateway::send`].
//!
//! INTERCEPTION
//! ============
//! Outbound: the session token, when present, becomes
//! `Authorization: Bearer <token>`. A missing token never blocks a request.
//!
//! Inbound: a 401 clears the session and fires `on_session_expired` once for
//! that response. Every other outcome reaches the caller unmodified. Nothing
//! is retried.

#[cfg(test)]
#[path = "gateway_test.rs"]
mod gateway_test;

use std::rc::Rc;

use super::api::{
    AuthApi, BookingApi, CourseApi, PaymentApi, ReviewApi, StudentApi, TeacherApi, UserApi,
};
use super::config::ClientConfig;
use super::error::{ApiError, TransportError};
use super::request::{ApiCall, ApiResponse, OutboundRequest};
use super::session::Session;
use super::transport::Transport;

/// Shared API client.
pub struct Gateway<T> {
    config: ClientConfig,
    session: Session,
    transport: T,
    on_session_expired: Rc<dyn Fn()>,
}

impl<T: Clone> Clone for Gateway<T> {
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
            session: self.session.clone(),
            transport: self.transport.clone(),
            on_session_expired: Rc::clone(&self.on_session_expired),
        }
    }
}

impl<T> std::fmt::Debug for Gateway<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Gateway")
            .field("config", &self.config)
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}

impl<T: Transport> Gateway<T> {
    /// `on_session_expired` runs after the session is cleared by a 401.
    pub fn new(
        config: ClientConfig,
        session: Session,
        transport: T,
        on_session_expired: impl Fn() + 'static,
    ) -> Self {
        Self { config, session, transport, on_session_expired: Rc::new(on_session_expired) }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Dispatch one call.
    ///
    /// # Errors
    ///
    /// Transport failures, timeouts and non-2xx statuses, classified by
    /// [`ApiError::from_status`].
    pub async fn send(&self, call: ApiCall) -> Result<ApiResponse, ApiError> {
        let request = self.prepare(call)?;
        log::debug!("{} {}", request.method, request.url);
        let outcome = self.transport.execute(request).await;
        self.intercept_response(outcome)
    }

    /// Outbound interception: resolve the URL, merge default headers and the
    /// bearer credential, and serialize the body.
    ///
    /// # Errors
    ///
    /// [`ApiError::Encode`] if the JSON body cannot be rendered.
    pub fn prepare(&self, call: ApiCall) -> Result<OutboundRequest, ApiError> {
        let mut headers = vec![("Content-Type".to_owned(), self.config.content_type.clone())];
        if let Some(token) = self.session.token() {
            headers.push(("Authorization".to_owned(), format!("Bearer {token}")));
        }
        let body = call
            .body
            .as_ref()
            .map(serde_json::to_string)
            .transpose()
            .map_err(|e| ApiError::Encode(e.to_string()))?;
        Ok(OutboundRequest {
            method: call.method,
            url: self.config.url_for(&call.path),
            headers,
            query: call.query,
            body,
            timeout: self.config.timeout,
        })
    }

    /// Inbound interception.
    fn intercept_response(
        &self,
        outcome: Result<ApiResponse, TransportError>,
    ) -> Result<ApiResponse, ApiError> {
        let response = match outcome {
            Ok(response) => response,
            Err(err) => {
                log::warn!("request failed before a response arrived: {err}");
                return Err(err.into());
            }
        };
        if response.is_success() {
            return Ok(response);
        }
        let err = ApiError::from_status(response);
        if matches!(err, ApiError::Unauthorized(_)) {
            log::warn!("session rejected by server; clearing credentials");
            self.session.clear();
            (self.on_session_expired)();
        }
        Err(err)
    }

    pub fn auth(&self) -> AuthApi<'_, T> {
        AuthApi::new(self)
    }

    pub fn user(&self) -> UserApi<'_, T> {
        UserApi::new(self)
    }

    pub fn course(&self) -> CourseApi<'_, T> {
        CourseApi::new(self)
    }

    pub fn teacher(&self) -> TeacherApi<'_, T> {
        TeacherApi::new(self)
    }

    pub fn student(&self) -> StudentApi<'_, T> {
        StudentApi::new(self)
    }

    pub fn booking(&self) -> BookingApi<'_, T> {
        BookingApi::new(self)
    }

    pub fn review(&self) -> ReviewApi<'_, T> {
        ReviewApi::new(self)
    }

    pub fn payment(&self) -> PaymentApi<'_, T> {
        PaymentApi::new(self)
    }
}
