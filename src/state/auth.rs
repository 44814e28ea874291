//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The persisted [`Session`] is the source of truth; [`AuthState`] is its
//! reactive mirror for components. Login and logout go through here so the
//! session is written in exactly one place.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::error::ApiError;
use crate::net::gateway::Gateway;
use crate::net::session::Session;
use crate::net::transport::Transport;
use crate::net::types::{Credentials, LoginResponse, User};

/// Authentication state tracking the current user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<User>,
    pub logged_in: bool,
}

impl AuthState {
    #[must_use]
    pub fn from_session(session: &Session) -> Self {
        Self { user: session.user(), logged_in: session.is_logged_in() }
    }
}

/// Log in and persist the issued token together with the user profile.
///
/// # Errors
///
/// Any [`ApiError`] from the login call, or [`ApiError::Decode`] when the
/// success body is not a login response (the session is left untouched).
pub async fn sign_in<T: Transport>(
    gateway: &Gateway<T>,
    credentials: &Credentials,
) -> Result<User, ApiError> {
    let response = gateway.auth().login(credentials).await?;
    let login: LoginResponse = response.json()?;
    gateway.session().set(&login.access_token, Some(&login.user));
    log::debug!("signed in as {}", login.user.account);
    Ok(login.user)
}

/// Revoke the token server-side, then drop it locally regardless of outcome.
///
/// # Errors
///
/// The logout call's error, after the session has been cleared.
pub async fn sign_out<T: Transport>(gateway: &Gateway<T>) -> Result<(), ApiError> {
    let result = gateway.auth().logout().await;
    gateway.session().clear();
    result.map(|_| ())
}
